use super::*;

fn sample_envelope() -> Envelope {
    Envelope {
        id: "ev-1".to_owned(),
        ts: 42,
        event: "post:created".to_owned(),
        data: serde_json::json!({
            "id": "p1",
            "body": "hello",
            "nested": {"k": "v"},
            "nil": null
        }),
    }
}

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Note {
    id: String,
    body: String,
}

#[test]
fn entity_and_action_split_the_event_name() {
    let envelope = sample_envelope();
    assert_eq!(envelope.entity(), "post");
    assert_eq!(envelope.action(), "created");
}

#[test]
fn action_is_empty_without_separator() {
    let mut envelope = sample_envelope();
    envelope.event = "ping".to_owned();
    assert_eq!(envelope.entity(), "ping");
    assert_eq!(envelope.action(), "");
}

#[test]
fn encode_decode_round_trip_preserves_envelope() {
    let envelope = sample_envelope();
    let text = encode_event(&envelope);
    let decoded = decode_event(&text).expect("decode should succeed");
    assert_eq!(decoded, envelope);
}

#[test]
fn decode_defaults_missing_ts_and_data() {
    let decoded = decode_event(r#"{"id":"ev-2","event":"user:deleted"}"#).expect("decode should succeed");
    assert_eq!(decoded.ts, 0);
    assert_eq!(decoded.data, serde_json::Value::Null);
}

#[test]
fn decode_rejects_malformed_json() {
    let err = decode_event("{not json").expect_err("decode should fail");
    assert!(matches!(err, CodecError::Decode(_)));
}

#[test]
fn decode_rejects_empty_event_name() {
    let err = decode_event(r#"{"id":"ev-3","event":"","data":{}}"#).expect_err("decode should fail");
    assert!(matches!(err, CodecError::EmptyEvent));
}

#[test]
fn parse_item_event_created_deserializes_payload() {
    let envelope = sample_envelope();
    let event = parse_item_event::<Note>(&envelope, "post").expect("event should parse");
    assert_eq!(
        event,
        ItemEvent::Created(Note {
            id: "p1".to_owned(),
            body: "hello".to_owned(),
        })
    );
}

#[test]
fn parse_item_event_rejects_other_entity() {
    let envelope = sample_envelope();
    assert!(parse_item_event::<Note>(&envelope, "user").is_none());
}

#[test]
fn parse_item_event_rejects_unknown_action() {
    let mut envelope = sample_envelope();
    envelope.event = "post:archived".to_owned();
    assert!(parse_item_event::<Note>(&envelope, "post").is_none());
}

#[test]
fn parse_item_event_deleted_needs_only_an_id() {
    let envelope = Envelope {
        id: "ev-4".to_owned(),
        ts: 7,
        event: "post:deleted".to_owned(),
        data: serde_json::json!({"id": "p9"}),
    };
    let event = parse_item_event::<Note>(&envelope, "post").expect("event should parse");
    assert_eq!(event, ItemEvent::Deleted("p9".to_owned()));
}

#[test]
fn parse_item_event_deleted_without_id_is_none() {
    let envelope = Envelope {
        id: "ev-5".to_owned(),
        ts: 7,
        event: "post:deleted".to_owned(),
        data: serde_json::json!({}),
    };
    assert!(parse_item_event::<Note>(&envelope, "post").is_none());
}

#[test]
fn parse_item_event_updated_with_bad_payload_is_none() {
    let envelope = Envelope {
        id: "ev-6".to_owned(),
        ts: 7,
        event: "post:updated".to_owned(),
        data: serde_json::json!({"id": 12}),
    };
    assert!(parse_item_event::<Note>(&envelope, "post").is_none());
}
