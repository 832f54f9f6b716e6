use super::*;

#[test]
fn connected_client_id_reads_session_envelope() {
    let envelope = Envelope {
        id: "ev-1".to_owned(),
        ts: 1,
        event: "session:connected".to_owned(),
        data: serde_json::json!({"client_id": "c-42"}),
    };
    assert_eq!(connected_client_id(&envelope).as_deref(), Some("c-42"));
}

#[test]
fn connected_client_id_rejects_other_events_and_missing_field() {
    let other = Envelope {
        id: "ev-2".to_owned(),
        ts: 1,
        event: "post:created".to_owned(),
        data: serde_json::json!({"client_id": "c-42"}),
    };
    assert!(connected_client_id(&other).is_none());

    let missing = Envelope {
        id: "ev-3".to_owned(),
        ts: 1,
        event: "session:connected".to_owned(),
        data: serde_json::json!({}),
    };
    assert!(connected_client_id(&missing).is_none());
}

#[test]
fn subscribe_envelope_names_all_entity_topics() {
    let envelope = subscribe_envelope();
    assert_eq!(envelope.event, "session:subscribe");
    let topics = envelope
        .data
        .get("topics")
        .and_then(serde_json::Value::as_array)
        .expect("topics array");
    assert_eq!(topics.len(), 3);
    assert!(!envelope.id.is_empty());
}
