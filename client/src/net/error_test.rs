use super::*;

#[test]
fn status_401_classifies_as_unauthorized() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert!(ApiError::from_status(401).is_unauthorized());
}

#[test]
fn other_statuses_stay_plain() {
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
    assert!(!ApiError::from_status(500).is_unauthorized());
}

#[test]
fn display_messages_are_user_presentable() {
    assert_eq!(ApiError::Network("timed out".to_owned()).to_string(), "network error: timed out");
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
}
