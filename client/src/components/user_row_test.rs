use super::*;

#[test]
fn role_values_map_to_enum_variants() {
    assert_eq!(role_from_value("member"), Some(Role::Member));
    assert_eq!(role_from_value("moderator"), Some(Role::Moderator));
    assert_eq!(role_from_value("admin"), Some(Role::Admin));
}

#[test]
fn unknown_role_value_is_rejected() {
    assert_eq!(role_from_value("root"), None);
    assert_eq!(role_from_value(""), None);
}
