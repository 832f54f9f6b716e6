use super::*;
use crate::net::types::Role;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        role,
        avatar_url: None,
    }
}

#[test]
fn auth_state_defaults_to_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn is_admin_requires_a_privileged_user() {
    let mut state = AuthState::default();
    assert!(!state.is_admin());
    state.user = Some(user(Role::Member));
    assert!(!state.is_admin());
    state.user = Some(user(Role::Admin));
    assert!(state.is_admin());
}
