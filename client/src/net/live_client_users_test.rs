use super::*;
use crate::net::types::{Role, RoleFilter};

fn account(id: &str, role: Role, ts: i64) -> AccountRow {
    AccountRow {
        id: id.to_owned(),
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        role,
        created_at: ts,
        updated_at: ts,
    }
}

#[test]
fn created_user_enters_an_unfiltered_list() {
    let mut admin = AdminState::default();
    apply_admin_user_event(&mut admin, &ItemEvent::Created(account("u1", Role::Member, 10)));
    assert!(admin.users.contains("u1"));
}

#[test]
fn created_user_outside_the_role_filter_is_ignored() {
    let mut admin = AdminState::default();
    admin.user_role = RoleFilter::Admin;
    apply_admin_user_event(&mut admin, &ItemEvent::Created(account("u1", Role::Member, 10)));
    assert!(admin.users.is_empty());
}

#[test]
fn role_change_moves_a_user_out_of_the_filtered_view() {
    let mut admin = AdminState::default();
    admin.user_role = RoleFilter::Moderator;
    apply_admin_user_event(&mut admin, &ItemEvent::Created(account("u1", Role::Moderator, 10)));
    assert!(admin.users.contains("u1"));

    let mut demoted = account("u1", Role::Member, 10);
    demoted.updated_at = 11;
    apply_admin_user_event(&mut admin, &ItemEvent::Updated(demoted));
    assert!(admin.users.is_empty());
}

#[test]
fn role_change_patches_in_place_when_still_matching() {
    let mut admin = AdminState::default();
    apply_admin_user_event(&mut admin, &ItemEvent::Created(account("u1", Role::Member, 10)));

    let mut promoted = account("u1", Role::Admin, 10);
    promoted.updated_at = 11;
    apply_admin_user_event(&mut admin, &ItemEvent::Updated(promoted));
    assert_eq!(admin.users.items()[0].role, Role::Admin);
    assert_eq!(admin.users.len(), 1);
}

#[test]
fn deleted_user_leaves_the_list() {
    let mut admin = AdminState::default();
    apply_admin_user_event(&mut admin, &ItemEvent::Created(account("u1", Role::Member, 10)));
    apply_admin_user_event(&mut admin, &ItemEvent::Deleted("u1".to_owned()));
    assert!(admin.users.is_empty());
}
