//! User event handlers extracted from `live_client`.

#[cfg(test)]
#[path = "live_client_users_test.rs"]
mod live_client_users_test;

#[cfg(any(test, feature = "hydrate"))]
use events::ItemEvent;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::AccountRow;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::admin::AdminState;

/// Reconcile a user event against the admin user list under its role filter.
/// A role change that moves a user out of the filtered view removes the row
/// without a tombstone.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_admin_user_event(admin: &mut AdminState, event: &ItemEvent<AccountRow>) {
    match event {
        ItemEvent::Created(row) => {
            if admin.user_role.matches(row.role) {
                admin.users.apply(ItemEvent::Created(row.clone()));
            }
        }
        ItemEvent::Updated(row) | ItemEvent::Approved(row) => {
            if admin.user_role.matches(row.role) {
                admin.users.upsert(row.clone());
            } else {
                admin.users.remove(&row.id);
            }
        }
        ItemEvent::Deleted(id) => admin.users.apply(ItemEvent::Deleted(id.clone())),
    }
}

/// Route a user envelope to the admin user list.
#[cfg(feature = "hydrate")]
pub(super) fn handle_user_event(
    envelope: &events::Envelope,
    admin: leptos::prelude::RwSignal<AdminState>,
) -> bool {
    use leptos::prelude::Update;

    let Some(event) = events::parse_item_event::<AccountRow>(envelope, "user") else {
        return false;
    };
    admin.update(|a| apply_admin_user_event(a, &event));
    true
}
