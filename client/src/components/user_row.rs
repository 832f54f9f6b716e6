//! A single account row in the admin user list.

#[cfg(test)]
#[path = "user_row_test.rs"]
mod user_row_test;

use leptos::prelude::*;

use crate::net::types::{AccountRow, Role};

/// Parse a role `<select>` value back into the closed enum.
pub(crate) fn role_from_value(value: &str) -> Option<Role> {
    match value {
        "member" => Some(Role::Member),
        "moderator" => Some(Role::Moderator),
        "admin" => Some(Role::Admin),
        _ => None,
    }
}

/// Account row with a role selector and a delete action.
#[component]
pub fn UserRow(
    account: AccountRow,
    on_role_change: Callback<(String, Role)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let role = account.role;
    let role_id = account.id.clone();
    let delete_id = account.id.clone();

    view! {
        <div class="user-row">
            <span class="user-row__name">{account.name.clone()}</span>
            <span class="user-row__email">{account.email.clone()}</span>
            <select
                class="user-row__role"
                prop:value=role.as_str()
                on:change=move |ev| {
                    if let Some(next) = role_from_value(&event_target_value(&ev)) {
                        if next != role {
                            on_role_change.run((role_id.clone(), next));
                        }
                    }
                }
            >
                <option value="member">"Member"</option>
                <option value="moderator">"Moderator"</option>
                <option value="admin">"Admin"</option>
            </select>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                "Delete"
            </button>
        </div>
    }
}
