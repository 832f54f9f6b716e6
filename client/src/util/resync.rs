//! Reconnect resynchronization hook.

use leptos::prelude::*;

use crate::state::conn::ConnState;

/// Re-issue a page's reset load whenever the live channel (re)connects.
///
/// Events missed while disconnected are unrecoverable, so the only way back
/// to a consistent collection is a full refetch. The baseline is captured at
/// install time: a connection established before the page mounted does not
/// trigger a redundant reload on top of the page's own initial fetch.
pub fn install_resync_reload<F>(conn: RwSignal<ConnState>, reload: F)
where
    F: Fn() + 'static,
{
    let seen = RwSignal::new(conn.get_untracked().resync_seq);
    Effect::new(move || {
        let seq = conn.get().resync_seq;
        if seq > seen.get_untracked() {
            seen.set(seq);
            reload();
        }
    });
}
