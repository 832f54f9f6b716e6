//! Debounce primitive for free-text inputs.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Quiet period a search input must hold still before a fetch fires.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Monotonic arm/check state for one debounced input.
///
/// Each keystroke arms a new token; when the quiet-period timer wakes, the
/// pending action runs only if its token is still the latest, so a re-arm
/// within the window supersedes the earlier call instead of stacking a
/// second fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    seq: u64,
}

impl Debounce {
    /// Invalidate any pending action and return the fresh token.
    pub fn arm(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Whether `token` is still the latest armed one.
    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.seq == token
    }
}

/// Run `action` once the input has been quiet for [`SEARCH_DEBOUNCE_MS`].
#[cfg(feature = "hydrate")]
pub fn schedule(debounce: leptos::prelude::RwSignal<Debounce>, action: impl FnOnce() + 'static) {
    use leptos::prelude::{GetUntracked, Update};

    let mut token = 0;
    debounce.update(|d| token = d.arm());
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
        if debounce.get_untracked().is_current(token) {
            action();
        }
    });
}
