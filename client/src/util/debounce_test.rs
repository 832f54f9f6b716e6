use super::*;

#[test]
fn arming_returns_increasing_tokens() {
    let mut debounce = Debounce::default();
    let first = debounce.arm();
    let second = debounce.arm();
    assert!(second > first);
}

#[test]
fn rearm_within_the_window_supersedes_the_pending_call() {
    // Two keystrokes inside the quiet period: only the second timer's token
    // survives, so exactly one fetch fires.
    let mut debounce = Debounce::default();
    let first = debounce.arm();
    let second = debounce.arm();
    assert!(!debounce.is_current(first));
    assert!(debounce.is_current(second));
}

#[test]
fn token_stays_current_until_the_next_arm() {
    let mut debounce = Debounce::default();
    let token = debounce.arm();
    assert!(debounce.is_current(token));
}
