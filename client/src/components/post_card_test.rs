use super::*;

#[test]
fn render_markdown_produces_inline_markup() {
    let html = render_markdown("hello **world**");
    assert!(html.contains("<strong>world</strong>"));
}

#[test]
fn render_markdown_supports_strikethrough() {
    let html = render_markdown("~~gone~~");
    assert!(html.contains("<del>gone</del>"));
}

#[test]
fn render_markdown_escapes_raw_script_text() {
    let html = render_markdown("`<script>alert(1)</script>`");
    assert!(!html.contains("<script>"));
}

#[test]
fn relative_age_buckets_by_magnitude() {
    let now = 100_000_000;
    assert_eq!(relative_age(now, now - 30_000), "just now");
    assert_eq!(relative_age(now, now - 5 * 60_000), "5m ago");
    assert_eq!(relative_age(now, now - 3 * 3_600_000), "3h ago");
    assert_eq!(relative_age(now, now - 90_000_000), "1d ago");
}

#[test]
fn relative_age_treats_future_timestamps_as_now() {
    // Clock skew between client and server should not render "-1m ago".
    assert_eq!(relative_age(1000, 5000), "just now");
}
