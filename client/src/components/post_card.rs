//! A single post rendered in feed, admin, and profile lists.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;
use pulldown_cmark::{Options, Parser, html};

use crate::net::types::Post;

/// Render a markdown post body to HTML.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Coarse human age label for a timestamp, e.g. `"5m ago"`.
#[must_use]
pub fn relative_age(now_ms: i64, ts_ms: i64) -> String {
    let delta = now_ms - ts_ms;
    if delta < 60_000 {
        "just now".to_owned()
    } else if delta < 3_600_000 {
        format!("{}m ago", delta / 60_000)
    } else if delta < 86_400_000 {
        format!("{}h ago", delta / 3_600_000)
    } else {
        format!("{}d ago", delta / 86_400_000)
    }
}

fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Post card with author link, age, markdown body, and optional moderation
/// actions when the surrounding page supplies callbacks.
#[component]
pub fn PostCard(
    post: Post,
    #[prop(optional, into)] on_approve: Option<Callback<String>>,
    #[prop(optional, into)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let body_html = render_markdown(&post.body);
    let age = relative_age(now_ms(), post.created_at);
    let author_href = format!("/profile/{}", post.author_id);
    let approved = post.approved;
    let approve_id = post.id.clone();
    let delete_id = post.id.clone();

    view! {
        <article class="post-card">
            <header class="post-card__meta">
                <a class="post-card__author" href=author_href>
                    {post.author_name.clone()}
                </a>
                <span class="post-card__age">{age}</span>
                <Show when=move || !approved>
                    <span class="post-card__badge">"Pending review"</span>
                </Show>
            </header>
            <div class="post-card__body" inner_html=body_html></div>
            <footer class="post-card__actions">
                {on_approve.filter(|_| !approved).map(|cb| {
                    let id = approve_id.clone();
                    view! {
                        <button class="btn btn--primary" on:click=move |_| cb.run(id.clone())>
                            "Approve"
                        </button>
                    }
                })}
                {on_delete.map(|cb| {
                    let id = delete_id.clone();
                    view! {
                        <button class="btn btn--danger" on:click=move |_| cb.run(id.clone())>
                            "Delete"
                        </button>
                    }
                })}
            </footer>
        </article>
    }
}
