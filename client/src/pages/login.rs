//! Login page with sign-in and registration forms.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::validation::{validate_login_input, validate_register_input};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: straight to the feed.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match mode.get_untracked() {
            AuthMode::SignIn => {
                let (email_value, password_value) =
                    match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                        Ok(values) => values,
                        Err(msg) => {
                            info.set(msg.to_owned());
                            return;
                        }
                    };
                busy.set(true);
                info.set("Signing in...".to_owned());

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(&email_value, &password_value).await {
                        Ok(user) => {
                            auth.update(|a| {
                                a.user = Some(user);
                                a.loading = false;
                            });
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/");
                            }
                        }
                        Err(e) => {
                            info.set(format!("Sign in failed: {e}"));
                            busy.set(false);
                        }
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (email_value, password_value);
                }
            }
            AuthMode::Register => {
                let (name_value, email_value, password_value) = match validate_register_input(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                ) {
                    Ok(values) => values,
                    Err(msg) => {
                        info.set(msg.to_owned());
                        return;
                    }
                };
                busy.set(true);
                info.set("Creating account...".to_owned());

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::register(&name_value, &email_value, &password_value).await {
                        Ok(user) => {
                            auth.update(|a| {
                                a.user = Some(user);
                                a.loading = false;
                            });
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/");
                            }
                        }
                        Err(e) => {
                            info.set(format!("Registration failed: {e}"));
                            busy.set(false);
                        }
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (name_value, email_value, password_value);
                }
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Solace"</h1>
                <div class="login-card__tabs">
                    <button
                        class="login-tab"
                        class=("login-tab--active", move || mode.get() == AuthMode::SignIn)
                        on:click=move |_| {
                            mode.set(AuthMode::SignIn);
                            info.set(String::new());
                        }
                    >
                        "Sign in"
                    </button>
                    <button
                        class="login-tab"
                        class=("login-tab--active", move || mode.get() == AuthMode::Register)
                        on:click=move |_| {
                            mode.set(AuthMode::Register);
                            info.set(String::new());
                        }
                    >
                        "Create account"
                    </button>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Display name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || {
                            if mode.get() == AuthMode::SignIn { "Sign in" } else { "Create account" }
                        }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
