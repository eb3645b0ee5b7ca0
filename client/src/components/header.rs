//! Site header: brand, navigation, language toggle, session and auth
//! actions.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::session::{self, Language, SessionState};
use crate::state::ui::{ToastKind, UiState};
use crate::util::storage::BrowserStorage;
use crate::util::theme;

/// Navigation entries; account links appear only when signed in.
fn nav_items_for(authenticated: bool) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![
        ("Home", "/"),
        ("Universities", "/universities"),
        ("About", "/about"),
    ];
    if authenticated {
        items.push(("My Profile", "/profile"));
        items.push(("Recommendations", "/recommendations"));
    }
    items
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let dark = RwSignal::new(false);
    Effect::new(move || {
        let enabled = theme::read_preference(&BrowserStorage);
        theme::apply(enabled);
        dark.set(enabled);
    });

    let notify = move |kind: ToastKind, message: &str| {
        ui.update(|u| {
            u.push_toast(kind, message);
        });
    };

    let on_toggle_language = move |_| {
        session.update(|s| session::set_language(&BrowserStorage, s, s.language.toggled()));
    };

    let on_toggle_theme = move |_| {
        dark.set(theme::toggle(&BrowserStorage, dark.get_untracked()));
    };

    let on_session_action = move |_| {
        if session.get_untracked().is_active() {
            session.update(|s| session::clear_session(&BrowserStorage, &notify, s));
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpSessionApi::default();
            let mut state = session.get_untracked();
            let language = state.language;
            if session::create_session(&api, &BrowserStorage, &notify, &mut state, language)
                .await
                .is_ok()
            {
                session.set(state);
            }
        });
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut state = auth.get_untracked();
            let result =
                crate::state::auth::logout(&crate::net::mock::MockIdentityApi, &mut state).await;
            auth.set(state);
            if let Some(window) = web_sys::window() {
                match result {
                    Ok(()) => {
                        let _ = window.location().set_href("/");
                    }
                    // Teardown failed: prior auth state is undefined, start clean.
                    Err(_) => {
                        let _ = window.location().reload();
                    }
                }
            }
        });
    };

    let tagline = move || match session.get().language {
        Language::En => "Your Academic Journey",
        Language::Fr => "Votre Parcours Académique",
    };

    let language_label = move || match session.get().language {
        Language::En => "FR",
        Language::Fr => "EN",
    };

    let session_label = move || {
        if session.get().is_active() {
            "Clear Session"
        } else {
            "Start Session"
        }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <span class="site-header__logo">"EduPath"</span>
                <span class="site-header__tagline">{tagline}</span>
            </a>

            <nav class="site-header__nav">
                {move || {
                    let current = pathname.get();
                    nav_items_for(auth.get().is_authenticated())
                        .into_iter()
                        .map(|(label, href)| {
                            let class = if current == href {
                                "nav-link nav-link--active"
                            } else {
                                "nav-link"
                            };
                            view! {
                                <a class=class href=href>
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>

            <div class="site-header__actions">
                <button
                    class="btn btn--ghost"
                    on:click=on_toggle_language
                    aria-label="Switch language"
                >
                    {language_label}
                </button>
                <button class="btn btn--ghost" on:click=on_toggle_theme>
                    {move || if dark.get() { "Light" } else { "Dark" }}
                </button>
                <button class="btn btn--outline" on:click=on_session_action>
                    {session_label}
                </button>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="btn btn--ghost" href="/login">
                                "Sign in"
                            </a>
                            <a class="btn btn--primary" href="/register">
                                "Get Started"
                            </a>
                        }
                    }
                >
                    <a class="btn btn--outline" href="/profile">
                        "Profile"
                    </a>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
