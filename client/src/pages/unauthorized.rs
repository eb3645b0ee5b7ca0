//! Access-denied page with back and home escapes.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    let _ = history.back();
                }
            }
        }
    };

    view! {
        <div class="page">
            <div class="card card--narrow">
                <h2 class="card__title">"Access Denied"</h2>
                <p>
                    "You don't have permission to access this page. Please contact an "
                    "administrator if you believe this is an error."
                </p>
                <div class="card__actions">
                    <button class="btn btn--primary" on:click=on_back>
                        "Go Back"
                    </button>
                    <a class="btn btn--outline" href="/">
                        "Return Home"
                    </a>
                </div>
            </div>
        </div>
    }
}
