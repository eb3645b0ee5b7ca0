//! Profile page. Protected; placeholder until the student-profile endpoints
//! ship.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::guard;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    guard::install(auth, "/profile", use_navigate());

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Signed in as {} ({})", user.display_name, user.email))
    };

    view! {
        <div class="page">
            <div class="card">
                <h2 class="card__title">"User Profile"</h2>
                <p class="card__subtitle">"View and manage your profile information"</p>
                <Show when=move || greeting().is_some()>
                    <p class="card__identity">{move || greeting().unwrap_or_default()}</p>
                </Show>
                <p class="card__placeholder">"Profile page content coming soon..."</p>
            </div>
        </div>
    }
}
