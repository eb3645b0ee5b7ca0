//! Recommendations page. Protected; placeholder until the recommendation
//! engine is reachable.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::guard;

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    guard::install(auth, "/recommendations", use_navigate());

    view! {
        <div class="page">
            <div class="card">
                <h2 class="card__title">"Career Recommendations"</h2>
                <p class="card__subtitle">"View your personalized career recommendations"</p>
                <p class="card__placeholder">
                    "Recommendations will appear here based on your profile and assessments."
                </p>
            </div>
        </div>
    }
}
