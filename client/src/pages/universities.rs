//! Universities listing page. Placeholder until the catalog endpoint ships.

use leptos::prelude::*;

#[component]
pub fn UniversitiesPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card">
                <h2 class="card__title">"Universities"</h2>
                <p class="card__subtitle">"Explore universities and programs"</p>
                <p class="card__placeholder">"University listings coming soon..."</p>
            </div>
        </div>
    }
}
