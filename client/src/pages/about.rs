//! About page describing the product.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card">
                <h2 class="card__title">"About EduPath"</h2>
                <p class="card__subtitle">"Your AI-powered educational guidance system"</p>
                <p>
                    "EduPath helps Cameroonian students discover their ideal career paths "
                    "and educational opportunities."
                </p>
                <h3>"Features:"</h3>
                <ul>
                    <li>"Personalized career recommendations"</li>
                    <li>"University and program exploration"</li>
                    <li>"Skill assessment and gap analysis"</li>
                    <li>"Scholarship and funding opportunities"</li>
                </ul>
            </div>
        </div>
    }
}
