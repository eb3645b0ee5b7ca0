//! Site footer: brand blurb and quick links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <h3>"EduPath"</h3>
                <p>
                    "AI-powered educational guidance system helping Cameroonian students "
                    "make informed decisions about their academic and career paths."
                </p>
                <p class="site-footer__motto">
                    "Empowering students • Bridging education and employment • Building Cameroon's future"
                </p>
            </div>
            <div class="site-footer__links">
                <h4>"Quick Links"</h4>
                <ul>
                    <li>
                        <a href="/">"Home"</a>
                    </li>
                    <li>
                        <a href="/profile">"Student Profile"</a>
                    </li>
                    <li>
                        <a href="/universities">"Universities"</a>
                    </li>
                    <li>
                        <a href="/about">"About"</a>
                    </li>
                </ul>
            </div>
        </footer>
    }
}
