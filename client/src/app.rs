//! Root application component with routing, context providers, and startup
//! state restoration.
//!
//! ARCHITECTURE
//! ============
//! This is the composition root: the only place concrete storage and
//! service implementations are named. Everything below reads state through
//! context signals and calls the manager operations in `state`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast::ToastStack;
use crate::net::mock::MockIdentityApi;
use crate::pages::about::AboutPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::recommendations::RecommendationsPage;
use crate::pages::register::RegisterPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::pages::universities::UniversitiesPage;
use crate::state::auth::AuthState;
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(auth);
    provide_context(ui);

    // Client-side startup: restore the persisted session and theme. Effects
    // never run during SSR, so the server renders the default state.
    Effect::new(move || {
        session.set(session::load(&BrowserStorage));
        theme::apply(theme::read_preference(&BrowserStorage));
    });

    // Startup session validation. Nobody is signed in until the identity
    // service confirms it; the mock always answers "no".
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let user = crate::state::auth::startup_check(&MockIdentityApi).await;
            auth.set(AuthState {
                user,
                loading: false,
            });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/edupath.css"/>
        <Title text="EduPath"/>

        <Router>
            <Header/>
            <ToastStack/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("universities") view=UniversitiesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("recommendations") view=RecommendationsPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
