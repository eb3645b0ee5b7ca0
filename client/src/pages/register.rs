//! Registration page with name, email, and password-confirmation form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(feature = "hydrate")]
use crate::util::guard;

/// Validated register form values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterInput {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

/// Validate the register form before any network call. All fields are
/// required and the confirmation must match; these checks run caller-side,
/// the register operation itself never re-checks them.
fn validate_register_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterInput, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    if password != confirm_password {
        return Err("Passwords do not match");
    }
    Ok(RegisterInput {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let input = match validate_register_input(
            &first_name.get(),
            &last_name.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut state = auth.get_untracked();
                match crate::state::auth::register(
                    &crate::net::mock::MockIdentityApi,
                    &mut state,
                    &input.first_name,
                    &input.last_name,
                    &input.email,
                    &input.password,
                )
                .await
                {
                    Ok(()) => {
                        auth.set(state);
                        let from = query.get_untracked().get("from");
                        navigate(
                            &guard::post_login_destination(from.as_deref()),
                            leptos_router::NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => {
                        error.set(format!("Failed to create an account: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &query, input);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Create your account"</h2>
                <p class="auth-card__subtitle">
                    "Or " <a href="/login">"sign in to your existing account"</a>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>
                    <div class="auth-form__row">
                        <div>
                            <label class="auth-form__label" for="first-name">"First name"</label>
                            <input
                                id="first-name"
                                class="auth-form__input"
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="auth-form__label" for="last-name">"Last name"</label>
                            <input
                                id="last-name"
                                class="auth-form__input"
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <label class="auth-form__label" for="email">"Email address"</label>
                    <input
                        id="email"
                        class="auth-form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        class="auth-form__input"
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
