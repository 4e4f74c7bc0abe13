//! Sign-in screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api::{self, Rejection};
use crate::components::{LoadingBar, TextField};
use crate::flow::{FlowState, FlowStatus};
use crate::state::{Session, SessionAuthority};
use crate::types::LoginRequest;
use crate::validation::{validate_login, LoginErrors, LoginForm};

/// Display window for network error banners.
const ERROR_BANNER_MS: u32 = 5_000;

/// Exchanges credentials for an access token. Identity stays unset here;
/// the dashboard bootstrap verifies it against the backend.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let authority = expect_context::<SessionAuthority>();
    let navigate = use_navigate();

    // Form state
    let email_address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginErrors::default());

    let flow = FlowState::new();

    // Already signed in; go straight to the dashboard.
    let is_authenticated = session.is_authenticated();
    let navigate_for_redirect = navigate.clone();
    Effect::new(move |_| {
        if is_authenticated.get() {
            navigate_for_redirect("/dashboard", Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if flow.is_loading() {
            return;
        }
        flow.set(FlowStatus::Idle);

        let form = LoginForm {
            email_address: email_address.get(),
            password: password.get(),
        };

        let errors = validate_login(&form);
        let all_valid = errors.is_clean();
        field_errors.set(errors);
        if !all_valid {
            return;
        }

        let request = LoginRequest {
            email_address: form.email_address,
            password: form.password,
        };
        let base_url = session.base_api_url();
        let navigate = navigate.clone();

        flow.set(FlowStatus::Loading);
        spawn_local(async move {
            match api::login(&base_url, &request).await {
                Ok(auth) => {
                    flow.set(FlowStatus::Success);
                    authority.store_access_token(auth.access_token);
                    navigate("/dashboard", Default::default());
                }
                Err(error) => match api::classify(&error) {
                    Rejection::ServerUnreachable => {
                        flow.fail_for(
                            "Unable to contact the server. Please try again.",
                            ERROR_BANNER_MS,
                        );
                    }
                    Rejection::EmailAddress(message) => {
                        flow.set(FlowStatus::Idle);
                        field_errors.update(|errors| errors.email_address = message);
                    }
                    Rejection::Other(message) => flow.fail_for(message, ERROR_BANNER_MS),
                },
            }
        });
    };

    let status = flow.status();
    let is_loading = Signal::derive(move || matches!(status.get(), FlowStatus::Loading));
    let banner = flow.error_message();

    view! {
        <Title text="Sign in | self.OKRs" />

        <main class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-brand">"self.OKRs"</h1>

                <form on:submit=on_submit novalidate=true>
                    <TextField
                        label="Email address:"
                        input_type="email"
                        value=email_address
                        error=Signal::derive(move || field_errors.get().email_address)
                    />
                    <TextField
                        label="Password:"
                        input_type="password"
                        value=password
                        error=Signal::derive(move || field_errors.get().password)
                    />

                    <button type="submit" class="auth-submit" disabled=move || is_loading.get()>
                        <Show when=move || is_loading.get() fallback=|| "Sign in">
                            <LoadingBar />
                        </Show>
                    </button>

                    <Show when=move || !banner.get().is_empty()>
                        <div class="form-error">
                            <p>{move || banner.get()}</p>
                        </div>
                    </Show>
                </form>

                <p class="auth-footer">
                    <a href="/forgotPassword">"Forgot password?"</a>
                </p>
                <p class="auth-footer">
                    "Don't have an account? " <a href="/register">"Create one"</a>
                </p>
            </div>
        </main>
    }
}
