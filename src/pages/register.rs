//! Account creation screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api::{self, Rejection};
use crate::components::{LoadingBar, TextField};
use crate::flow::{FlowState, FlowStatus, MountHandle};
use crate::state::Session;
use crate::types::SignupRequest;
use crate::validation::{validate_registration, RegistrationErrors, RegistrationForm};

/// How long the success confirmation stays up before redirecting to login.
const REDIRECT_DELAY_MS: u32 = 4_000;
/// Display window for network error banners.
const ERROR_BANNER_MS: u32 = 5_000;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    // Form state
    let username = RwSignal::new(String::new());
    let email_address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_verification = RwSignal::new(String::new());
    let field_errors = RwSignal::new(RegistrationErrors::default());

    let flow = FlowState::new();
    let mount = MountHandle::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if flow.is_loading() {
            return;
        }
        flow.set(FlowStatus::Idle);

        let form = RegistrationForm {
            username: username.get(),
            email_address: email_address.get(),
            password: password.get(),
            password_verification: password_verification.get(),
        };

        // Full replace: stale messages from the previous pass never survive.
        let errors = validate_registration(&form);
        let all_valid = errors.is_clean();
        field_errors.set(errors);
        if !all_valid {
            return;
        }

        let request = SignupRequest {
            username: form.username,
            email_address: form.email_address,
            password: form.password,
        };
        let base_url = session.base_api_url();
        let navigate = navigate.clone();

        flow.set(FlowStatus::Loading);
        spawn_local(async move {
            match api::signup(&base_url, &request).await {
                Ok(()) => {
                    flow.set(FlowStatus::Success);
                    if mount.sleep(REDIRECT_DELAY_MS).await {
                        navigate("/login", Default::default());
                    }
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
    let is_registered = Signal::derive(move || matches!(status.get(), FlowStatus::Success));
    let banner = flow.error_message();

    view! {
        <Title text="Create account | self.OKRs" />

        <main class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-brand">"self.OKRs"</h1>

                <form on:submit=on_submit novalidate=true>
                    <TextField
                        label="Username:"
                        value=username
                        error=Signal::derive(move || field_errors.get().username)
                    />
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
                    <p class="field-hint">"Password must be at least 8 characters long"</p>
                    <TextField
                        label="Confirm password:"
                        input_type="password"
                        value=password_verification
                        error=Signal::derive(move || field_errors.get().password_verification)
                    />

                    <button type="submit" class="auth-submit" disabled=move || is_loading.get()>
                        <Show when=move || is_loading.get() fallback=|| "Create account">
                            <LoadingBar />
                        </Show>
                    </button>

                    <Show when=move || !banner.get().is_empty()>
                        <div class="form-error">
                            <p>{move || banner.get()}</p>
                        </div>
                    </Show>
                    <Show when=move || is_registered.get()>
                        <div class="form-success">
                            <p>"Your account was successfully created."</p>
                            <p>"Redirecting to login..."</p>
                        </div>
                    </Show>
                </form>

                <p class="auth-footer">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </main>
    }
}
