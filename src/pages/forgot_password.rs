//! Password-reset request screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::{self, Rejection};
use crate::components::{LoadingBar, TextField};
use crate::flow::{FlowState, FlowStatus};
use crate::state::Session;
use crate::types::PasswordResetRequest;
use crate::validation::email_error;

/// Display window for network error banners.
const ERROR_BANNER_MS: u32 = 5_000;

/// The confirmation is deliberately identical whether or not the address
/// has an account; the screen never learns which.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let session = expect_context::<Session>();

    let email_address = RwSignal::new(String::new());
    let field_error = RwSignal::new(String::new());

    let flow = FlowState::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if flow.is_loading() {
            return;
        }
        flow.set(FlowStatus::Idle);

        let value = email_address.get();
        let error = email_error(&value);
        let valid = error.is_empty();
        field_error.set(error);
        if !valid {
            return;
        }

        let request = PasswordResetRequest {
            email_address: value,
        };
        let base_url = session.base_api_url();

        flow.set(FlowStatus::Loading);
        spawn_local(async move {
            match api::send_password_reset(&base_url, &request).await {
                Ok(()) => flow.set(FlowStatus::Success),
                Err(error) => match api::classify(&error) {
                    Rejection::ServerUnreachable => {
                        flow.fail_for(
                            "Unable to contact the server. Please try again.",
                            ERROR_BANNER_MS,
                        );
                    }
                    Rejection::EmailAddress(message) => {
                        flow.set(FlowStatus::Idle);
                        field_error.set(message);
                    }
                    Rejection::Other(message) => flow.fail_for(message, ERROR_BANNER_MS),
                },
            }
        });
    };

    let status = flow.status();
    let is_loading = Signal::derive(move || matches!(status.get(), FlowStatus::Loading));
    let is_sent = Signal::derive(move || matches!(status.get(), FlowStatus::Success));
    let banner = flow.error_message();

    view! {
        <Title text="Reset password | self.OKRs" />

        <main class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-brand">"self.OKRs"</h1>

                <form on:submit=on_submit novalidate=true>
                    <TextField
                        label="Email address:"
                        input_type="email"
                        value=email_address
                        error=field_error
                    />

                    <button type="submit" class="auth-submit" disabled=move || is_loading.get()>
                        <Show when=move || is_loading.get() fallback=|| "Submit">
                            <LoadingBar />
                        </Show>
                    </button>

                    <Show when=move || !banner.get().is_empty()>
                        <div class="form-error">
                            <p>{move || banner.get()}</p>
                        </div>
                    </Show>
                    <Show when=move || is_sent.get()>
                        <div class="form-success">
                            <p>"Your request was sent."</p>
                            <p>"Please check your INBOX or SPAM."</p>
                        </div>
                    </Show>
                </form>

                <p class="auth-footer">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </main>
    }
}
