//! Dashboard: verifies the session on mount, then lists subjects

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api::{self, Rejection};
use crate::components::{Navbar, Notification, Subjects};
use crate::flow::{FlowState, FlowStatus, MountHandle};
use crate::state::{Session, SessionAuthority};
use crate::types::Subject;

/// Display window for the identity-failure banner before forced logout.
const IDENTITY_BANNER_MS: u32 = 6_000;
/// Display window for the subjects-unavailable banner.
const SUBJECTS_BANNER_MS: u32 = 5_000;

/// Main screen. Issues two uncoordinated calls on mount: the identity
/// check that owns the session, and the subject list. Their failure
/// banners may overlap.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let authority = expect_context::<SessionAuthority>();
    let navigate = use_navigate();

    let subjects = RwSignal::new(Vec::<Subject>::new());
    let identity_flow = FlowState::new();
    let subjects_flow = FlowState::new();
    let mount = MountHandle::new();

    // Identity check. Any failure tears the session down after a fixed
    // notice window; unmounting first drops the logout.
    let navigate_for_identity = navigate.clone();
    Effect::new(move |_| {
        let navigate = navigate_for_identity.clone();
        let base_url = session.base_api_url();
        let token = session.access_token();
        spawn_local(async move {
            match api::authenticated_user(&base_url, token).await {
                Ok(user) => authority.set_identity(user),
                Err(error) => {
                    tracing::warn!("identity check failed: {}", error);
                    identity_flow.fail_for(
                        "Unable to verify identity. Logging out...",
                        IDENTITY_BANNER_MS,
                    );
                    if mount.sleep(IDENTITY_BANNER_MS).await {
                        authority.clear();
                        navigate("/login", Default::default());
                    }
                }
            }
        });
    });

    // Subject list; loads independently of the identity check.
    Effect::new(move |_| {
        let base_url = session.base_api_url();
        let token = session.access_token();
        spawn_local(async move {
            subjects_flow.set(FlowStatus::Loading);
            match api::subjects(&base_url, token).await {
                Ok(list) => {
                    subjects.set(list);
                    subjects_flow.set(FlowStatus::Success);
                }
                Err(error) => match api::classify(&error) {
                    Rejection::ServerUnreachable => {
                        subjects_flow.fail_for(
                            "Unable to contact the server. Please try again later.",
                            SUBJECTS_BANNER_MS,
                        );
                    }
                    Rejection::EmailAddress(message) | Rejection::Other(message) => {
                        subjects_flow.set(FlowStatus::Idle);
                        tracing::warn!("failed to load subjects: {}", message);
                    }
                },
            }
        });
    });

    let subjects_status = subjects_flow.status();
    let subjects_loading =
        Signal::derive(move || matches!(subjects_status.get(), FlowStatus::Loading));

    view! {
        <Title text="Dashboard | self.OKRs" />
        <Navbar />

        <main class="dashboard">
            <Subjects subjects=subjects loading=subjects_loading />
        </main>

        <Notification message=identity_flow.error_message() />
        <Notification message=subjects_flow.error_message() />
    }
}
