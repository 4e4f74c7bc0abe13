//! Transient status banners

use leptos::prelude::*;

/// Visual style of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// Floating transient message; renders nothing while the message is empty.
///
/// The caller owns the display window; this component only mirrors it.
#[component]
pub fn Notification(
    #[prop(into)] message: Signal<String>,
    #[prop(default = NotificationKind::Error)] kind: NotificationKind,
) -> impl IntoView {
    let class = match kind {
        NotificationKind::Error => "notification notification-error",
        NotificationKind::Success => "notification notification-success",
    };

    view! {
        <Show when=move || !message.get().is_empty()>
            <div class=class role="status">
                <p>{move || message.get()}</p>
            </div>
        </Show>
    }
}
