//! Reusable UI components

pub mod form_field;
pub mod loading;
pub mod navbar;
pub mod notification;
pub mod subjects;

pub use form_field::TextField;
pub use loading::{LoadingBar, Skeleton};
pub use navbar::Navbar;
pub use notification::{Notification, NotificationKind};
pub use subjects::Subjects;
