mod calendar;
mod classes;
mod dashboard;
mod forgot_password;
mod login;
mod profile;
mod services;

pub use calendar::CalendarPage;
pub use classes::ClassesPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use services::ServicesPage;

use crate::api::UserMessage;
use shared::models::UserRole;
use web_sys::HtmlInputElement;
use yew::{Callback, InputEvent, TargetCast, UseStateHandle};

/// Keep `handle` in sync with the value of the input firing the event.
pub(crate) fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

/// Translation key of a role-specific description, e.g. `classes.student`.
pub(crate) fn role_key(section: &str, role: UserRole) -> String {
    let audience = match role {
        UserRole::Student => "student",
        UserRole::Teacher => "teacher",
        UserRole::Admin => "admin",
    };
    format!("{section}.{audience}")
}

/// Text of a failed request, translating client-side messages.
pub(crate) fn render_error(message: UserMessage, translate: impl Fn(&str) -> String) -> String {
    match message {
        UserMessage::Server(text) => text,
        UserMessage::Key(key) => translate(key),
    }
}
