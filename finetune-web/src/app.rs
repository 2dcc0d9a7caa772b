use crate::components::loading::Loading;
use crate::containers::auth_provider::{AuthProvider, use_session};
use crate::models::Session;
use crate::routes::{PrivateRoutes, PublicRoutes};
use yew::{Html, function_component, html};
use yew_router::BrowserRouter;

/// Root of the application: session ownership plus the session gate.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <AppContent />
        </AuthProvider>
    }
}

/// Picks what to mount for the current session.
///
/// Only one route tree exists at a time, so a signed-in user cannot reach
/// `/login` and an anonymous visitor cannot reach any private screen.
#[function_component(AppContent)]
pub fn app_content() -> Html {
    let Some(context) = use_session() else {
        log::error!("application content rendered outside an auth provider");
        return html! { <Loading /> };
    };

    match context.session() {
        Session::Loading => html! { <Loading /> },
        Session::Unauthenticated => html! {
            <BrowserRouter>
                <PublicRoutes />
            </BrowserRouter>
        },
        Session::Authenticated(_) => html! {
            <BrowserRouter>
                <PrivateRoutes />
            </BrowserRouter>
        },
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
