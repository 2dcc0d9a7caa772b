//! Route trees of the client.
//!
//! Two mutually exclusive trees exist: [`PublicRoute`] while nobody is signed
//! in and [`PrivateRoute`] once a session is established. Each route maps to a
//! [`Target`]: either a screen or a catch-all redirect, so every URL lands on
//! a known screen. [`resolve`] applies the same mapping without rendering.

use crate::components::redirect::ReplaceRedirect;
use crate::containers::layout::Layout;
use crate::models::Session;
use crate::pages::*;
use strum::EnumIter;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;

/// Routes reachable without a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum PublicRoute {
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Routes reachable with a session, rendered inside the shared layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum PrivateRoute {
    #[at("/")]
    Dashboard,
    #[at("/classes")]
    Classes,
    #[at("/services")]
    Services,
    #[at("/calendar")]
    Calendar,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Screens of the public tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicScreen {
    Login,
    ForgotPassword,
}

/// Screens of the private tree, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum PrivateScreen {
    Dashboard,
    Classes,
    Services,
    Calendar,
    Profile,
}

/// Any screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Public(PublicScreen),
    Private(PrivateScreen),
}

/// What a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<S, R> {
    Screen(S),
    /// Replace the current history entry with this route.
    Redirect(R),
}

/// Outcome of routing a path under a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Spinner,
    Render(Screen),
    Redirect(String),
}

impl PublicRoute {
    pub fn target(self) -> Target<PublicScreen, PublicRoute> {
        match self {
            Self::Login => Target::Screen(PublicScreen::Login),
            Self::ForgotPassword => Target::Screen(PublicScreen::ForgotPassword),
            Self::NotFound => Target::Redirect(Self::Login),
        }
    }
}

impl PrivateRoute {
    pub fn target(self) -> Target<PrivateScreen, PrivateRoute> {
        match self {
            Self::Dashboard => Target::Screen(PrivateScreen::Dashboard),
            Self::Classes => Target::Screen(PrivateScreen::Classes),
            Self::Services => Target::Screen(PrivateScreen::Services),
            Self::Calendar => Target::Screen(PrivateScreen::Calendar),
            Self::Profile => Target::Screen(PrivateScreen::Profile),
            Self::NotFound => Target::Redirect(Self::Dashboard),
        }
    }
}

impl PrivateScreen {
    pub fn route(self) -> PrivateRoute {
        match self {
            Self::Dashboard => PrivateRoute::Dashboard,
            Self::Classes => PrivateRoute::Classes,
            Self::Services => PrivateRoute::Services,
            Self::Calendar => PrivateRoute::Calendar,
            Self::Profile => PrivateRoute::Profile,
        }
    }

    /// Translation key prefix for this screen, e.g. `nav.classes`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Classes => "classes",
            Self::Services => "services",
            Self::Calendar => "calendar",
            Self::Profile => "profile",
        }
    }

    pub fn icon(self) -> IconId {
        match self {
            Self::Dashboard => IconId::HeroiconsOutlineHome,
            Self::Classes => IconId::HeroiconsOutlineAcademicCap,
            Self::Services => IconId::HeroiconsOutlineBriefcase,
            Self::Calendar => IconId::HeroiconsOutlineCalendarDays,
            Self::Profile => IconId::HeroiconsOutlineUserCircle,
        }
    }
}

impl<S, R: Routable> Target<S, R> {
    fn into_resolution(self, wrap: impl FnOnce(S) -> Screen) -> Resolution {
        match self {
            Self::Screen(screen) => Resolution::Render(wrap(screen)),
            Self::Redirect(route) => Resolution::Redirect(route.to_path()),
        }
    }
}

/// Route `path` the way the rendered application would.
pub fn resolve(session: &Session, path: &str) -> Resolution {
    match session {
        Session::Loading => Resolution::Spinner,
        Session::Unauthenticated => PublicRoute::recognize(path)
            .unwrap_or(PublicRoute::NotFound)
            .target()
            .into_resolution(Screen::Public),
        Session::Authenticated(_) => PrivateRoute::recognize(path)
            .unwrap_or(PrivateRoute::NotFound)
            .target()
            .into_resolution(Screen::Private),
    }
}

/// Switch function for the public routes.
pub fn switch_public(route: PublicRoute) -> Html {
    log::debug!("switching to public route: {route:?}");
    match route.target() {
        Target::Screen(PublicScreen::Login) => html! { <LoginPage /> },
        Target::Screen(PublicScreen::ForgotPassword) => html! { <ForgotPasswordPage /> },
        Target::Redirect(to) => html! { <ReplaceRedirect<PublicRoute> {to} /> },
    }
}

/// Switch function for the private routes.
pub fn switch_private(route: PrivateRoute) -> Html {
    log::debug!("switching to private route: {route:?}");
    match route.target() {
        Target::Screen(screen) => {
            let page = match screen {
                PrivateScreen::Dashboard => html! { <DashboardPage /> },
                PrivateScreen::Classes => html! { <ClassesPage /> },
                PrivateScreen::Services => html! { <ServicesPage /> },
                PrivateScreen::Calendar => html! { <CalendarPage /> },
                PrivateScreen::Profile => html! { <ProfilePage /> },
            };
            html! { <Layout current={screen}>{page}</Layout> }
        }
        Target::Redirect(to) => html! { <ReplaceRedirect<PrivateRoute> {to} /> },
    }
}

#[function_component(PublicRoutes)]
pub fn public_routes() -> Html {
    html! { <Switch<PublicRoute> render={switch_public} /> }
}

#[function_component(PrivateRoutes)]
pub fn private_routes() -> Html {
    html! { <Switch<PrivateRoute> render={switch_private} /> }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;
