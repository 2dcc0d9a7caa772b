//! Tests for the routing system
//!
//! Validates the gating contract: what each path resolves to for every
//! session state, and that the two route trees never overlap.

use super::*;
use shared::models::{AuthenticatedUser, User, UserRole};
use std::rc::Rc;
use strum::IntoEnumIterator;
use test_case::test_case;

fn signed_in() -> Session {
    Session::Authenticated(Rc::new(AuthenticatedUser::new(
        User {
            id: 1,
            full_name: "Usuario Uno".to_string(),
            email: "u1@finetune.test".to_string(),
            national_id: None,
            phone: None,
            role: UserRole::Student,
        },
        None,
    )))
}

fn redirect(path: &str) -> Resolution {
    Resolution::Redirect(path.to_string())
}

#[test_case("/" ; "root")]
#[test_case("/login" ; "login")]
#[test_case("/classes" ; "classes")]
#[test_case("/does-not-exist" ; "unknown")]
fn loading_always_shows_spinner(path: &str) {
    assert_eq!(resolve(&Session::Loading, path), Resolution::Spinner);
}

#[test_case("/login", PublicScreen::Login ; "login")]
#[test_case("/forgot-password", PublicScreen::ForgotPassword ; "forgot password")]
fn anonymous_public_paths_render(path: &str, screen: PublicScreen) {
    assert_eq!(
        resolve(&Session::Unauthenticated, path),
        Resolution::Render(Screen::Public(screen))
    );
}

#[test_case("/" ; "root")]
#[test_case("/classes" ; "classes")]
#[test_case("/services" ; "services")]
#[test_case("/calendar" ; "calendar")]
#[test_case("/profile" ; "profile")]
#[test_case("/admin/settings" ; "nested unknown")]
#[test_case("/404" ; "not found path")]
fn anonymous_other_paths_redirect_to_login(path: &str) {
    assert_eq!(resolve(&Session::Unauthenticated, path), redirect("/login"));
}

#[test_case("/", PrivateScreen::Dashboard ; "dashboard")]
#[test_case("/classes", PrivateScreen::Classes ; "classes")]
#[test_case("/services", PrivateScreen::Services ; "services")]
#[test_case("/calendar", PrivateScreen::Calendar ; "calendar")]
#[test_case("/profile", PrivateScreen::Profile ; "profile")]
fn signed_in_private_paths_render(path: &str, screen: PrivateScreen) {
    assert_eq!(
        resolve(&signed_in(), path),
        Resolution::Render(Screen::Private(screen))
    );
}

#[test_case("/login" ; "login")]
#[test_case("/forgot-password" ; "forgot password")]
#[test_case("/classes/42" ; "nested unknown")]
#[test_case("/404" ; "not found path")]
fn signed_in_other_paths_redirect_to_dashboard(path: &str) {
    assert_eq!(resolve(&signed_in(), path), redirect("/"));
}

#[test]
fn redirect_targets_resolve_to_screens() {
    // A redirect must never chain into another redirect.
    let Resolution::Redirect(login) = resolve(&Session::Unauthenticated, "/classes") else {
        panic!("expected a redirect");
    };
    assert_eq!(
        resolve(&Session::Unauthenticated, &login),
        Resolution::Render(Screen::Public(PublicScreen::Login))
    );

    let Resolution::Redirect(home) = resolve(&signed_in(), "/login") else {
        panic!("expected a redirect");
    };
    assert_eq!(
        resolve(&signed_in(), &home),
        Resolution::Render(Screen::Private(PrivateScreen::Dashboard))
    );
}

#[test]
fn private_screens_round_trip_through_routes() {
    for screen in PrivateScreen::iter() {
        assert_eq!(screen.route().target(), Target::Screen(screen));
    }
}

#[test]
fn route_trees_do_not_share_screen_paths() {
    for screen in PrivateScreen::iter() {
        let path = screen.route().to_path();
        assert_eq!(
            PublicRoute::recognize(&path)
                .unwrap_or(PublicRoute::NotFound)
                .target(),
            Target::Redirect(PublicRoute::Login),
            "{path} must not be public"
        );
    }
    for route in [PublicRoute::Login, PublicRoute::ForgotPassword] {
        let path = route.to_path();
        assert_eq!(
            PrivateRoute::recognize(&path)
                .unwrap_or(PrivateRoute::NotFound)
                .target(),
            Target::Redirect(PrivateRoute::Dashboard),
            "{path} must not be private"
        );
    }
}

#[test]
fn navigation_order_starts_at_dashboard() {
    let keys: Vec<_> = PrivateScreen::iter().map(PrivateScreen::key).collect();
    assert_eq!(
        keys,
        ["dashboard", "classes", "services", "calendar", "profile"]
    );
}
