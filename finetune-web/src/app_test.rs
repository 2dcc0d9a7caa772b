#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use i18nrs::yew::I18nProvider;
use shared::models::{AuthenticatedUser, User, UserRole};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::Router;
use yew_router::history::{AnyHistory, History, MemoryHistory};

use super::AppContent;
use crate::containers::auth_provider::AuthProvider;
use crate::language;
use crate::models::Session;
use crate::routes::{PrivateRoutes, PublicRoutes};

wasm_bindgen_test_configure!(run_in_browser);

fn student() -> Session {
    Session::Authenticated(Rc::new(AuthenticatedUser::new(
        User {
            id: 7,
            full_name: "Lucia Mendez".to_string(),
            email: "lucia@example.com".to_string(),
            national_id: None,
            phone: None,
            role: UserRole::Student,
        },
        None,
    )))
}

#[derive(Properties, PartialEq)]
struct GateProps {
    session: Session,
}

#[function_component(GateHarness)]
fn gate_harness(props: &GateProps) -> Html {
    let config = language::provider_config();
    html! {
        <I18nProvider ..config>
            <AuthProvider preset={props.session.clone()}>
                <AppContent />
            </AuthProvider>
        </I18nProvider>
    }
}

#[derive(Properties, PartialEq)]
struct TreeProps {
    session: Session,
    path: AttrValue,
}

#[function_component(TreeHarness)]
fn tree_harness(props: &TreeProps) -> Html {
    let config = language::provider_config();
    let history = MemoryHistory::new();
    history.push(props.path.as_str());
    let authenticated = props.session.user().is_some();

    html! {
        <I18nProvider ..config>
            <AuthProvider preset={props.session.clone()}>
                <Router history={AnyHistory::from(history)}>
                    if authenticated {
                        <PrivateRoutes />
                    } else {
                        <PublicRoutes />
                    }
                </Router>
            </AuthProvider>
        </I18nProvider>
    }
}

#[wasm_bindgen_test]
async fn loading_session_shows_only_the_spinner() {
    let rendered = LocalServerRenderer::<GateHarness>::with_props(GateProps {
        session: Session::Loading,
    })
    .render()
    .await;

    assert!(rendered.contains("role=\"status\""));
    assert!(!rendered.contains("navbar"));
    assert!(!rendered.contains("id=\"password\""));
}

#[wasm_bindgen_test]
async fn private_screen_is_wrapped_in_the_layout() {
    let rendered = LocalServerRenderer::<TreeHarness>::with_props(TreeProps {
        session: student(),
        path: "/classes".into(),
    })
    .render()
    .await;

    assert!(rendered.contains("navbar"));
    assert!(rendered.contains("href=\"/services\""));
    assert!(rendered.contains("Lucia"));
    assert!(!rendered.contains("role=\"status\""));
}

#[wasm_bindgen_test]
async fn public_screens_render_without_the_layout() {
    let rendered = LocalServerRenderer::<TreeHarness>::with_props(TreeProps {
        session: Session::Unauthenticated,
        path: "/forgot-password".into(),
    })
    .render()
    .await;

    assert!(rendered.contains("id=\"email\""));
    assert!(!rendered.contains("id=\"password\""));
    assert!(!rendered.contains("navbar"));
}

#[wasm_bindgen_test]
async fn login_form_is_served_at_login() {
    let rendered = LocalServerRenderer::<TreeHarness>::with_props(TreeProps {
        session: Session::Unauthenticated,
        path: "/login".into(),
    })
    .render()
    .await;

    assert!(rendered.contains("id=\"password\""));
    assert!(rendered.contains("href=\"/forgot-password\""));
}

fn default_text(key: &str) -> String {
    let info = language::get_language_info(language::DEFAULT_LANGUAGE).unwrap();
    let bundle: serde_json::Value = serde_json::from_str(info.translation).unwrap();
    key.split('.')
        .fold(&bundle, |value, part| &value[part])
        .as_str()
        .unwrap()
        .to_string()
}

#[wasm_bindgen_test]
async fn dashboard_is_served_at_root_inside_the_layout() {
    let rendered = LocalServerRenderer::<TreeHarness>::with_props(TreeProps {
        session: student(),
        path: "/".into(),
    })
    .render()
    .await;

    assert!(rendered.contains("navbar"));
    assert!(rendered.contains(&format!("{}, Lucia", default_text("dashboard.greeting"))));
}

#[wasm_bindgen_test]
async fn unknown_private_path_renders_no_screen() {
    let rendered = LocalServerRenderer::<TreeHarness>::with_props(TreeProps {
        session: student(),
        path: "/login".into(),
    })
    .render()
    .await;

    assert!(!rendered.contains("navbar"));
    assert!(!rendered.contains("id=\"password\""));
    assert!(!rendered.contains(&default_text("dashboard.greeting")));
}

#[wasm_bindgen_test]
async fn unknown_public_path_renders_no_screen() {
    let rendered = LocalServerRenderer::<TreeHarness>::with_props(TreeProps {
        session: Session::Unauthenticated,
        path: "/classes".into(),
    })
    .render()
    .await;

    assert!(!rendered.contains("navbar"));
    assert!(!rendered.contains("id=\"email\""));
    assert!(!rendered.contains("id=\"password\""));
}
