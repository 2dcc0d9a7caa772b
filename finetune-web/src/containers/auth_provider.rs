//! Session ownership for the component tree.
//!
//! [`AuthProvider`] owns the [`Session`] reducer and is the only place that
//! changes it. Descendants obtain a [`SessionContext`] through
//! [`use_session`] to read the session or request a sign-in/sign-out.

use crate::api::{FineTuneClient, resolve_session};
use crate::models::{Session, SessionAction};
use shared::models::AuthenticatedUser;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Read handle on the session plus the transitions consumers may request.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    state: UseReducerHandle<Session>,
}

impl SessionContext {
    pub fn session(&self) -> &Session {
        &self.state
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.state.user()
    }

    /// Record a freshly authenticated identity.
    pub fn sign_in(&self, user: AuthenticatedUser) {
        self.state.dispatch(SessionAction::SignedIn(user));
    }

    /// Drop the stored tokens and return to the anonymous route tree.
    pub fn sign_out(&self) {
        FineTuneClient::shared().logout();
        self.state.dispatch(SessionAction::SignedOut);
    }
}

/// Session context of the nearest [`AuthProvider`], if any.
#[hook]
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}

/// Identity of the signed-in user, for screens of the private tree.
#[hook]
pub fn use_identity() -> Option<AuthenticatedUser> {
    use_session().and_then(|context| context.user().cloned())
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
    /// Start from this session instead of resolving one from stored tokens.
    #[prop_or_default]
    pub preset: Option<Session>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let preset = props.preset.clone();
    let resolve = preset.is_none();
    let state = use_reducer(move || preset.unwrap_or_default());

    {
        let state = state.clone();
        use_effect_with((), move |()| {
            if resolve {
                spawn_local(async move {
                    let user = resolve_session(&FineTuneClient::shared()).await;
                    state.dispatch(SessionAction::Resolved(user));
                });
            }
            || ()
        });
    }

    let context = SessionContext { state };

    html! {
        <ContextProvider<SessionContext> {context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
