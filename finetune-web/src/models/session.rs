//! Authentication state of the running client.

use shared::models::AuthenticatedUser;
use std::rc::Rc;
use yew::Reducible;

/// Where the client stands with respect to authentication.
///
/// While `Loading`, no identity is authoritative for routing decisions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Rc<AuthenticatedUser>),
}

impl Session {
    /// Build a session from the `{user, loading}` pair an auth provider reports.
    ///
    /// `loading` wins over `user`.
    pub fn from_parts(user: Option<AuthenticatedUser>, loading: bool) -> Self {
        match (loading, user) {
            (true, _) => Self::Loading,
            (false, None) => Self::Unauthenticated,
            (false, Some(user)) => Self::Authenticated(Rc::new(user)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Authenticated(user) => Some(user.as_ref()),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

/// Transitions applied by the auth provider.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Initial resolution finished.
    Resolved(Option<AuthenticatedUser>),
    SignedIn(AuthenticatedUser),
    /// Explicit sign-out or loss of the identity mid-session.
    SignedOut,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SessionAction::Resolved(user) => Self::from_parts(user, false),
            SessionAction::SignedIn(user) => Self::Authenticated(Rc::new(user)),
            SessionAction::SignedOut => Self::Unauthenticated,
        };
        if *self == next {
            return self;
        }
        log::info!(
            "session transition: {} -> {}",
            self.label(),
            next.label()
        );
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{User, UserRole};

    fn identity(id: i64) -> AuthenticatedUser {
        AuthenticatedUser::new(
            User {
                id,
                full_name: "Marta Gómez".to_string(),
                email: "marta@finetune.test".to_string(),
                national_id: None,
                phone: None,
                role: UserRole::Student,
            },
            None,
        )
    }

    #[test]
    fn loading_ignores_user() {
        assert_eq!(Session::from_parts(Some(identity(1)), true), Session::Loading);
        assert_eq!(Session::from_parts(None, true), Session::Loading);
    }

    #[test]
    fn resolved_without_user_is_unauthenticated() {
        let session = Session::from_parts(None, false);
        assert_eq!(session, Session::Unauthenticated);
        assert!(session.user().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn resolved_with_user_is_authenticated() {
        let session = Session::from_parts(Some(identity(1)), false);
        assert_eq!(session.user().map(|user| user.user.id), Some(1));
    }

    #[test]
    fn default_is_loading() {
        assert!(Session::default().is_loading());
        assert!(Session::default().user().is_none());
    }

    #[test]
    fn reducer_applies_resolution() {
        let session = Rc::new(Session::Loading);
        let session = session.reduce(SessionAction::Resolved(Some(identity(2))));
        assert_eq!(session.user().map(|user| user.user.id), Some(2));
    }

    #[test]
    fn sign_out_never_returns_to_loading() {
        let session = Rc::new(Session::from_parts(Some(identity(3)), false));
        let session = session.reduce(SessionAction::SignedOut);
        assert_eq!(*session, Session::Unauthenticated);
    }

    #[test]
    fn sign_in_replaces_identity() {
        let session = Rc::new(Session::from_parts(Some(identity(3)), false));
        let session = session.reduce(SessionAction::SignedIn(identity(4)));
        assert_eq!(session.user().map(|user| user.user.id), Some(4));
    }

    #[test]
    fn identical_transition_keeps_same_allocation() {
        let session = Rc::new(Session::Unauthenticated);
        let next = Rc::clone(&session).reduce(SessionAction::SignedOut);
        assert!(Rc::ptr_eq(&session, &next));
    }
}
