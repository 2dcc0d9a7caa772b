//! Request and response bodies of the `/api/auth/` endpoints.

use serde::{Deserialize, Serialize};

use super::{AuthenticatedUser, User, UserProfile};

/// Credentials posted to `auth/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(rename = "correo")]
    pub email: String,
    pub password: String,
}

/// Successful login: a JWT pair plus the account and its profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(rename = "usuario")]
    pub user: User,
    #[serde(rename = "perfil", default)]
    pub profile: Option<UserProfile>,
}

impl LoginResponse {
    /// Split the response into the tokens to persist and the session identity.
    #[must_use]
    pub fn into_parts(self) -> (TokenPair, AuthenticatedUser) {
        (
            TokenPair {
                access: self.access_token,
                refresh: self.refresh_token,
            },
            AuthenticatedUser::new(self.user, self.profile),
        )
    }
}

/// Access and refresh tokens as kept by the client between page loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body of `auth/token/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Response of `auth/token/refresh/`.
///
/// `refresh` is only present when the server rotates refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Response of `auth/profile/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    #[serde(rename = "usuario")]
    pub user: User,
    #[serde(rename = "perfil", default)]
    pub profile: Option<UserProfile>,
}

impl From<ProfileResponse> for AuthenticatedUser {
    fn from(response: ProfileResponse) -> Self {
        Self::new(response.user, response.profile)
    }
}

/// Body of `auth/password-reset/request/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetRequest {
    #[serde(rename = "correo")]
    pub email: String,
}

/// Confirmation returned once the reset email has been sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordResetResponse {
    pub message: String,
}
