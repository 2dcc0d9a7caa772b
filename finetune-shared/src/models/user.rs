use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::UserProfile;

/// Role assigned to an academy account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    #[serde(rename = "estudiante")]
    Student,
    #[serde(rename = "docente")]
    Teacher,
    #[serde(rename = "admin")]
    Admin,
}

impl UserRole {
    /// Return the identifier used by the API for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "estudiante",
            Self::Teacher => "docente",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "estudiante" => Ok(Self::Student),
            "docente" => Ok(Self::Teacher),
            "admin" => Ok(Self::Admin),
            _ => Err("unknown user role"),
        }
    }
}

/// An academy account as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// Full name as registered.
    #[serde(rename = "nombre_completo")]
    pub full_name: String,

    /// Login email address.
    #[serde(rename = "correo")]
    pub email: String,

    /// National identity document number.
    #[serde(rename = "cedula", default)]
    pub national_id: Option<String>,

    /// Contact phone number.
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    /// Role of the account.
    #[serde(rename = "rol")]
    pub role: UserRole,
}

impl User {
    /// First word of the full name, falling back to the email when the name is blank.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(self.email.as_str())
    }
}

/// The identity held by an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user: User,
    pub profile: Option<UserProfile>,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn new(user: User, profile: Option<UserProfile>) -> Self {
        Self { user, profile }
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.user.role
    }
}
