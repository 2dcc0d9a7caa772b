pub mod auth;
pub mod errors;
pub mod profile;
pub mod user;

pub use auth::{
    LoginRequest, LoginResponse, PasswordResetRequest, PasswordResetResponse, ProfileResponse,
    RefreshRequest, RefreshResponse, TokenPair,
};
pub use errors::ErrorResponse;
pub use profile::{StudentProfile, TeacherProfile, UserProfile};
pub use user::{AuthenticatedUser, User, UserRole};
