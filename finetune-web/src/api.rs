use crate::config::FrontendConfig;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    AuthenticatedUser, ErrorResponse, LoginRequest, LoginResponse, PasswordResetRequest,
    PasswordResetResponse, ProfileResponse, RefreshRequest, RefreshResponse, TokenPair,
};
use thiserror::Error;

const TOKENS_STORAGE_KEY: &str = "finetune.auth.tokens";

thread_local! {
    static SHARED_CLIENT: OnceCell<FineTuneClient> = OnceCell::new();
}

/// Failures surfaced by [`FineTuneClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unable to reach the server: {0}")]
    Network(#[source] reqwest::Error),
    #[error("the session is not authorized")]
    Unauthorized,
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("browser storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Text to show the user for an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMessage {
    /// Message written by the server, shown verbatim.
    Server(String),
    /// Translation key for a client-side message.
    Key(&'static str),
}

impl ApiError {
    /// Whether a failed refresh means the stored refresh token is no good.
    ///
    /// Only client errors qualify; server errors and transport failures keep
    /// the tokens for a later attempt.
    fn invalidates_refresh(&self) -> bool {
        match self {
            Self::Unauthorized => true,
            Self::Rejected { status, .. } => status.is_client_error(),
            Self::Network(_) | Self::Decode(_) | Self::Storage(_) => false,
        }
    }

    fn rejected(status: StatusCode, body: &ErrorResponse) -> Self {
        let message = body.first_message().unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        Self::Rejected { status, message }
    }

    /// The message forms display when a request fails.
    pub fn user_message(&self) -> UserMessage {
        match self {
            Self::Network(_) => UserMessage::Key("errors.network"),
            Self::Unauthorized => UserMessage::Key("errors.unauthorized"),
            Self::Rejected { message, .. } => UserMessage::Server(message.clone()),
            Self::Decode(_) => UserMessage::Key("errors.unexpected"),
            Self::Storage(_) => UserMessage::Key("errors.storage"),
        }
    }
}

/// Persistence of the JWT pair across page loads.
pub struct TokenStore;

impl TokenStore {
    /// Stored tokens, if any. An unreadable entry is discarded.
    pub fn load() -> Option<TokenPair> {
        match LocalStorage::get(TOKENS_STORAGE_KEY) {
            Ok(tokens) => Some(tokens),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                log::warn!("discarding unreadable stored tokens: {err}");
                Self::clear();
                None
            }
        }
    }

    pub fn save(tokens: &TokenPair) -> Result<(), ApiError> {
        LocalStorage::set(TOKENS_STORAGE_KEY, tokens)?;
        Ok(())
    }

    pub fn clear() {
        LocalStorage::delete(TOKENS_STORAGE_KEY);
    }
}

/// API client for the academy's `/api/auth/` endpoints.
#[derive(Clone, Debug)]
pub struct FineTuneClient {
    base_url: String,
    client: Client,
}

impl FineTuneClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    // The API expects trailing slashes on every endpoint.
    fn api_url(&self, path: &str) -> String {
        let path = path.trim_matches('/');
        format!("{}/{}/", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.json::<ErrorResponse>().await.unwrap_or_default();
            return Err(ApiError::rejected(status, &body));
        }
        response.json::<T>().await.map_err(ApiError::Decode)
    }

    async fn send_authorized<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let tokens = TokenStore::load().ok_or(ApiError::Unauthorized)?;
        let response = build()
            .bearer_auth(&tokens.access)
            .send()
            .await
            .map_err(ApiError::Network)?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        drop(response);
        log::debug!("access token rejected, refreshing");
        let refreshed = self.refresh_session(&tokens).await?;
        build()
            .bearer_auth(&refreshed.access)
            .send()
            .await
            .map_err(ApiError::Network)
    }

    /// Authenticate with email/password credentials and persist the issued tokens.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthenticatedUser, ApiError> {
        let url = self.api_url("auth/login");
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(ApiError::Network)?;
        let body: LoginResponse = Self::decode(response).await?;
        let (tokens, identity) = body.into_parts();
        TokenStore::save(&tokens)?;
        Ok(identity)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Tokens are dropped when the server refuses the refresh token. Server
    /// and network failures leave them in place so a later attempt can succeed.
    pub async fn refresh_session(&self, tokens: &TokenPair) -> Result<TokenPair, ApiError> {
        let url = self.api_url("auth/token/refresh");
        let payload = RefreshRequest {
            refresh: tokens.refresh.clone(),
        };
        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(ApiError::Network)?;
        match Self::decode::<RefreshResponse>(response).await {
            Ok(body) => {
                let refreshed = TokenPair {
                    access: body.access,
                    refresh: body.refresh.unwrap_or_else(|| tokens.refresh.clone()),
                };
                TokenStore::save(&refreshed)?;
                Ok(refreshed)
            }
            Err(err) if err.invalidates_refresh() => {
                log::info!("refresh token refused: {err}");
                TokenStore::clear();
                Err(ApiError::Unauthorized)
            }
            Err(err) => Err(err),
        }
    }

    /// Retrieve the authenticated account and its role profile.
    pub async fn get_profile(&self) -> Result<AuthenticatedUser, ApiError> {
        let url = self.api_url("auth/profile");
        let response = self
            .send_authorized(move || self.client.get(url.clone()))
            .await?;
        let body: ProfileResponse = Self::decode(response).await?;
        Ok(body.into())
    }

    /// Ask the server to email a password reset link.
    pub async fn request_password_reset(
        &self,
        payload: &PasswordResetRequest,
    ) -> Result<PasswordResetResponse, ApiError> {
        let url = self.api_url("auth/password-reset/request");
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(ApiError::Network)?;
        Self::decode(response).await
    }

    /// Forget the current session. Tokens are stateless on the server side.
    pub fn logout(&self) {
        TokenStore::clear();
    }
}

/// Resolve the session from stored tokens.
///
/// Returns `None` without touching the network when no tokens are stored.
pub async fn resolve_session(client: &FineTuneClient) -> Option<AuthenticatedUser> {
    if TokenStore::load().is_none() {
        log::debug!("no stored tokens, session is anonymous");
        return None;
    }
    match client.get_profile().await {
        Ok(identity) => Some(identity),
        Err(ApiError::Unauthorized) => {
            log::info!("stored session is no longer valid");
            TokenStore::clear();
            None
        }
        Err(err) => {
            log::warn!("unable to resolve session: {err}");
            None
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
