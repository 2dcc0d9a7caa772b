//! Tests for the API client
//!
//! Covers URL construction and the mapping from server error bodies to the
//! messages shown in forms, the refresh policy, and (in the browser) session
//! resolution from stored tokens.

use super::*;
use test_case::test_case;

#[test]
fn api_client_creation_trims_base_url() {
    let client = FineTuneClient::new("https://portal.example.test/api/");
    assert_eq!(client.base_url, "https://portal.example.test/api");
}

#[test_case("auth/login", "/api/auth/login/" ; "bare path")]
#[test_case("/auth/profile", "/api/auth/profile/" ; "leading slash")]
#[test_case("auth/token/refresh/", "/api/auth/token/refresh/" ; "trailing slash")]
fn api_url_always_ends_with_slash(path: &str, expected: &str) {
    let client = FineTuneClient::new("/api");
    assert_eq!(client.api_url(path), expected);
}

#[test]
fn rejected_uses_server_message() {
    let body = ErrorResponse::new("Credenciales incorrectas.");
    let error = ApiError::rejected(StatusCode::BAD_REQUEST, &body);
    assert_eq!(
        error.user_message(),
        UserMessage::Server("Credenciales incorrectas.".to_string())
    );
    assert!(error.to_string().contains("400"));
}

#[test]
fn rejected_without_body_uses_status_reason() {
    let error = ApiError::rejected(StatusCode::INTERNAL_SERVER_ERROR, &ErrorResponse::default());
    assert_eq!(
        error.user_message(),
        UserMessage::Server("Internal Server Error".to_string())
    );
}

#[test]
fn unauthorized_maps_to_translation_key() {
    assert_eq!(
        ApiError::Unauthorized.user_message(),
        UserMessage::Key("errors.unauthorized")
    );
}

#[test]
fn storage_errors_map_to_translation_key() {
    let error = ApiError::from(StorageError::KeyNotFound("finetune.auth.tokens".to_string()));
    assert_eq!(error.user_message(), UserMessage::Key("errors.storage"));
}

#[test_case(StatusCode::BAD_REQUEST, true ; "missing refresh token")]
#[test_case(StatusCode::UNAUTHORIZED, true ; "expired refresh token")]
#[test_case(StatusCode::INTERNAL_SERVER_ERROR, false ; "server error")]
#[test_case(StatusCode::BAD_GATEWAY, false ; "proxy error")]
#[test_case(StatusCode::SERVICE_UNAVAILABLE, false ; "server down")]
fn refresh_rejection_by_status(status: StatusCode, invalidates: bool) {
    let error = ApiError::rejected(status, &ErrorResponse::default());
    assert_eq!(error.invalidates_refresh(), invalidates);
}

#[test]
fn unauthorized_refresh_drops_tokens() {
    assert!(ApiError::Unauthorized.invalidates_refresh());
}

#[test]
fn storage_failure_keeps_tokens() {
    let error = ApiError::from(StorageError::KeyNotFound(TOKENS_STORAGE_KEY.to_string()));
    assert!(!error.invalidates_refresh());
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Nothing listens on the discard port, so requests fail at the transport.
    const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

    fn sample_tokens() -> TokenPair {
        TokenPair {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
        }
    }

    #[wasm_bindgen_test]
    async fn no_stored_tokens_resolve_to_anonymous() {
        TokenStore::clear();
        let client = FineTuneClient::new(UNREACHABLE_API);
        assert!(resolve_session(&client).await.is_none());
        assert!(TokenStore::load().is_none());
    }

    #[wasm_bindgen_test]
    async fn unreachable_server_keeps_stored_tokens() {
        TokenStore::save(&sample_tokens()).unwrap();
        let client = FineTuneClient::new(UNREACHABLE_API);
        assert!(resolve_session(&client).await.is_none());
        assert_eq!(TokenStore::load(), Some(sample_tokens()));
        TokenStore::clear();
    }

    #[wasm_bindgen_test]
    fn unreadable_tokens_are_discarded() {
        LocalStorage::set(TOKENS_STORAGE_KEY, "not a token pair").unwrap();
        assert!(TokenStore::load().is_none());
        assert!(LocalStorage::raw().get_item(TOKENS_STORAGE_KEY).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn saved_tokens_round_trip() {
        TokenStore::save(&sample_tokens()).unwrap();
        assert_eq!(TokenStore::load(), Some(sample_tokens()));
        TokenStore::clear();
    }
}
