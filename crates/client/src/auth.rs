//! Login, logout, and the authenticated signal.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use carelink_core::{ApiError, ApiResult};

use crate::http::{ApiClient, RawResponse};
use crate::token::{TokenCell, TokenStore};

#[derive(Clone, Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
struct LoginResponse {
    token: Option<String>,
}

/// Owns the session: performs sign-in, clears it on sign-out, and exposes
/// whether a token is currently held.
///
/// The gate is the only writer of the [`TokenCell`]; the decorated client
/// reads it concurrently. Sign-ins are user-serialized (one at a time), so
/// no further coordination is needed.
pub struct AuthGate {
    client: ApiClient,
    tokens: Arc<TokenCell>,
    store: TokenStore,
}

impl AuthGate {
    /// `client` must be a plain (non-decorated) client: `signin` carries
    /// credentials, not a bearer token.
    pub fn new(client: ApiClient, tokens: Arc<TokenCell>, store: TokenStore) -> Self {
        Self {
            client,
            tokens,
            store,
        }
    }

    /// True iff a session token is currently held.
    pub fn authenticated(&self) -> bool {
        self.tokens.is_present()
    }

    /// Sign in with the user's email and password.
    ///
    /// On success the returned token becomes the session token and is
    /// persisted best-effort. Every failure outcome, including a 2xx
    /// response that carries no token, surfaces as an [`ApiError`] with a
    /// user-facing message.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        let request = LoginRequest {
            username: email,
            password,
        };
        let response = self.client.post_json("signin", &request).await?;
        let token = login_outcome(response)?;
        self.tokens.set(token.clone());
        self.store.save(&token);
        Ok(())
    }

    /// Drop the session token. No request is made; the server keeps no
    /// session state to tear down.
    pub fn logout(&self) {
        self.tokens.clear();
        self.store.forget();
    }
}

/// Map a raw `signin` response onto either a token or a user-facing
/// failure.
///
/// A 401 reads as bad credentials; any other unsuccessful outcome (non-2xx,
/// empty body, or a missing token) gets the generic wording with the
/// response's own status code.
fn login_outcome(response: RawResponse) -> ApiResult<String> {
    if response.is_success() && !response.body.is_empty() {
        let body: LoginResponse = serde_json::from_slice(&response.body)
            .map_err(|error| ApiError::Unexpected(error.to_string()))?;
        if let Some(token) = body.token {
            return Ok(token);
        }
    }

    let reason = if response.status == 401 {
        "Invalid credentials"
    } else {
        "Something went wrong"
    };
    Err(ApiError::Status {
        code: response.status,
        message: format!("{reason}. Please try again."),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use carelink_core::ClientConfig;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            reason: String::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn successful_login_yields_the_token() {
        let token = login_outcome(response(200, r#"{"token": "abc123"}"#)).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn unauthorized_maps_to_invalid_credentials() {
        let error = login_outcome(response(401, r#"{"message": "bad password"}"#)).unwrap_err();
        match error {
            ApiError::Status { code, message } => {
                assert_eq!(code, 401);
                assert_eq!(message, "Invalid credentials. Please try again.");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn other_failures_map_to_the_generic_message() {
        for status in [400, 403, 500, 503] {
            let error = login_outcome(response(status, "{}")).unwrap_err();
            match error {
                ApiError::Status { code, message } => {
                    assert_eq!(code, status);
                    assert_eq!(message, "Something went wrong. Please try again.");
                }
                other => panic!("expected Status error, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_body_despite_success_is_a_failure_with_that_code() {
        let error = login_outcome(response(200, "")).unwrap_err();
        match error {
            ApiError::Status { code, message } => {
                assert_eq!(code, 200);
                assert_eq!(message, "Something went wrong. Please try again.");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn null_token_despite_success_is_a_failure_with_that_code() {
        let error = login_outcome(response(200, r#"{"token": null}"#)).unwrap_err();
        match error {
            ApiError::Status { code, message } => {
                assert_eq!(code, 200);
                assert_eq!(message, "Something went wrong. Please try again.");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_body_is_an_unexpected_fault() {
        let error = login_outcome(response(200, "not json")).unwrap_err();
        assert!(matches!(error, ApiError::Unexpected(_)));
    }

    #[test]
    fn logout_clears_the_session_and_the_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("token");
        std::fs::write(&path, "persisted").expect("write");

        let store = TokenStore::new(Some(path.clone()));
        let tokens = Arc::new(TokenCell::new(store.load()));
        let gate = AuthGate::new(
            ApiClient::new(ClientConfig::default()),
            Arc::clone(&tokens),
            store,
        );

        assert!(gate.authenticated());
        gate.logout();
        assert!(!gate.authenticated());
        assert!(!path.exists());
    }
}
