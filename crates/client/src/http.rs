//! Shared HTTP plumbing: client construction, request decoration, and
//! transport fault classification.
//!
//! Timeouts are left at the underlying client's defaults; the service does
//! not define a timeout policy of its own.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

use carelink_core::{ApiError, ApiResult, ClientConfig};

use crate::token::TokenCell;

/// HTTP client bound to the service base URL.
///
/// Constructed either plain (for `signin`) or with a [`TokenCell`] handle,
/// in which case every request is decorated with a bearer `Authorization`
/// header while a token is held.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Option<Arc<TokenCell>>,
}

/// Response with the body fully read, before any decoding.
#[derive(Clone, Debug)]
pub(crate) struct RawResponse {
    pub status: u16,
    /// Canonical reason phrase for the status, e.g. `"OK"`.
    pub reason: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl ApiClient {
    /// Client without request decoration, used for unauthenticated calls.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens: None,
        }
    }

    /// Client that decorates every request with the current bearer token.
    pub fn with_tokens(config: ClientConfig, tokens: Arc<TokenCell>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens: Some(tokens),
        }
    }

    pub(crate) async fn get(&self, path: &str) -> ApiResult<RawResponse> {
        let request = self
            .http
            .get(self.config.endpoint(path))
            .headers(self.headers());
        Self::execute(request).await
    }

    pub(crate) async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<RawResponse> {
        let request = self
            .http
            .post(self.config.endpoint(path))
            .headers(self.headers())
            .json(body);
        Self::execute(request).await
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let token = self.tokens.as_deref().and_then(TokenCell::get);
        authorize(&mut headers, token.as_deref());
        headers
    }

    async fn execute(request: reqwest::RequestBuilder) -> ApiResult<RawResponse> {
        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.bytes().await.map_err(classify)?.to_vec();
        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

/// Attach the bearer token to `headers`, overwriting any previous
/// `Authorization` value.
///
/// With no token, an empty token, or a token that cannot be encoded as a
/// header value, the map is left untouched (including a pre-existing
/// `Authorization` header); decoration never fails a request.
pub fn authorize(headers: &mut HeaderMap, token: Option<&str>) {
    let Some(token) = token.filter(|token| !token.is_empty()) else {
        return;
    };
    match HeaderValue::from_str(&format!("Bearer {token}")) {
        Ok(value) => {
            headers.insert(AUTHORIZATION, value);
        }
        Err(error) => tracing::warn!("token not usable as a header value: {}", error),
    }
}

/// Map a transport-level failure onto the client error taxonomy.
///
/// Connection-level failures surface as [`ApiError::NoNetwork`] so callers
/// can message them distinctly; everything else is unexpected.
pub(crate) fn classify(error: reqwest::Error) -> ApiError {
    if error.is_connect() || error.is_timeout() {
        ApiError::NoNetwork
    } else {
        ApiError::Unexpected(error.to_string())
    }
}
