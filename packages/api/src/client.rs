//! # Authenticated HTTP client
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the three things every call to
//! the backend needs:
//!
//! - **Base URL**: endpoint paths are appended segment by segment, so emails
//!   and slugs are percent-encoded.
//! - **Bearer injection**: [`ApiClient::authorize`] adds
//!   `Authorization: Bearer <token>` to any request that does not already
//!   carry an `Authorization` header. The token is part of the client value;
//!   when the session token changes the UI builds a new client with
//!   [`ApiClient::with_token`].
//! - **Cancellation**: every send takes an optional [`CancellationToken`]. The
//!   request, and the body read that follows it, race the token; a fired
//!   token resolves to [`ApiError::Cancelled`].
//!
//! Status handling: any 2xx is success; 400/409/422 become
//! [`ApiError::Rejected`] with the backend's message; everything else is
//! [`ApiError::Status`]. Bodies that do not match the expected schema become
//! [`ApiError::UnexpectedResponse`].

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::AppConfig;
use tokio_util::sync::CancellationToken;

use crate::error::ApiError;
use crate::schema::ErrorBody;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
    /// Send cookies with cross-origin requests (`credentials: include`).
    credentials: bool,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && self.token == other.token
            && self.credentials == other.credentials
    }
}

impl ApiClient {
    /// Client for unauthenticated endpoints (login, sign-up).
    pub fn public(config: &AppConfig) -> Result<Self, ApiError> {
        Self::build(&config.api.base_url, None, false)
    }

    /// Client for authenticated endpoints.
    pub fn private(config: &AppConfig, token: Option<&str>) -> Result<Self, ApiError> {
        Self::build(&config.api.base_url, token, true)
    }

    fn build(base_url: &str, token: Option<&str>, credentials: bool) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
            credentials,
        })
    }

    /// Same client with a different token. Shares the connection pool.
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Absolute URL for the given path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start a request; headers may still be added before [`Self::send`].
    pub fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        let builder = self.http.request(method, url);
        #[cfg(target_arch = "wasm32")]
        let builder = if self.credentials {
            builder.fetch_credentials_include()
        } else {
            builder
        };
        Ok(builder)
    }

    /// Add the bearer token unless the request already has an `Authorization` header.
    pub fn authorize(&self, request: &mut Request) {
        if request.headers().contains_key(AUTHORIZATION) {
            return;
        }
        let Some(token) = self.token.as_deref() else {
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(e) => tracing::warn!("Session token is not a valid header value: {}", e),
        }
    }

    /// Authorize, send, and check the status.
    pub async fn send(
        &self,
        builder: RequestBuilder,
        cancel: Option<&CancellationToken>,
    ) -> Result<Response, ApiError> {
        let mut request = builder.build()?;
        self.authorize(&mut request);
        tracing::debug!("{} {}", request.method(), request.url());

        let response = cancellable(cancel, self.http.execute(request)).await??;
        check_status(response, cancel).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, segments)?;
        let response = self.send(builder, cancel).await?;
        read_json(response, cancel).await
    }

    pub(crate) async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
        cancel: Option<&CancellationToken>,
    ) -> Result<Response, ApiError> {
        let builder = self.request(method, segments)?.json(body);
        self.send(builder, cancel).await
    }

    pub(crate) async fn send_empty(
        &self,
        method: Method,
        segments: &[&str],
        cancel: Option<&CancellationToken>,
    ) -> Result<Response, ApiError> {
        let builder = self.request(method, segments)?;
        self.send(builder, cancel).await
    }
}

/// Race `fut` against the token, if there is one.
pub async fn cancellable<F: Future>(
    cancel: Option<&CancellationToken>,
    fut: F,
) -> Result<F::Output, ApiError> {
    let Some(token) = cancel else {
        return Ok(fut.await);
    };
    if token.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    tokio::select! {
        biased;
        () = token.cancelled() => Err(ApiError::Cancelled),
        out = fut => Ok(out),
    }
}

async fn check_status(
    response: Response,
    cancel: Option<&CancellationToken>,
) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            let text = cancellable(cancel, response.text()).await?.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(ErrorBody::into_message);
            Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
        _ => Err(ApiError::Status(status.as_u16())),
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    cancel: Option<&CancellationToken>,
) -> Result<T, ApiError> {
    let endpoint = response.url().path().to_string();
    let bytes = cancellable(cancel, response.bytes()).await??;
    serde_json::from_slice(&bytes).map_err(|source| ApiError::UnexpectedResponse { endpoint, source })
}

/// Like [`read_json`], but an empty body (or `null`) is `None`.
pub(crate) async fn read_optional_json<T: DeserializeOwned>(
    response: Response,
    cancel: Option<&CancellationToken>,
) -> Result<Option<T>, ApiError> {
    let endpoint = response.url().path().to_string();
    let bytes = cancellable(cancel, response.bytes()).await??;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&bytes).map_err(|source| ApiError::UnexpectedResponse { endpoint, source })
}
