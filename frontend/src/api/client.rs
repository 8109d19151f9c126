use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{api::types::ApiError, config};

/// Characters escaped when a record id is placed in a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// HTTP client for the attendance backend. Cheap to clone; every clone
/// shares the same connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Absolute URL of an endpoint under `{base}/auth`.
    pub(crate) async fn auth_url(&self, path: &str) -> String {
        format!("{}/auth{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Sends the request with browser credentials so the session cookie
    /// travels with it.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        with_credentials(builder).send().await.map_err(|e| {
            log::error!("Request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, fallback).await)
        }
    }

    /// Succeeds on any 2xx and returns the `message` field when the body
    /// carries one.
    pub(crate) async fn read_message(
        response: Response,
        fallback: &str,
    ) -> Result<Option<String>, ApiError> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, fallback).await);
        }
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message))
    }

    async fn error_from_response(response: Response, fallback: &str) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = error_from_parts(status, &body, fallback);
        log::warn!("{} -> {} ({})", status, error.error, error.code);
        error
    }
}

pub(crate) fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}

/// Maps a non-2xx status and its body onto an [`ApiError`]. The backend
/// replies with `{ "message": ... }`; `{ "error", "code" }` is accepted too.
pub(crate) fn error_from_parts(status: StatusCode, body: &str, fallback: &str) -> ApiError {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|b| b.message.clone().or_else(|| b.error.clone()))
        .filter(|m| !m.trim().is_empty());

    let mut error = match (status, message) {
        (StatusCode::UNAUTHORIZED, message) => {
            ApiError::unauthorized(message.unwrap_or_else(|| fallback.to_string()))
        }
        (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, Some(message)) => {
            ApiError::validation(message)
        }
        (_, Some(message)) => {
            let code = parsed.as_ref().and_then(|b| b.code.clone());
            let mut error = ApiError::request_failed(message);
            if let Some(code) = code {
                error.code = code;
            }
            error
        }
        (_, None) => ApiError::unknown(fallback),
    };
    error.details = parsed.and_then(|b| b.details);
    error
}
