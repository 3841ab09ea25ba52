use std::time::Duration;

use log::{debug, error, info, warn};
use reqwest::{
    Client, Method, RequestBuilder, StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use roster_config::ClientConfig;
use roster_model::ApiResponse;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error";

/// Failure of a single request before it is folded into an [`ApiResponse`].
///
/// Never leaves this module's public methods; callers only see the
/// normalized failure envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("transport error")]
    Transport(#[source] reqwest::Error),
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        backend_error: Option<String>,
    },
    #[error("malformed response body")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else {
            ApiError::Transport(err)
        }
    }

    /// Text shown to the user for this failure.
    ///
    /// A backend-supplied error message takes precedence over the generic
    /// status mapping.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                backend_error: Some(message),
                ..
            } => message.clone(),
            ApiError::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
                NOT_FOUND_MESSAGE.to_string()
            }
            ApiError::Status { status, .. } if status.is_server_error() => {
                SERVER_ERROR_MESSAGE.to_string()
            }
            _ => CONNECTION_ERROR_MESSAGE.to_string(),
        }
    }

    fn log(&self, method: &Method, url: &str) {
        match self {
            ApiError::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
                error!("[ApiClient] Resource not found: {} {}", method, url);
            }
            ApiError::Status {
                status,
                backend_error,
            } if status.is_server_error() => {
                error!(
                    "[ApiClient] Server error {} on {} {}: {}",
                    status,
                    method,
                    url,
                    backend_error.as_deref().unwrap_or("<no error body>")
                );
            }
            ApiError::Timeout(_) => {
                error!("[ApiClient] Request timed out: {} {}", method, url);
            }
            other => {
                error!("[ApiClient] {} {} failed: {}", method, url, other);
            }
        }
    }

    pub fn into_response<T>(self) -> ApiResponse<T> {
        ApiResponse::failure(self.user_message())
    }
}

/// Error body shape the backend uses on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the user backend.
///
/// Every call makes exactly one attempt and always resolves to an
/// [`ApiResponse`]; transport and status failures become failure envelopes.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        // Many users will provide "localhost:5000" which reqwest rejects, so add
        // http:// if missing and trim a trailing slash to prevent double slashes.
        fn normalize(raw: String) -> String {
            let trimmed = raw.trim().trim_end_matches('/').to_string();
            let with_scheme =
                if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
                    trimmed
                } else {
                    format!("http://{}", trimmed)
                };
            if with_scheme != raw {
                warn!(
                    "[ApiClient] Normalized base URL from '{}' to '{}'",
                    raw, with_scheme
                );
            }
            with_scheme
        }

        let base_url = normalize(base_url.into());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(ApiError::ClientBuild)?;

        info!(
            "[ApiClient] Creating new API client with base URL: {} (timeout {:?})",
            base_url, timeout
        );

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(config.api_url.clone(), config.request_timeout)
    }

    /// Build an absolute URL for a route path
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        request: RequestBuilder,
    ) -> ApiResponse<T> {
        debug!("[ApiClient] {} {}", method, url);
        match self.try_execute(request).await {
            Ok(response) => response,
            Err(err) => {
                err.log(&method, &url);
                err.into_response()
            }
        }
    }

    async fn try_execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = request.send().await.map_err(ApiError::from_send)?;
        let status = response.status();

        if status.is_success() {
            // The backend's envelope is trusted as-is.
            return response
                .json::<ApiResponse<T>>()
                .await
                .map_err(ApiError::Decode);
        }

        let body = response.text().await.unwrap_or_default();
        let backend_error = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|message| !message.trim().is_empty());

        Err(ApiError::Status {
            status,
            backend_error,
        })
    }

    /// GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        let url = self.build_url(path);
        let request = self.client.get(&url);
        self.execute(Method::GET, url, request).await
    }

    /// GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ApiResponse<T> {
        let url = self.build_url(path);
        let request = self.client.get(&url).query(query);
        self.execute(Method::GET, url, request).await
    }

    /// POST request
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        let url = self.build_url(path);
        let request = self.client.post(&url).json(body);
        self.execute(Method::POST, url, request).await
    }

    /// PUT request
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        let url = self.build_url(path);
        let request = self.client.put(&url).json(body);
        self.execute(Method::PUT, url, request).await
    }

    /// DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        let url = self.build_url(path);
        let request = self.client.delete(&url);
        self.execute(Method::DELETE, url, request).await
    }
}
