use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::{
    cuponera::CuponeraApi, cuponera_user::CuponeraUserApi, discount::DiscountApi,
    folder::FolderApi, menu::MenuApi, redeem::RedeemApi, site::SiteApi,
};
use crate::models::api_error::ErrorBody;
use crate::{DiscountsError, DiscountsResult};

/// Builder for the discounts client.
///
/// This builder provides a fluent API for creating clients with validation at
/// build time. The base origin is always injected here (there is no
/// process-wide default), so tests can point a client at a local mock server.
#[derive(Default)]
pub struct DiscountsClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl DiscountsClientBuilder {
    /// Sets the base origin of the remote service, e.g.
    /// `https://discounts.example.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    ///
    /// When supplied, the `timeout` and `user_agent` settings of this builder
    /// are ignored; the custom client carries its own.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> DiscountsResult<DiscountsClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| DiscountsError::ConfigurationError("Base URL is required".into()))
            .and_then(|url_str| {
                Url::parse(&url_str).map_err(|e| {
                    DiscountsError::ConfigurationError(format!("Invalid base URL: {e}"))
                })
            })?;

        let timeout = self.timeout.unwrap_or(Duration::from_secs(30));

        let user_agent = self
            .user_agent
            .as_deref()
            .unwrap_or(concat!("discounts-client/", env!("CARGO_PKG_VERSION")));

        let http_client = if let Some(custom_client) = self.http_client {
            custom_client
        } else {
            ReqwestClient::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    DiscountsError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?
        };

        Ok(DiscountsClient {
            base_url,
            http_client,
        })
    }
}

/// The main client for interacting with the discounts management API.
///
/// The client owns the single request dispatcher through which every outgoing
/// request passes, and provides access to the per-resource endpoints through
/// dedicated API objects.
#[derive(Clone, Debug)]
pub struct DiscountsClient {
    base_url: Url,
    http_client: ReqwestClient,
}

impl DiscountsClient {
    pub fn builder() -> DiscountsClientBuilder {
        DiscountsClientBuilder::default()
    }

    /// Resolves an endpoint against the configured base origin.
    ///
    /// A fully-qualified `http://` or `https://` endpoint is used verbatim,
    /// opting out of the base origin.
    fn endpoint_url(&self, endpoint: &str) -> DiscountsResult<Url> {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return Ok(Url::parse(endpoint)?);
        }
        Ok(self.base_url.join(endpoint)?)
    }

    /// Makes a raw request to the discounts API.
    ///
    /// # Warning
    ///
    /// This is an advanced API that bypasses the type-safe wrappers.
    /// Use the typed API methods (like `folders()`, `discounts()`) when
    /// possible.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method to use.
    /// * `endpoint` - The API endpoint path (e.g., "/discounts"), with any
    ///   query string already attached.
    /// * `body` - Optional request body (must implement `Serialize`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues, if the
    /// API returns an error response, or if the response body is not valid
    /// JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use discounts_client::{DiscountsClient, DiscountsError};
    /// # use serde_json::Value;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), DiscountsError> {
    /// let client = DiscountsClient::builder()
    ///     .base_url("https://discounts.example.com")
    ///     .build()?;
    ///
    /// let folders: Value = client
    ///     .raw_request(reqwest::Method::GET, "/folders", None::<()>)
    ///     .await?;
    /// println!("Folders: {folders:?}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<T>,
    ) -> DiscountsResult<Value>
    where
        T: Serialize,
    {
        self.request(method, endpoint, body).await
    }

    /// Make a request to the discounts API.
    pub(crate) async fn request<T, R>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<T>,
    ) -> DiscountsResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        self.request_with_headers(method, endpoint, HeaderMap::new(), body).await
    }

    /// Make a request with additional headers.
    ///
    /// `Content-Type: application/json` is applied to every request first;
    /// caller-supplied headers win on key collision.
    pub async fn request_with_headers<T, R>(
        &self,
        method: Method,
        endpoint: &str,
        headers: HeaderMap,
        body: Option<T>,
    ) -> DiscountsResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;

        let mut request = self
            .http_client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");

        if !headers.is_empty() {
            request = request.headers(headers);
        }

        if let Some(data) = body {
            request = request.json(&data);
        }

        let response = request.send().await?;
        let status = response.status();

        log::debug!("{} {} -> {}", method, url, status);

        if !status_is_success(status.as_u16()) {
            let body = response.bytes().await.unwrap_or_default();
            return Err(normalize_error(status, &body));
        }

        if status == StatusCode::NO_CONTENT {
            // No body to decode; unit and Option result shapes decode from null.
            return Ok(serde_json::from_value(Value::Null)?);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Gets the sites API interface.
    pub fn sites(&self) -> SiteApi {
        SiteApi::new(self)
    }

    /// Gets the menus API interface.
    pub fn menus(&self) -> MenuApi {
        MenuApi::new(self)
    }

    /// Gets the folders API interface.
    pub fn folders(&self) -> FolderApi {
        FolderApi::new(self)
    }

    /// Gets the discounts API interface.
    pub fn discounts(&self) -> DiscountApi {
        DiscountApi::new(self)
    }

    /// Gets the cuponeras (coupon books) API interface.
    pub fn cuponeras(&self) -> CuponeraApi {
        CuponeraApi::new(self)
    }

    /// Gets the cuponera users API interface.
    pub fn cuponera_users(&self) -> CuponeraUserApi {
        CuponeraUserApi::new(self)
    }

    /// Gets the redemption API interface.
    pub fn redeem(&self) -> RedeemApi {
        RedeemApi::new(self)
    }
}

/// Whether a status code counts as success for the dispatcher.
///
/// The contract is "status in 200..=299", kept explicit here instead of
/// leaning on the transport library's notion of "ok".
pub(crate) fn status_is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Normalizes a failure response into a single API error.
///
/// The body is decoded as `{"detail": ...}`. A string `detail` becomes the
/// message verbatim; any other value is JSON-serialized. A body that cannot
/// be decoded (or lacks `detail`) falls back to the status's reason phrase.
fn normalize_error(status: StatusCode, body: &[u8]) -> DiscountsError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(err) => match err.detail {
            Value::String(detail) => detail,
            other => other.to_string(),
        },
        Err(_) => status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.as_u16().to_string()),
    };
    DiscountsError::ApiError(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_200_to_299() {
        assert!(!status_is_success(199));
        assert!(status_is_success(200));
        assert!(status_is_success(201));
        assert!(status_is_success(204));
        assert!(status_is_success(299));
        assert!(!status_is_success(300));
        assert!(!status_is_success(404));
        assert!(!status_is_success(500));
    }

    #[test]
    fn relative_endpoints_join_the_base_origin() {
        let client = DiscountsClient::builder()
            .base_url("https://discounts.example.com")
            .build()
            .unwrap();

        let url = client.endpoint_url("/sites/3").unwrap();
        assert_eq!(url.as_str(), "https://discounts.example.com/sites/3");

        let url = client.endpoint_url("/redeem?code=ABC123").unwrap();
        assert_eq!(url.as_str(), "https://discounts.example.com/redeem?code=ABC123");
    }

    #[test]
    fn absolute_endpoints_bypass_the_base_origin() {
        let client = DiscountsClient::builder()
            .base_url("https://discounts.example.com")
            .build()
            .unwrap();

        let url = client.endpoint_url("https://other.example.com/health").unwrap();
        assert_eq!(url.as_str(), "https://other.example.com/health");

        let url = client.endpoint_url("http://127.0.0.1:8000/sites").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/sites");
    }

    #[test]
    fn string_detail_is_the_message_verbatim() {
        let err = normalize_error(
            StatusCode::NOT_FOUND,
            br#"{"detail": "Carpeta no encontrada"}"#,
        );
        match err {
            DiscountsError::ApiError(msg) => assert_eq!(msg, "Carpeta no encontrada"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn non_string_detail_is_json_serialized() {
        let err = normalize_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail": [{"loc": ["body", "name"], "msg": "field required"}]}"#,
        );
        match err {
            DiscountsError::ApiError(msg) => {
                assert_eq!(msg, r#"[{"loc":["body","name"],"msg":"field required"}]"#);
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_body_falls_back_to_the_reason_phrase() {
        let err = normalize_error(StatusCode::BAD_GATEWAY, b"<html>upstream down</html>");
        match err {
            DiscountsError::ApiError(msg) => assert_eq!(msg, "Bad Gateway"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn body_without_detail_falls_back_to_the_reason_phrase() {
        let err = normalize_error(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error": "boom"}"#);
        match err {
            DiscountsError::ApiError(msg) => assert_eq!(msg, "Internal Server Error"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn unknown_status_falls_back_to_the_numeric_code() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = normalize_error(status, b"");
        match err {
            DiscountsError::ApiError(msg) => assert_eq!(msg, "599"),
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
