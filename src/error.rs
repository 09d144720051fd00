use thiserror::Error;
pub use url::ParseError as UrlParseError;

/// Error types for the discounts API client.
#[derive(Error, Debug)]
pub enum DiscountsError {
    /// The service rejected the request. The message is the `detail` field of
    /// the error body (stringified if it was not a string), or the status's
    /// reason phrase when the body could not be decoded.
    #[error("{0}")]
    ApiError(String),

    /// HTTP transport failed (connection refused, DNS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing the base origin or an endpoint URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// A successful response carried a body that could not be decoded into
    /// the declared result shape.
    #[error("Decoding error: {0}")]
    DecodingError(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

/// Result type for discounts API operations.
pub type DiscountsResult<T> = Result<T, DiscountsError>;
