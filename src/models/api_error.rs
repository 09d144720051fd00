use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the service on failure responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Problem description. A plain string for most errors; validation
    /// failures carry structured data instead.
    pub detail: Value,
}
