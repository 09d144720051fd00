use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A restaurant site (sede) served by the discounts service.
///
/// Sites are read-only from the client's perspective; they are synchronized
/// into the service from an upstream system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// The numeric identifier for this site.
    pub site_id: u32,

    /// The human-readable site name.
    pub site_name: String,

    /// Street address, if known.
    pub site_address: Option<String>,

    /// Contact phone number, if known.
    pub site_phone: Option<String>,

    /// City the site operates in.
    pub city_name: Option<String>,

    /// Country the site operates in.
    pub country_name: Option<String>,

    /// Whether the site is shown on the public web.
    #[serde(default = "default_show_on_web")]
    pub show_on_web: bool,

    /// Additional attributes for this site.
    #[serde(flatten)]
    pub attributes: Option<HashMap<String, serde_json::Value>>,
}

fn default_show_on_web() -> bool {
    true
}
