use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A cuponera: a named coupon book whose calendar maps dates to the
/// discounts redeemable that day, under a per-user daily usage limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cuponera {
    /// The unique identifier for this cuponera.
    pub id: String,

    /// Display name of the cuponera.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// How many times each enrolled user may redeem per day.
    pub uses_per_day: u32,

    /// Calendar of redeemable discounts: `YYYY-MM-DD` -> discount IDs.
    #[serde(default)]
    pub calendar: HashMap<String, Vec<String>>,

    /// Sites where the cuponera applies; `None` means all.
    pub site_ids: Option<Vec<u32>>,

    /// Folder grouping, if any.
    pub folder: Option<String>,

    /// Whether redemptions are currently accepted.
    pub active: bool,

    /// First valid redemption date (`YYYY-MM-DD`), if bounded.
    pub start_date: Option<String>,

    /// Last valid redemption date (`YYYY-MM-DD`), if bounded.
    pub end_date: Option<String>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Request body for creating a cuponera.
#[derive(Debug, Clone, Serialize)]
pub struct CuponeraCreate {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub uses_per_day: u32,

    pub calendar: HashMap<String, Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_ids: Option<Vec<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    pub active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Default for CuponeraCreate {
    fn default() -> Self {
        CuponeraCreate {
            name: String::new(),
            description: None,
            uses_per_day: 1,
            calendar: HashMap::new(),
            site_ids: None,
            folder: None,
            active: true,
            start_date: None,
            end_date: None,
        }
    }
}

/// Partial update for a cuponera; `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CuponeraUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_per_day: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<HashMap<String, Vec<String>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_ids: Option<Vec<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
