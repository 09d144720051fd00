use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::discount::DiscountRule;

/// One discount applicable to a redemption, paired with its full rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemDiscountItem {
    /// Identifier of the discount rule.
    pub discount_id: String,

    /// The discount rule itself.
    pub discount: DiscountRule,
}

/// Contact profile of the redeeming user, for pre-filling checkout forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemUserInfo {
    /// Full name (kept for compatibility with older records).
    pub name: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub phone: String,

    /// Country dialing code, e.g. `+57`.
    pub phone_code: Option<String>,

    pub email: String,

    pub address: Option<String>,
}

/// Outcome of a redemption lookup.
///
/// `success` is false for unknown codes, inactive or out-of-window
/// cuponeras, and exhausted daily limits; `message` carries the
/// human-readable explanation either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemResponse {
    pub success: bool,

    pub message: String,

    /// Display name of the cuponera the code belongs to.
    pub cuponera_name: Option<String>,

    /// Discounts redeemable today with this code.
    #[serde(default)]
    pub discounts: Vec<RedeemDiscountItem>,

    /// Uses the code still has left today, after this lookup.
    pub uses_remaining_today: Option<u32>,

    /// Contact profile of the enrolled user, when the code is valid.
    pub user: Option<RedeemUserInfo>,

    /// Sites where the cuponera applies; `None` means all.
    #[serde(default)]
    pub cuponera_site_ids: Option<Vec<u32>>,

    /// Menu info for the free product, when a `FREE_ITEM` rule applies.
    #[serde(default)]
    pub free_product: Option<Value>,

    /// Menu info for targeted categories, for `CATEGORY_*` rules.
    #[serde(default)]
    pub discount_categories: Option<Vec<Value>>,

    /// Menu info for targeted products, for `PRODUCT_*` rules.
    #[serde(default)]
    pub discount_products: Option<Vec<Value>>,
}
