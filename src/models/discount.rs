use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Item targeting for a discount rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScopeType {
    /// The rule applies to the whole cart.
    AllItems,

    /// The rule applies to the listed categories.
    CategoryIds,

    /// The rule applies to the listed products.
    ProductIds,
}

impl Default for ScopeType {
    fn default() -> Self {
        ScopeType::AllItems
    }
}

/// Which items a discount rule targets, with optional exclusions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Scope {
    pub scope_type: ScopeType,

    #[serde(default)]
    pub category_ids: Vec<String>,

    #[serde(default)]
    pub product_ids: Vec<String>,

    #[serde(default)]
    pub exclude_category_ids: Vec<String>,

    #[serde(default)]
    pub exclude_product_ids: Vec<String>,
}

/// A discount rule.
///
/// The `conditions`, `params`, `limits`, `stacking_policy`, and `audit`
/// sub-objects are rule-type specific and treated as free-form by the
/// service, so they stay untyped here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRule {
    /// The unique identifier for this rule.
    pub id: String,

    /// Rule type, e.g. `CART_PERCENT_OFF`, `FREE_ITEM`, `BUY_M_PAY_N`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Display name of the rule.
    pub name: String,

    /// Evaluation priority; higher wins among stacking candidates.
    #[serde(default)]
    pub priority: i32,

    /// Stacking behavior, e.g. `{"mode": "EXCLUSIVE", "exclusive_group": "default"}`.
    #[serde(default)]
    pub stacking_policy: Value,

    /// Which items the rule targets.
    #[serde(default)]
    pub scope: Scope,

    /// Rule-type specific activation conditions.
    #[serde(default)]
    pub conditions: Value,

    /// Rule-type specific parameters (percentages, amounts, item ids).
    #[serde(default)]
    pub params: Value,

    /// Usage limits.
    #[serde(default)]
    pub limits: Value,

    /// How discounted units are chosen, e.g. `CHEAPEST_UNITS`.
    pub selection_rule: String,

    /// Where the discount is applied, e.g. `CART_LEVEL`.
    pub apply_as: String,

    /// Audit trail metadata.
    #[serde(default)]
    pub audit: Value,

    /// Sites where the rule applies; `None` means all.
    pub site_ids: Option<Vec<u32>>,

    /// Folder grouping, if any.
    pub folder: Option<String>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Request body for creating a discount rule.
///
/// Fields left at `None` take the service's defaults.
#[derive(Debug, Clone, Serialize, Default)]
pub struct DiscountRuleCreate {
    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    pub priority: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking_policy: Option<Value>,

    pub scope: Scope,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_rule: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_as: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_ids: Option<Vec<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Partial update for a discount rule; `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, Default)]
pub struct DiscountRuleUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking_policy: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_rule: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_as: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_ids: Option<Vec<u32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}
