use serde::{Deserialize, Serialize};

/// A menu category, as exposed for catalog selects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuCategory {
    /// Category identifier (opaque string from the menu source).
    pub id: String,

    /// Display name of the category.
    pub name: String,
}

/// A product from the menu catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Product identifier (opaque string from the menu source).
    pub id: String,

    /// Display name of the product.
    pub name: String,

    /// Identifier of the category this product belongs to.
    pub category_id: String,
}

/// One page of a product search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products matching the query, in catalog order.
    pub items: Vec<Product>,

    /// Total number of matches, ignoring pagination.
    pub total: u64,
}

/// Parameters for a product search.
///
/// Every field has its own presence rule: list parameters are sent only when
/// non-empty (comma-joined), the search string only when non-empty, and
/// numeric parameters whenever set; zero is a valid offset and is sent.
///
/// # Examples
///
/// ```
/// use discounts_client::ProductQuery;
///
/// let query = ProductQuery {
///     site_ids: vec![1, 2],
///     q: "soda".into(),
///     limit: Some(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Restrict the search to these sites; empty means all permitted sites.
    pub site_ids: Vec<u32>,

    /// Case-insensitive search over product name/description.
    pub q: String,

    /// Maximum number of items to return; the service returns everything
    /// when unset.
    pub limit: Option<u32>,

    /// Number of items to skip.
    pub offset: Option<u32>,

    /// Product IDs that must always be included (e.g. already-selected ones).
    pub ids: Vec<String>,
}

impl ProductQuery {
    /// Builds the query parameters, applying the per-field presence rules.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.site_ids.is_empty() {
            let joined =
                self.site_ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
            params.push(("site_ids", joined));
        }
        if !self.q.is_empty() {
            params.push(("q", self.q.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if !self.ids.is_empty() {
            params.push(("ids", self.ids.join(",")));
        }
        params
    }
}
