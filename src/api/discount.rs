use reqwest::Method;

use super::ApiEndpoint;
use crate::{
    DiscountRule, DiscountRuleCreate, DiscountRuleUpdate, DiscountsClient, DiscountsResult,
};

/// Provides methods for managing discount rules.
pub struct DiscountApi<'a> {
    client: &'a DiscountsClient,
}

impl<'a> ApiEndpoint for DiscountApi<'a> {
    fn client(&self) -> &DiscountsClient {
        self.client
    }
}

impl<'a> DiscountApi<'a> {
    /// Creates a new discount API instance.
    ///
    /// This method is intended for internal use by the discounts client.
    pub(crate) fn new(client: &'a DiscountsClient) -> Self {
        Self { client }
    }

    /// Retrieves all discount rules.
    pub async fn list(&self) -> DiscountsResult<Vec<DiscountRule>> {
        self.client.request(Method::GET, "/discounts", None::<()>).await
    }

    /// Retrieves a specific discount rule by ID.
    pub async fn get(&self, discount_id: &str) -> DiscountsResult<DiscountRule> {
        let endpoint = format!("/discounts/{discount_id}");
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }

    /// Creates a new discount rule.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &discounts_client::DiscountsClient) -> discounts_client::DiscountsResult<()> {
    /// use discounts_client::DiscountRuleCreate;
    /// use serde_json::json;
    ///
    /// let rule = client
    ///     .discounts()
    ///     .create(&DiscountRuleCreate {
    ///         kind: "CART_PERCENT_OFF".into(),
    ///         name: "10% off lunch".into(),
    ///         params: Some(json!({ "percent": 10 })),
    ///         site_ids: Some(vec![1, 2]),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("Created rule {}", rule.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, rule: &DiscountRuleCreate) -> DiscountsResult<DiscountRule> {
        self.client.request(Method::POST, "/discounts", Some(rule)).await
    }

    /// Applies a partial update to a discount rule.
    pub async fn update(
        &self,
        discount_id: &str,
        changes: &DiscountRuleUpdate,
    ) -> DiscountsResult<DiscountRule> {
        let endpoint = format!("/discounts/{discount_id}");
        self.client.request(Method::PATCH, &endpoint, Some(changes)).await
    }

    /// Deletes a discount rule.
    pub async fn delete(&self, discount_id: &str) -> DiscountsResult<()> {
        let endpoint = format!("/discounts/{discount_id}");
        self.client.request(Method::DELETE, &endpoint, None::<()>).await
    }
}
