use reqwest::Method;

use super::{query_string, ApiEndpoint};
use crate::{DiscountsClient, DiscountsResult, RedeemResponse};

/// Provides the redemption lookup for cuponera codes.
pub struct RedeemApi<'a> {
    client: &'a DiscountsClient,
}

impl<'a> ApiEndpoint for RedeemApi<'a> {
    fn client(&self) -> &DiscountsClient {
        self.client
    }
}

impl<'a> RedeemApi<'a> {
    /// Creates a new redemption API instance.
    ///
    /// This method is intended for internal use by the discounts client.
    pub(crate) fn new(client: &'a DiscountsClient) -> Self {
        Self { client }
    }

    /// Looks up a redemption code and returns the discounts it unlocks.
    ///
    /// # Arguments
    ///
    /// * `code` - The enrolled user's redemption code.
    /// * `date` - Redemption date as `YYYY-MM-DD`; the service uses today
    ///   when omitted.
    /// * `record_use` - When `true`, the lookup counts against the user's
    ///   daily limit; when `false`, it is a dry-run check.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &discounts_client::DiscountsClient) -> discounts_client::DiscountsResult<()> {
    /// let redemption = client.redeem().lookup("ABC123", None, false).await?;
    /// if redemption.success {
    ///     println!("{} discounts available", redemption.discounts.len());
    /// } else {
    ///     println!("Rejected: {}", redemption.message);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup(
        &self,
        code: &str,
        date: Option<&str>,
        record_use: bool,
    ) -> DiscountsResult<RedeemResponse> {
        let mut params = vec![("code", code.to_string())];
        if let Some(date) = date {
            if !date.is_empty() {
                params.push(("date", date.to_string()));
            }
        }
        if record_use {
            params.push(("record_use", "true".to_string()));
        }
        let endpoint = format!("/redeem{}", query_string(&params));
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }
}
