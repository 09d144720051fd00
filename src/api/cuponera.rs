use reqwest::Method;

use super::ApiEndpoint;
use crate::{Cuponera, CuponeraCreate, CuponeraUpdate, DiscountsClient, DiscountsResult};

/// Provides methods for managing cuponeras (coupon books).
///
/// A cuponera schedules which discounts are redeemable on which dates and
/// limits how often each enrolled user may redeem per day. Enrollment is
/// handled by [`CuponeraUserApi`](crate::CuponeraUserApi).
pub struct CuponeraApi<'a> {
    client: &'a DiscountsClient,
}

impl<'a> ApiEndpoint for CuponeraApi<'a> {
    fn client(&self) -> &DiscountsClient {
        self.client
    }
}

impl<'a> CuponeraApi<'a> {
    /// Creates a new cuponera API instance.
    ///
    /// This method is intended for internal use by the discounts client.
    pub(crate) fn new(client: &'a DiscountsClient) -> Self {
        Self { client }
    }

    /// Retrieves all cuponeras.
    pub async fn list(&self) -> DiscountsResult<Vec<Cuponera>> {
        self.client.request(Method::GET, "/cuponeras", None::<()>).await
    }

    /// Retrieves a specific cuponera by ID.
    pub async fn get(&self, cuponera_id: &str) -> DiscountsResult<Cuponera> {
        let endpoint = format!("/cuponeras/{cuponera_id}");
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }

    /// Creates a new cuponera.
    pub async fn create(&self, cuponera: &CuponeraCreate) -> DiscountsResult<Cuponera> {
        self.client.request(Method::POST, "/cuponeras", Some(cuponera)).await
    }

    /// Applies a partial update to a cuponera.
    pub async fn update(
        &self,
        cuponera_id: &str,
        changes: &CuponeraUpdate,
    ) -> DiscountsResult<Cuponera> {
        let endpoint = format!("/cuponeras/{cuponera_id}");
        self.client.request(Method::PATCH, &endpoint, Some(changes)).await
    }

    /// Deletes a cuponera.
    ///
    /// Use with caution as this operation cannot be undone.
    pub async fn delete(&self, cuponera_id: &str) -> DiscountsResult<()> {
        let endpoint = format!("/cuponeras/{cuponera_id}");
        self.client.request(Method::DELETE, &endpoint, None::<()>).await
    }
}
