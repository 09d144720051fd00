use reqwest::Method;

use super::ApiEndpoint;
use crate::{
    CuponeraUser, CuponeraUserCreate, CuponeraUserUpdate, DiscountsClient, DiscountsResult,
};

/// Provides methods for managing the users enrolled in a cuponera.
///
/// Users only exist within a cuponera, so every operation takes the parent
/// `cuponera_id`; there is no cross-cuponera operation.
pub struct CuponeraUserApi<'a> {
    client: &'a DiscountsClient,
}

impl<'a> ApiEndpoint for CuponeraUserApi<'a> {
    fn client(&self) -> &DiscountsClient {
        self.client
    }
}

impl<'a> CuponeraUserApi<'a> {
    /// Creates a new cuponera user API instance.
    ///
    /// This method is intended for internal use by the discounts client.
    pub(crate) fn new(client: &'a DiscountsClient) -> Self {
        Self { client }
    }

    /// Retrieves all users enrolled in a cuponera.
    pub async fn list(&self, cuponera_id: &str) -> DiscountsResult<Vec<CuponeraUser>> {
        let endpoint = format!("/cuponeras/{cuponera_id}/users");
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }

    /// Retrieves a specific enrolled user.
    pub async fn get(&self, cuponera_id: &str, user_id: &str) -> DiscountsResult<CuponeraUser> {
        let endpoint = format!("/cuponeras/{cuponera_id}/users/{user_id}");
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }

    /// Enrolls a user in a cuponera.
    ///
    /// # Errors
    ///
    /// Surfaces the service's rejection for invalid contact data or a
    /// redemption code already in use by an active cuponera.
    pub async fn create(
        &self,
        cuponera_id: &str,
        user: &CuponeraUserCreate,
    ) -> DiscountsResult<CuponeraUser> {
        let endpoint = format!("/cuponeras/{cuponera_id}/users");
        self.client.request(Method::POST, &endpoint, Some(user)).await
    }

    /// Applies a partial update to an enrolled user.
    pub async fn update(
        &self,
        cuponera_id: &str,
        user_id: &str,
        changes: &CuponeraUserUpdate,
    ) -> DiscountsResult<CuponeraUser> {
        let endpoint = format!("/cuponeras/{cuponera_id}/users/{user_id}");
        self.client.request(Method::PATCH, &endpoint, Some(changes)).await
    }

    /// Removes a user from a cuponera.
    pub async fn delete(&self, cuponera_id: &str, user_id: &str) -> DiscountsResult<()> {
        let endpoint = format!("/cuponeras/{cuponera_id}/users/{user_id}");
        self.client.request(Method::DELETE, &endpoint, None::<()>).await
    }
}
