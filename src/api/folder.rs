use reqwest::Method;

use super::ApiEndpoint;
use crate::{DiscountsClient, DiscountsResult, Folder, FolderCreate, FolderUpdate};

/// Provides methods for managing folders.
///
/// Folders group discounts and cuponeras for presentation; deleting one can
/// cascade the removal of the grouping to its members.
pub struct FolderApi<'a> {
    client: &'a DiscountsClient,
}

impl<'a> ApiEndpoint for FolderApi<'a> {
    fn client(&self) -> &DiscountsClient {
        self.client
    }
}

impl<'a> FolderApi<'a> {
    /// Creates a new folder API instance.
    ///
    /// This method is intended for internal use by the discounts client.
    pub(crate) fn new(client: &'a DiscountsClient) -> Self {
        Self { client }
    }

    /// Retrieves all folders, in the service's sort order.
    pub async fn list(&self) -> DiscountsResult<Vec<Folder>> {
        self.client.request(Method::GET, "/folders", None::<()>).await
    }

    /// Retrieves a specific folder by ID.
    pub async fn get(&self, folder_id: &str) -> DiscountsResult<Folder> {
        let endpoint = format!("/folders/{folder_id}");
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }

    /// Creates a new folder.
    ///
    /// # Errors
    ///
    /// Surfaces the service's rejection if the name is empty or already
    /// taken.
    pub async fn create(&self, folder: &FolderCreate) -> DiscountsResult<Folder> {
        self.client.request(Method::POST, "/folders", Some(folder)).await
    }

    /// Applies a partial update to a folder.
    pub async fn update(&self, folder_id: &str, changes: &FolderUpdate) -> DiscountsResult<Folder> {
        let endpoint = format!("/folders/{folder_id}");
        self.client.request(Method::PATCH, &endpoint, Some(changes)).await
    }

    /// Deletes a folder, removing the grouping from its member discounts and
    /// cuponeras as well.
    pub async fn delete(&self, folder_id: &str) -> DiscountsResult<()> {
        self.delete_with_cascade(folder_id, true).await
    }

    /// Deletes a folder, choosing whether the removal cascades to members.
    ///
    /// The `cascade` flag is always sent to the service.
    pub async fn delete_with_cascade(
        &self,
        folder_id: &str,
        cascade: bool,
    ) -> DiscountsResult<()> {
        let endpoint = format!("/folders/{folder_id}?cascade={cascade}");
        self.client.request(Method::DELETE, &endpoint, None::<()>).await
    }
}
