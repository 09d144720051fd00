use reqwest::Method;

use super::ApiEndpoint;
use crate::{DiscountsClient, DiscountsResult, Site};

/// Provides read access to the restaurant sites known to the service.
///
/// Sites are synchronized into the service from an upstream system and
/// cannot be created or modified through this API.
pub struct SiteApi<'a> {
    client: &'a DiscountsClient,
}

impl<'a> ApiEndpoint for SiteApi<'a> {
    fn client(&self) -> &DiscountsClient {
        self.client
    }
}

impl<'a> SiteApi<'a> {
    /// Creates a new site API instance.
    ///
    /// This method is intended for internal use by the discounts client.
    pub(crate) fn new(client: &'a DiscountsClient) -> Self {
        Self { client }
    }

    /// Retrieves all sites.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or if the service returns an
    /// error response.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &discounts_client::DiscountsClient) -> discounts_client::DiscountsResult<()> {
    /// let sites = client.sites().list().await?;
    /// for site in sites {
    ///     println!("Site {}: {}", site.site_id, site.site_name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self) -> DiscountsResult<Vec<Site>> {
        self.client.request(Method::GET, "/sites", None::<()>).await
    }

    /// Retrieves a specific site by its numeric ID.
    ///
    /// # Errors
    ///
    /// Surfaces the service's not-found error if the site does not exist.
    pub async fn get(&self, site_id: u32) -> DiscountsResult<Site> {
        let endpoint = format!("/sites/{site_id}");
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }
}
