use reqwest::Method;
use serde_json::Value;

use super::{query_string, ApiEndpoint};
use crate::{DiscountsClient, DiscountsResult, MenuCategory, ProductPage, ProductQuery};

/// Provides read access to per-site menus and the product catalog.
pub struct MenuApi<'a> {
    client: &'a DiscountsClient,
}

impl<'a> ApiEndpoint for MenuApi<'a> {
    fn client(&self) -> &DiscountsClient {
        self.client
    }
}

impl<'a> MenuApi<'a> {
    /// Creates a new menu API instance.
    ///
    /// This method is intended for internal use by the discounts client.
    pub(crate) fn new(client: &'a DiscountsClient) -> Self {
        Self { client }
    }

    /// Retrieves the full menu document for a site.
    ///
    /// The menu is the raw document synchronized from the point-of-sale
    /// system; its shape is owned by that system, so it is returned untyped.
    ///
    /// # Errors
    ///
    /// Surfaces the service's not-found error if the site has no menu.
    pub async fn get_by_site(&self, site_id: u32) -> DiscountsResult<Value> {
        let endpoint = format!("/menus/site/{site_id}");
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }

    /// Lists the menu categories across the given sites.
    ///
    /// An empty `site_ids` slice means all permitted sites; the parameter is
    /// then omitted from the request entirely.
    pub async fn categories(&self, site_ids: &[u32]) -> DiscountsResult<Vec<MenuCategory>> {
        let mut params = Vec::new();
        if !site_ids.is_empty() {
            let joined = site_ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(",");
            params.push(("site_ids", joined));
        }
        let endpoint = format!("/menus/categories{}", query_string(&params));
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }

    /// Searches products with optional filtering and pagination.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &discounts_client::DiscountsClient) -> discounts_client::DiscountsResult<()> {
    /// use discounts_client::ProductQuery;
    ///
    /// let page = client
    ///     .menus()
    ///     .products(&ProductQuery {
    ///         site_ids: vec![1, 2],
    ///         q: "soda".into(),
    ///         limit: Some(10),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// println!("{} of {} products", page.items.len(), page.total);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn products(&self, query: &ProductQuery) -> DiscountsResult<ProductPage> {
        let endpoint = format!("/menus/products{}", query_string(&query.to_query()));
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }
}
