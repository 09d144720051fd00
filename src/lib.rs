//! # discounts-client
//!
//! A Rust client library for the discounts/cuponera management API.
//!
//! This crate provides a type-safe, async interface for the remote discount
//! and coupon-book service: sites, menus, folders, discounts, cuponeras,
//! their enrolled users, and redemption lookups.
//!
//! All requests flow through a single dispatcher that normalizes service
//! errors into [`DiscountsError::ApiError`] with the service's own `detail`
//! message; the per-resource API objects only assemble paths, query strings,
//! and bodies.
//!
//! ## Example
//!
//! ```rust,no_run
//! use discounts_client::{DiscountsClient, FolderCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DiscountsClient::builder()
//!         .base_url("https://discounts.example.com")
//!         .build()?;
//!
//!     // List the sites the service knows about.
//!     for site in client.sites().list().await? {
//!         println!("Site {}: {}", site.site_id, site.site_name);
//!     }
//!
//!     // Group upcoming promos in a folder.
//!     let folder = client
//!         .folders()
//!         .create(&FolderCreate {
//!             name: "Promos Febrero".into(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     // Check a redemption code without consuming a use.
//!     let redemption = client.redeem().lookup("ABC123", None, false).await?;
//!     println!("{}: {}", folder.name, redemption.message);
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod models;

pub use api::cuponera::CuponeraApi;
pub use api::cuponera_user::CuponeraUserApi;
pub use api::discount::DiscountApi;
pub use api::folder::FolderApi;
pub use api::menu::MenuApi;
pub use api::redeem::RedeemApi;
pub use api::site::SiteApi;
pub use client::{DiscountsClient, DiscountsClientBuilder};
pub use error::{DiscountsError, DiscountsResult};
pub use models::api_error::ErrorBody;
pub use models::cuponera::{Cuponera, CuponeraCreate, CuponeraUpdate};
pub use models::cuponera_user::{CuponeraUser, CuponeraUserCreate, CuponeraUserUpdate};
pub use models::discount::{
    DiscountRule, DiscountRuleCreate, DiscountRuleUpdate, Scope, ScopeType,
};
pub use models::folder::{Folder, FolderCreate, FolderUpdate};
pub use models::menu::{MenuCategory, Product, ProductPage, ProductQuery};
pub use models::redeem::{RedeemDiscountItem, RedeemResponse, RedeemUserInfo};
pub use models::site::Site;
