//! Data models for the discounts API.
//!
//! This module contains the wire-format contracts exchanged with the remote
//! service, one submodule per endpoint group.

// Export submodules
pub mod api_error;
pub mod cuponera;
pub mod cuponera_user;
pub mod discount;
pub mod folder;
pub mod menu;
pub mod redeem;
pub mod site;
