//! Catalogue access: the [`DataGateway`] contract and its file-backed implementation.

pub mod backend;
pub mod json;
pub mod models;
pub mod search;

pub use backend::{DataGateway, GatewayResult, StoreHandle};
pub use json::JsonGateway;
pub use models::{CatalogData, CommentRecord, CATALOG_VERSION};
