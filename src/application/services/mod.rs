//! Application services

pub mod catalog;
pub mod store;

pub use catalog::{parse_catalog, CatalogLoader, LoadReport, RejectedRow};
pub use store::StoreService;
