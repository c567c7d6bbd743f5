pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod route;
pub mod slug;

pub use catalog::{Catalog, get_route_detail_by_slug, route_catalog};
pub use error::{CatalogError, Result};
pub use route::{RouteDetail, RouteFaq, VehicleOption};
