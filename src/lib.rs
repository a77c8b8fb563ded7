pub mod catalog;
pub mod config;
pub mod engine;
pub mod network;

pub use config::ServiceConfig;
pub use engine::{CatalogEngine, CatalogSnapshot};
pub use network::{FetchService, Fetched, RequestFailure, Route};
