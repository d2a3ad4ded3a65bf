//! Data models and the catalog API client.

mod api;
mod product;

pub use api::*;
pub use product::*;
