//! Core abstractions for the Nxt Trendz product details page.
//!
//! This crate provides the fundamental types:
//! - `ProductId` - Route-supplied product identifier
//! - `RequestContext` - Typed request parameters and headers
//! - `CredentialStore` - Injected bearer token lookup
//! - `LoadMachine` - Four-state fetch lifecycle with generation tickets
//! - `Quantity` - Unbounded quantity counter

mod context;
mod credentials;
mod error;
mod ids;
mod load;
mod quantity;

pub use context::*;
pub use credentials::*;
pub use error::*;
pub use ids::*;
pub use load::*;
pub use quantity::*;
