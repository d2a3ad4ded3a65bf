//! Route matching.

use trendz_core::ProductId;

/// Path prefixes that carry a product id.
pub const PRODUCT_ROUTES: [&str; 2] = ["/products/", "/product/"];

/// Extract the product id from `/products/{id}` or `/product/{id}`.
///
/// Query strings, fragments and trailing segments are ignored. Returns `None`
/// for other paths or an empty id.
pub fn extract_product_id(path: &str) -> Option<ProductId> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    PRODUCT_ROUTES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .and_then(|rest| rest.split('/').next())
        .and_then(|id| ProductId::parse(id).ok())
}
