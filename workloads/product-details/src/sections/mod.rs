//! Section renderers for the product details page.

mod details;
mod failure;
mod header;
mod html;
mod loading;
mod shell;
mod similar;

pub use details::*;
pub use failure::*;
pub use header::*;
pub use html::escape_html;
pub use loading::*;
pub use shell::*;
pub use similar::*;

/// Star icon shown next to ratings.
pub const STAR_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/star-img.png";

/// Illustration for the not-found view.
pub const ERROR_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/nxt-trendz-error-view-img.png";
