//! View selection.
//!
//! Which view renders is a pure function of the load state. Only the
//! success branch can see product data.

use trendz_core::{ApiStatus, LoadState, Quantity};

use crate::data::ProductPage;
use crate::sections::{
    render_failure_view, render_header, render_loading_view, render_product_details_view,
};

/// One of the four render branches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// Nothing requested yet; renders nothing.
    Empty,
    /// Loading indicator.
    Loading,
    /// Product and similar products.
    Details {
        page: &'a ProductPage,
        quantity: Quantity,
    },
    /// "Product Not Found" with a continue-shopping action.
    NotFound,
}

impl<'a> View<'a> {
    /// Pick the view for `state`.
    pub fn select(state: &'a LoadState<ProductPage>, quantity: Quantity) -> Self {
        match state {
            LoadState::Initial => Self::Empty,
            LoadState::Pending => Self::Loading,
            LoadState::Success(page) => Self::Details { page, quantity },
            LoadState::Failure => Self::NotFound,
        }
    }

    /// Short name for logs and CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Details { .. } => "details",
            Self::NotFound => "not_found",
        }
    }

    /// Status this view corresponds to.
    pub fn status(&self) -> ApiStatus {
        match self {
            Self::Empty => ApiStatus::Initial,
            Self::Loading => ApiStatus::Pending,
            Self::Details { .. } => ApiStatus::Success,
            Self::NotFound => ApiStatus::Failure,
        }
    }

    /// Render the view's markup.
    pub fn render(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Loading => render_loading_view(),
            Self::Details { page, quantity } => render_product_details_view(page, *quantity),
            Self::NotFound => render_failure_view(),
        }
    }

    /// Render the view inside the header and page container.
    pub fn render_page(&self) -> String {
        format!(
            r#"{header}
<div class="product-item-container">{view}</div>"#,
            header = render_header(),
            view = self.render()
        )
    }
}
