//! Not-found view.

use super::{escape_html, ERROR_IMAGE_URL};

/// Render the failure view.
///
/// The "Continue shopping" button has no navigation wired to it.
pub fn render_failure_view() -> String {
    format!(
        r#"<div class="product-details-failure">
    <img src="{image}" alt="error view" class="error-image">
    <h1 class="product-not-found">Product Not Found</h1>
    <button class="continue-shopping-button" type="button" data-action="continue-shopping">
        Continue shopping
    </button>
</div>"#,
        image = escape_html(ERROR_IMAGE_URL)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_view_text() {
        let html = render_failure_view();
        assert!(html.contains("Product Not Found"));
        assert!(html.contains("Continue shopping"));
        assert!(html.contains(r#"alt="error view""#));
        assert!(html.contains("nxt-trendz-error-view-img.png"));
    }
}
