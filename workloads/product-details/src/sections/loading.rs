//! Loading indicator.

/// Render the view shown while the product request is outstanding.
pub fn render_loading_view() -> String {
    r##"<div class="products-details-loader-container" data-testid="loader">
    <div class="loader-three-dots" role="status" aria-label="Loading" style="color: #0b69ff">
        <span></span><span></span><span></span>
    </div>
</div>"##
        .to_string()
}
