//! Similar products list.

use super::escape_html;
use crate::data::SimilarProduct;

/// Render the "Similar Products" section: one list item per entry, in order.
pub fn render_similar_products(products: &[SimilarProduct]) -> String {
    let items: String = products.iter().map(render_similar_product_item).collect();

    format!(
        r#"<div class="similar-products-section">
    <h2 class="similar-products-heading">Similar Products</h2>
    <ul class="similar-products-list">{items}</ul>
</div>"#,
        items = items
    )
}

/// Render one similar product summary, keyed by its id.
pub fn render_similar_product_item(product: &SimilarProduct) -> String {
    format!(
        r#"
        <li class="similar-product-item" data-key="{id}">
            <img src="{image}" alt="similar product {title}" class="similar-product-image">
            <p class="similar-product-title">{title}</p>
            <p class="similar-products-brand">by {brand}</p>
            <div class="similar-product-price-rating">
                <p class="similar-product-price">Rs {price}/-</p>
                <div class="similar-product-rating">
                    <p class="rating">{rating}</p>
                </div>
            </div>
        </li>"#,
        id = escape_html(&product.id),
        image = escape_html(&product.image_url),
        title = escape_html(&product.title),
        brand = escape_html(&product.brand),
        price = escape_html(&product.price),
        rating = escape_html(&product.rating),
    )
}
