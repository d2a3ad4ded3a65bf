//! Product details view.

use trendz_core::Quantity;

use super::{escape_html, render_similar_products, STAR_IMAGE_URL};
use crate::data::{ProductDetails, ProductPage};

/// Render the success view: the main product followed by similar products.
pub fn render_product_details_view(page: &ProductPage, quantity: Quantity) -> String {
    format!(
        r#"<div class="product-details-view">
{details}
{similar}
</div>"#,
        details = render_product_details(&page.product, quantity),
        similar = render_similar_products(&page.similar_products),
    )
}

/// Render the main product block with the quantity selector.
pub fn render_product_details(product: &ProductDetails, quantity: Quantity) -> String {
    format!(
        r#"<div class="product-details-container">
    <img src="{image}" alt="{title}" class="product-image">
    <div class="product-info">
        <h1 class="product-title">{title}</h1>
        <p class="product-price">Rs {price}/-</p>
        <div class="rating-reviews">
            <div class="rating-section">
                <p class="rating">{rating}</p>
                <img src="{star}" alt="star" class="star-image">
            </div>
            <span class="reviews">{reviews} Reviews</span>
        </div>
        <p class="product-description">{description}</p>
        <p class="availability">Available: <span class="available">{availability}</span></p>
        <p class="brand">Brand: <span class="brand-name">{brand}</span></p>
        <hr class="horizontal-line">
        <div class="buttons-section">
            <button type="button" class="buttons" data-action="increment" aria-label="Increase quantity">+</button>
            <p class="count" data-testid="quantity">{quantity}</p>
            <button type="button" class="buttons" data-action="decrement" aria-label="Decrease quantity">-</button>
        </div>
        <button type="button" class="add-to-cart-button" data-action="add-to-cart">ADD TO CART</button>
    </div>
</div>"#,
        image = escape_html(&product.image_url),
        title = escape_html(&product.title),
        price = escape_html(&product.price),
        rating = escape_html(&product.rating),
        star = escape_html(STAR_IMAGE_URL),
        reviews = product.total_reviews,
        description = escape_html(&product.description),
        availability = escape_html(&product.availability),
        brand = escape_html(&product.brand),
        quantity = quantity.value(),
    )
}
