//! Document shell for server-rendered responses.

use super::escape_html;

/// Wrap page markup in a complete HTML document.
pub fn render_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape_html(title),
        styles = PAGE_STYLES,
        body = body
    )
}

/// CSS for the product details page.
pub const PAGE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: 'Roboto', sans-serif; margin: 0; background: #ffffff; color: #171f46; }
.nav-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; border-bottom: 1px solid #e2e8f0; }
.nav-logo { font-weight: 700; color: #0967d2; text-decoration: none; }
.nav-menu { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
.nav-menu a { color: #475569; text-decoration: none; }
.product-item-container { max-width: 1110px; margin: 0 auto; padding: 2rem; }
.products-details-loader-container { display: flex; justify-content: center; padding: 4rem 0; }
.loader-three-dots span { display: inline-block; width: 10px; height: 10px; margin: 0 4px; border-radius: 50%; background: currentColor; }
.product-details-container { display: flex; gap: 3rem; }
.product-image { width: 45%; border-radius: 16px; }
.product-title { font-size: 2rem; margin: 0; }
.product-price { font-size: 1.5rem; font-weight: 700; }
.rating-reviews { display: flex; align-items: center; gap: 1rem; }
.rating-section { display: flex; align-items: center; gap: 0.25rem; background: #3b82f6; color: #fff; padding: 0.25rem 0.75rem; border-radius: 6px; }
.rating { margin: 0; }
.star-image { width: 16px; height: 16px; }
.product-description { color: #616e7c; line-height: 1.6; }
.horizontal-line { border: none; border-top: 1px solid #cbd2d9; }
.buttons-section { display: flex; align-items: center; gap: 1rem; }
.buttons { background: none; border: 1px solid #616e7c; border-radius: 4px; width: 32px; height: 32px; cursor: pointer; }
.add-to-cart-button { background: #3b82f6; color: #fff; border: none; padding: 0.75rem 1.5rem; border-radius: 8px; cursor: pointer; margin-top: 1rem; }
.similar-products-list { display: flex; flex-wrap: wrap; gap: 1.5rem; list-style: none; padding: 0; }
.similar-product-item { width: 30%; }
.similar-product-image { width: 100%; border-radius: 8px; }
.product-details-failure { display: flex; flex-direction: column; align-items: center; padding: 2rem 0; }
.error-image { width: 60%; max-width: 500px; }
.continue-shopping-button { background: #3b82f6; color: #fff; border: none; padding: 0.75rem 1.5rem; border-radius: 8px; cursor: pointer; }
"#;
