//! Site header.

/// Render the storefront header shown above every view.
pub fn render_header() -> String {
    r#"<nav class="nav-header">
    <a href="/" class="nav-logo">Nxt Trendz</a>
    <ul class="nav-menu">
        <li><a href="/">Home</a></li>
        <li><a href="/products">Products</a></li>
        <li><a href="/cart">Cart</a></li>
    </ul>
</nav>"#
        .to_string()
}
