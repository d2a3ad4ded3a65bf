//! Load a product and print its page.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use console::style;
use dialoguer::Password;
use product_details::sections::render_document;
use product_details::{
    PageSnapshot, ProductDetailsApi, ProductDetailsPage, View, WorkloadConfig, NOT_FOUND_TITLE,
};
use serde_json::json;
use trendz_core::{ApiStatus, CookieJar, CredentialStore, ProductId, RequestId, StaticCredentials};
use trendz_data::{FetchClient, ReqwestTransport};
use trendz_observability::{LogLevel, StructuredLogger, TracingSink};

use super::{ShowArgs, ShowFormat};
use crate::context::Context;
use crate::output::status_badge;

/// Run the show command. Returns whether the details view was reached.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<bool> {
    let product_id = ProductId::parse(&args.id)?;
    let page_config = &ctx.config.page;

    let credentials = resolve_credentials(args.token.as_deref(), ctx)?;

    let min_level = if ctx.output.is_verbose() {
        LogLevel::Debug
    } else {
        page_config.log_level
    };
    let logger = StructuredLogger::new(RequestId::generate())
        .with_workload("trendz-cli")
        .with_route(format!("/products/{}", product_id))
        .with_min_level(min_level)
        .with_format(page_config.log_format)
        .with_sink(Arc::new(TracingSink));

    let client = page_config.fetch_client(ReqwestTransport::new());

    let spinner = ctx
        .output
        .spinner(&format!("Loading product {}...", product_id));
    let page = load_page(page_config, client, logger, product_id, credentials.as_ref()).await;
    spinner.finish_and_clear();

    for _ in 0..args.increment {
        page.increment();
    }
    for _ in 0..args.decrement {
        page.decrement();
    }

    let snapshot = page.snapshot();
    ctx.output.debug(&format!("Status: {}", status_badge(snapshot.status())));

    let format = if ctx.output.is_json() {
        ShowFormat::Json
    } else {
        args.format
    };
    match format {
        ShowFormat::Json => ctx.output.json(&snapshot_json(&snapshot)),
        ShowFormat::Html => println!("{}", render_html(&snapshot)),
        ShowFormat::Text => println!("{}", render_text(&snapshot)),
    }

    Ok(snapshot.status() == ApiStatus::Success)
}

/// Build a page over `client` and navigate it to `product_id`.
pub async fn load_page(
    config: &WorkloadConfig,
    client: FetchClient,
    logger: StructuredLogger,
    product_id: ProductId,
    credentials: &dyn CredentialStore,
) -> ProductDetailsPage {
    let page = ProductDetailsPage::new(ProductDetailsApi::new(client), logger, config.resolution_policy)
        .with_credential_key(config.credential_key.clone());
    page.navigate(product_id, credentials).await;
    page
}

/// Token sources in precedence order: flag or env, cookie file, prompt.
fn resolve_credentials(flag: Option<&str>, ctx: &Context) -> Result<Box<dyn CredentialStore>> {
    let key = ctx.config.page.credential_key.as_str();

    if let Some(token) = flag {
        ctx.output.debug("Using token from --token / TRENDZ_JWT_TOKEN");
        return Ok(Box::new(StaticCredentials::new().with(key, token)));
    }

    if let Some(ref cookie_file) = ctx.config.cli.cookie_file {
        let path = ctx.resolve_path(cookie_file);
        ctx.output
            .debug(&format!("Reading cookies from {}", path.display()));
        return Ok(Box::new(read_cookie_file(&path)?));
    }

    if ctx.config.cli.prompt_for_token && !ctx.output.is_json() && console::user_attended() {
        let token = Password::new()
            .with_prompt("JWT token")
            .allow_empty_password(true)
            .interact()?;
        return Ok(Box::new(StaticCredentials::new().with(key, token)));
    }

    ctx.output
        .warn("No token configured; the request will be sent with an empty bearer token");
    Ok(Box::new(StaticCredentials::new()))
}

/// Parse a file holding `Cookie`-style pairs, one or more per line.
pub fn read_cookie_file(path: &Path) -> Result<CookieJar> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cookie file: {}", path.display()))?;
    let header = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("; ");
    Ok(CookieJar::parse(&header))
}

/// Page state as JSON.
pub fn snapshot_json(snapshot: &PageSnapshot) -> serde_json::Value {
    json!({
        "status": snapshot.status(),
        "view": snapshot.view().name(),
        "quantity": snapshot.quantity,
        "page": snapshot.state.data(),
    })
}

/// Full HTML document for the current view.
pub fn render_html(snapshot: &PageSnapshot) -> String {
    let title = match snapshot.state.data() {
        Some(loaded) => format!("{} | Nxt Trendz", loaded.product.title),
        None => NOT_FOUND_TITLE.to_string(),
    };
    render_document(&title, &snapshot.view().render_page())
}

/// Terminal rendering of the current view.
pub fn render_text(snapshot: &PageSnapshot) -> String {
    match snapshot.view() {
        View::Empty => String::new(),
        View::Loading => "Loading...".to_string(),
        View::NotFound => format!(
            "{}\n[Continue shopping]",
            style("Product Not Found").red().bold()
        ),
        View::Details { page, quantity } => {
            let product = &page.product;
            let mut lines = vec![
                style(&product.title).bold().to_string(),
                format!("Rs {}/-", product.price),
                format!("{} ★  {} Reviews", product.rating, product.total_reviews),
                product.description.clone(),
                format!("Available: {}", product.availability),
                format!("Brand: {}", product.brand),
                format!("Quantity: [-] {} [+]", quantity.value()),
                "[ADD TO CART]".to_string(),
            ];

            lines.push(String::new());
            lines.push(style("Similar Products").bold().to_string());
            for similar in &page.similar_products {
                lines.push(format!(
                    "  • {} by {}  Rs {}/-  {} ★",
                    similar.title, similar.brand, similar.price, similar.rating
                ));
            }
            lines.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use trendz_core::{BearerToken, Quantity};
    use trendz_data::MockTransport;
    use trendz_observability::MemorySink;

    use super::*;

    fn product_body() -> serde_json::Value {
        json!({
            "id": 9, "title": "Leather Wallet", "brand": "Hidesign", "price": 1499,
            "rating": 4.4, "total_reviews": 31, "availability": "In Stock",
            "image_url": "", "description": "Bifold",
            "similar_products": [
                {"id": 10, "title": "Card Holder", "brand": "Hidesign", "price": 799,
                 "rating": 4.0, "total_reviews": 2, "availability": "In Stock",
                 "image_url": "", "description": ""}
            ]
        })
    }

    async fn loaded(mock: MockTransport, credentials: &dyn CredentialStore) -> ProductDetailsPage {
        let config = WorkloadConfig::default();
        let client = config.fetch_client(mock);
        let logger = StructuredLogger::new(RequestId::from_string("cli-test"))
            .with_sink(Arc::new(MemorySink::new()));
        load_page(&config, client, logger, ProductId::new("9"), credentials).await
    }

    #[tokio::test]
    async fn test_text_view_for_loaded_product() {
        console::set_colors_enabled(false);
        let mock = MockTransport::new().with_json("https://apis.ccbp.in/products/9", 200, product_body());
        let page = loaded(mock.clone(), &StaticCredentials::jwt("tok")).await;
        page.increment();
        page.increment();

        let text = render_text(&page.snapshot());
        assert!(text.contains("Leather Wallet"));
        assert!(text.contains("Rs 1499/-"));
        assert!(text.contains("31 Reviews"));
        assert!(text.contains("Quantity: [-] 3 [+]"));
        assert!(text.contains("Card Holder by Hidesign"));
        assert_eq!(mock.requests()[0].header_value("Authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_json_view_for_failure() {
        let page = loaded(MockTransport::new(), &StaticCredentials::new()).await;

        let value = snapshot_json(&page.snapshot());
        assert_eq!(value["status"], "FAILURE");
        assert_eq!(value["view"], "not_found");
        assert_eq!(value["quantity"], 1);
        assert!(value["page"].is_null());
    }

    #[tokio::test]
    async fn test_json_view_uses_camel_case_projection() {
        let mock = MockTransport::new().with_json("https://apis.ccbp.in/products/9", 200, product_body());
        let page = loaded(mock, &StaticCredentials::jwt("tok")).await;

        let value = snapshot_json(&page.snapshot());
        assert_eq!(value["page"]["product"]["totalReviews"], 31);
        assert_eq!(value["page"]["similarProducts"][0]["title"], "Card Holder");
    }

    #[test]
    fn test_html_document_for_snapshot() {
        let snapshot = PageSnapshot {
            state: trendz_core::LoadState::Failure,
            quantity: Quantity::new(),
        };
        let html = render_html(&snapshot);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Product Not Found | Nxt Trendz"));
    }

    #[test]
    fn test_cookie_file_lines_are_joined() {
        let path = std::env::temp_dir().join(format!("trendz-cookies-{}.txt", std::process::id()));
        std::fs::write(&path, "# saved session\ntheme=dark\njwt_token=abc; lang=en\n").unwrap();

        let jar = read_cookie_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(jar.bearer_token("jwt_token"), BearerToken::new("abc"));
        assert_eq!(jar.len(), 3);
    }
}
