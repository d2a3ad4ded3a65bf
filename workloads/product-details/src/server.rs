//! Request handling, independent of the HTTP runtime.

use std::time::Instant;

use trendz_core::{ProductId, RequestContext};
use trendz_data::FetchClient;
use trendz_observability::StructuredLogger;

use crate::config::WorkloadConfig;
use crate::data::ProductDetailsApi;
use crate::page::ProductDetailsPage;
use crate::routes::extract_product_id;
use crate::sections::render_document;
use crate::view::View;

/// Workload name used in logs.
pub const WORKLOAD_NAME: &str = "product-details";

/// Document title when no product is shown.
pub const NOT_FOUND_TITLE: &str = "Product Not Found | Nxt Trendz";

/// Rendered HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PageResponse {
    fn html(status: u16, ctx: &RequestContext, body: String) -> Self {
        Self {
            status,
            headers: vec![
                ("content-type".to_string(), "text/html; charset=utf-8".to_string()),
                ("x-request-id".to_string(), ctx.request_id.to_string()),
            ],
            body,
        }
    }

    /// Look up a header (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Logger for one request, configured from `config`.
pub fn request_logger(ctx: &RequestContext, config: &WorkloadConfig) -> StructuredLogger {
    StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD_NAME)
        .with_route(&ctx.path)
        .with_min_level(config.log_level)
        .with_format(config.log_format)
}

/// Serve the product details page for `ctx`.
///
/// Success and failure views both answer 200; only a path without a product
/// id answers 404.
pub async fn serve(
    ctx: &RequestContext,
    config: &WorkloadConfig,
    client: FetchClient,
    logger: StructuredLogger,
) -> PageResponse {
    let started = Instant::now();

    let product_id = match ctx
        .param("id")
        .and_then(|id| ProductId::parse(id).ok())
        .or_else(|| extract_product_id(&ctx.path))
    {
        Some(id) => id,
        None => {
            logger.warn("No product id in path");
            let body = View::NotFound.render_page();
            return PageResponse::html(404, ctx, render_document(NOT_FOUND_TITLE, &body));
        }
    };

    logger
        .info_builder("Product page request started")
        .field("product_id", product_id.as_str())
        .emit();

    let page = ProductDetailsPage::new(
        ProductDetailsApi::new(client),
        logger.clone(),
        config.resolution_policy,
    )
    .with_credential_key(config.credential_key.clone());

    let cookies = ctx.cookies();
    page.navigate(product_id.clone(), &cookies).await;

    let snapshot = page.snapshot();
    let view = snapshot.view();
    let title = match snapshot.state.data() {
        Some(loaded) => format!("{} | Nxt Trendz", loaded.product.title),
        None => NOT_FOUND_TITLE.to_string(),
    };
    let body = render_document(&title, &view.render_page());

    logger
        .info_builder("Product page request complete")
        .field("product_id", product_id.as_str())
        .field("view", view.name())
        .duration_ms("duration_ms", started.elapsed())
        .emit();

    PageResponse::html(200, ctx, body)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use trendz_data::MockTransport;
    use trendz_observability::{LogLevel, MemorySink};

    use super::*;

    fn setup(mock: &MockTransport, ctx: &RequestContext) -> (WorkloadConfig, FetchClient, StructuredLogger, Arc<MemorySink>) {
        let config = WorkloadConfig::default();
        let client = config.fetch_client(mock.clone());
        let sink = Arc::new(MemorySink::new());
        let logger = request_logger(ctx, &config)
            .with_min_level(LogLevel::Debug)
            .with_sink(sink.clone());
        (config, client, logger, sink)
    }

    #[tokio::test]
    async fn test_serves_product_page_with_cookie_token() {
        let mock = MockTransport::new().with_json(
            "https://apis.ccbp.in/products/12",
            200,
            json!({"id": 12, "title": "Denim Jacket", "brand": "Levis", "price": 1999,
                   "rating": 4.3, "total_reviews": 7, "availability": "In Stock",
                   "image_url": "", "description": "Blue", "similar_products": []}),
        );
        let ctx = RequestContext::new("/products/12?from=home")
            .with_header("Cookie", "theme=dark; jwt_token=abc123");
        let (config, client, logger, sink) = setup(&mock, &ctx);

        let response = serve(&ctx, &config, client, logger).await;

        assert_eq!(response.status, 200);
        assert!(response.body.starts_with("<!DOCTYPE html>"));
        assert!(response.body.contains("Denim Jacket | Nxt Trendz"));
        assert!(response.body.contains("Rs 1999/-"));
        assert_eq!(response.header("X-Request-Id"), Some(ctx.request_id.to_string().as_str()));
        assert_eq!(mock.requests()[0].header_value("authorization"), Some("Bearer abc123"));

        let done = &sink.find("Product page request complete")[0];
        assert_eq!(done.field("view"), Some(&json!("details")));
    }

    #[tokio::test]
    async fn test_failure_view_is_still_200() {
        let mock = MockTransport::new();
        let ctx = RequestContext::new("/product/999");
        let (config, client, logger, _) = setup(&mock, &ctx);

        let response = serve(&ctx, &config, client, logger).await;

        assert_eq!(response.status, 200);
        assert!(response.body.contains("Product Not Found"));
        assert_eq!(mock.requests()[0].header_value("Authorization"), Some("Bearer "));
    }

    #[tokio::test]
    async fn test_missing_id_is_404_without_fetch() {
        let mock = MockTransport::new();
        let ctx = RequestContext::new("/products/");
        let (config, client, logger, _) = setup(&mock, &ctx);

        let response = serve(&ctx, &config, client, logger).await;

        assert_eq!(response.status, 404);
        assert!(response.body.contains("Continue shopping"));
        assert!(response.body.contains(&View::NotFound.render_page()));
        assert!(response.body.contains(NOT_FOUND_TITLE));
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_route_param_takes_precedence() {
        let mock = MockTransport::new();
        let ctx = RequestContext::new("/anything").with_param("id", "42");
        let (config, client, logger, _) = setup(&mock, &ctx);

        serve(&ctx, &config, client, logger).await;

        assert_eq!(mock.requests()[0].url(), "https://apis.ccbp.in/products/42");
    }
}
