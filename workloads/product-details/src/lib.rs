//! Nxt Trendz product details page.
//!
//! One page: fetch a product and its similar products by id with a bearer
//! token, then render loading, details or not-found views. The quantity
//! selector is local state.
//!
//! The page logic is target-independent. On `wasm32` the crate also exports
//! a Spin HTTP component serving `/products/{id}`.

pub mod config;
pub mod data;
pub mod page;
pub mod routes;
pub mod sections;
pub mod server;
pub mod view;

pub use config::WorkloadConfig;
pub use data::{ProductDetails, ProductDetailsApi, ProductPage, SimilarProduct, API_BASE};
pub use page::{PageSnapshot, ProductDetailsPage};
pub use routes::extract_product_id;
pub use server::{request_logger, serve, PageResponse, NOT_FOUND_TITLE, WORKLOAD_NAME};
pub use view::View;

#[cfg(target_arch = "wasm32")]
mod component {
    use spin_sdk::http::{IntoResponse, Request, Response};
    use spin_sdk::http_component;

    use trendz_core::RequestContext;
    use trendz_data::SpinTransport;
    use trendz_observability::LogLevel;

    use crate::config::WorkloadConfig;
    use crate::server::{request_logger, serve};

    fn load_config() -> WorkloadConfig {
        let mut config = WorkloadConfig::default();
        if let Ok(api_base) = spin_sdk::variables::get("api_base") {
            config.api_base = api_base;
        }
        if let Ok(level) = spin_sdk::variables::get("log_level") {
            if let Ok(level) = level.parse::<LogLevel>() {
                config.log_level = level;
            }
        }
        config
    }

    #[http_component]
    async fn handle_product_details(req: Request) -> anyhow::Result<impl IntoResponse> {
        let mut ctx = RequestContext::new(req.path());
        for (name, value) in req.headers() {
            if let Some(value) = value.as_str() {
                ctx.headers.insert(name.to_string(), value.to_string());
            }
        }

        let config = load_config();
        let client = config.fetch_client(SpinTransport::new());
        let logger = request_logger(&ctx, &config);

        let page = serve(&ctx, &config, client, logger).await;

        let mut builder = Response::builder();
        builder.status(page.status);
        for (name, value) in &page.headers {
            builder.header(name.as_str(), value.as_str());
        }
        Ok(builder.body(page.body).build())
    }
}
