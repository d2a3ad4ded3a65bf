//! Catalog API client.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use trendz_core::{BearerToken, ProductId};
use trendz_data::{FetchClient, FetchError};

use super::product::{ProductPage, ProductResponse};

/// Production catalog API.
pub const API_BASE: &str = "https://apis.ccbp.in";

/// Characters escaped in the id path segment: everything but unreserved.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `/products/{id}` with the id encoded as a single path segment.
pub fn product_path(product_id: &ProductId) -> String {
    format!(
        "/products/{}",
        utf8_percent_encode(product_id.as_str(), PATH_SEGMENT)
    )
}

/// Fetches product pages from the catalog API.
#[derive(Debug, Clone)]
pub struct ProductDetailsApi {
    client: FetchClient,
}

impl ProductDetailsApi {
    /// Wrap a client. Its base URL should point at the catalog API.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// `GET /products/{id}` with the bearer token.
    ///
    /// Any non-2xx status, transport failure or malformed body is an error.
    /// Nothing is retried.
    pub async fn fetch_product(
        &self,
        product_id: &ProductId,
        token: &BearerToken,
    ) -> Result<ProductPage, FetchError> {
        let response = self
            .client
            .get(product_path(product_id))
            .bearer_auth(token.expose())
            .send()
            .await?
            .error_for_status()?;

        let body: ProductResponse = response.json()?;
        Ok(body.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use trendz_data::MockTransport;

    fn api(mock: &MockTransport) -> ProductDetailsApi {
        ProductDetailsApi::new(FetchClient::with_transport(mock.clone()).with_base_url(API_BASE))
    }

    #[tokio::test]
    async fn test_fetch_product_success() {
        let mock = MockTransport::new().with_json(
            "https://apis.ccbp.in/products/3",
            200,
            json!({
                "id": 3, "title": "Sneakers", "brand": "Nike", "price": 4999,
                "rating": 4.5, "total_reviews": 42, "availability": "In Stock",
                "image_url": "https://example.com/s.png", "description": "Shoes",
                "similar_products": []
            }),
        );

        let page = api(&mock)
            .fetch_product(&ProductId::new("3"), &BearerToken::new("jwt"))
            .await
            .unwrap();

        assert_eq!(page.product.title, "Sneakers");
        assert_eq!(page.product.total_reviews, 42);
        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header_value("Authorization"), Some("Bearer jwt"));
    }

    #[test]
    fn test_product_path_encodes_id_as_one_segment() {
        assert_eq!(product_path(&ProductId::new("16")), "/products/16");
        assert_eq!(product_path(&ProductId::new("sku-1_a.b~c")), "/products/sku-1_a.b~c");
        assert_eq!(product_path(&ProductId::new("16?x=1")), "/products/16%3Fx%3D1");
        assert_eq!(product_path(&ProductId::new("../admin")), "/products/..%2Fadmin");
        assert_eq!(product_path(&ProductId::new("a#b c")), "/products/a%23b%20c");
    }

    #[tokio::test]
    async fn test_fetch_product_keeps_id_inside_path() {
        let mock = MockTransport::new();

        let _ = api(&mock)
            .fetch_product(&ProductId::new("16?x=1"), &BearerToken::new("jwt"))
            .await;

        assert_eq!(mock.requests()[0].url(), "https://apis.ccbp.in/products/16%3Fx%3D1");
    }

    #[tokio::test]
    async fn test_fetch_product_not_found() {
        let mock = MockTransport::new().with_json(
            "https://apis.ccbp.in/products/999",
            404,
            json!({"status_code": 404, "error_msg": "Product Not Found"}),
        );

        let err = api(&mock)
            .fetch_product(&ProductId::new("999"), &BearerToken::new("jwt"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_fetch_product_malformed_body() {
        let mock = MockTransport::new().with_response(
            "https://apis.ccbp.in/products/5",
            trendz_data::Response::new(200, Default::default(), b"{not json".to_vec()),
        );

        let err = api(&mock)
            .fetch_product(&ProductId::new("5"), &BearerToken::missing())
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::ParseError(_)));
    }
}
