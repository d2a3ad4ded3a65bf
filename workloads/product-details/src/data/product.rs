//! Product data models.
//!
//! `ProductRecord` mirrors the catalog API's snake_case payload.
//! `ProductDetails` is the flattened camelCase projection the page renders.

use serde::{Deserialize, Deserializer, Serialize};

/// One product as returned by `GET /products/{id}`.
///
/// Only the id is interpreted; every other field is optional and rendered as
/// received.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "received_text")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "received_text")]
    pub price: String,
    #[serde(default, deserialize_with = "received_text")]
    pub rating: String,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub image_url: String,
}

/// Full response body: the product plus its related items.
///
/// A body without `similar_products` is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: ProductRecord,
    pub similar_products: Vec<ProductRecord>,
}

/// Product fields as shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub availability: String,
    pub brand: String,
    pub description: String,
    pub id: String,
    pub image_url: String,
    pub price: String,
    pub rating: String,
    pub title: String,
    pub total_reviews: u64,
}

/// Related item; same shape as the main product.
pub type SimilarProduct = ProductDetails;

/// Everything the success view needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub product: ProductDetails,
    pub similar_products: Vec<SimilarProduct>,
}

impl From<ProductRecord> for ProductDetails {
    fn from(record: ProductRecord) -> Self {
        Self {
            availability: record.availability,
            brand: record.brand,
            description: record.description,
            id: record.id,
            image_url: record.image_url,
            price: record.price,
            rating: record.rating,
            title: record.title,
            total_reviews: record.total_reviews,
        }
    }
}

impl From<ProductResponse> for ProductPage {
    fn from(response: ProductResponse) -> Self {
        Self {
            product: response.product.into(),
            similar_products: response
                .similar_products
                .into_iter()
                .map(ProductDetails::from)
                .collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

// Ids, prices and ratings arrive as numbers or strings ("3.9", "4.50").
// Strings are kept verbatim; numbers use their JSON form.
fn received_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body() -> serde_json::Value {
        json!({
            "id": 16,
            "image_url": "https://assets.ccbp.in/frontend/react-js/ecommerce/cloths-long-fork.png",
            "title": "Embroidered Net Gown",
            "price": 62990,
            "description": "An emerald green net gown.",
            "brand": "Manyavar",
            "total_reviews": 879,
            "rating": 3.6,
            "availability": "In Stock",
            "similar_products": [
                {
                    "id": 2,
                    "image_url": "https://assets.ccbp.in/frontend/react-js/ecommerce/cloths-jacket.png",
                    "title": "Slim Fit Jacket",
                    "style": "Black",
                    "price": 2599,
                    "description": "A slim fit jacket.",
                    "brand": "ZARA",
                    "total_reviews": 42,
                    "rating": "4.1",
                    "availability": "Out of Stock"
                },
                {
                    "id": 7,
                    "image_url": "https://assets.ccbp.in/frontend/react-js/ecommerce/cloths-shirt.png",
                    "title": "Printed Shirt",
                    "price": 999,
                    "description": "Cotton shirt.",
                    "brand": "Levis",
                    "total_reviews": 12,
                    "rating": 4,
                    "availability": "In Stock"
                }
            ]
        })
    }

    #[test]
    fn test_projection_renames_fields() {
        let response: ProductResponse = serde_json::from_value(sample_body()).unwrap();
        let page = ProductPage::from(response);

        assert_eq!(page.product.id, "16");
        assert_eq!(page.product.title, "Embroidered Net Gown");
        assert_eq!(page.product.total_reviews, 879);
        assert_eq!(
            page.product.image_url,
            "https://assets.ccbp.in/frontend/react-js/ecommerce/cloths-long-fork.png"
        );
        assert_eq!(page.product.price, "62990");
        assert_eq!(page.product.rating, "3.6");
    }

    #[test]
    fn test_similar_products_keep_response_order() {
        let response: ProductResponse = serde_json::from_value(sample_body()).unwrap();
        let page = ProductPage::from(response);

        let ids: Vec<&str> = page.similar_products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "7"]);
        assert_eq!(page.similar_products[0].rating, "4.1");
        assert_eq!(page.similar_products[1].rating, "4");
        assert_eq!(page.similar_products[0].availability, "Out of Stock");
    }

    #[test]
    fn test_missing_similar_products_is_rejected() {
        let body = json!({"id": "abc", "title": "Lone Product", "price": 10, "rating": 5});
        assert!(serde_json::from_value::<ProductResponse>(body).is_err());
    }

    #[test]
    fn test_empty_similar_products_is_accepted() {
        let body = json!({"id": "abc", "title": "Lone Product", "similar_products": []});
        let page = ProductPage::from(serde_json::from_value::<ProductResponse>(body).unwrap());
        assert_eq!(page.product.id, "abc");
        assert!(page.similar_products.is_empty());
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let body = json!({"id": 1, "price": 10, "rating": 4, "similar_products": []});
        let page = ProductPage::from(serde_json::from_value::<ProductResponse>(body).unwrap());
        assert_eq!(page.product.title, "");
        assert_eq!(page.product.brand, "");
        assert_eq!(page.product.price, "10");
    }

    #[test]
    fn test_rating_text_is_kept_as_received() {
        let body = json!({"id": 1, "title": "x", "price": "1,299", "rating": "4.50",
                          "similar_products": [{"id": 2, "rating": "great"}]});
        let page = ProductPage::from(serde_json::from_value::<ProductResponse>(body).unwrap());
        assert_eq!(page.product.rating, "4.50");
        assert_eq!(page.product.price, "1,299");
        assert_eq!(page.similar_products[0].rating, "great");
    }

    #[test]
    fn test_details_serialize_camel_case() {
        let response: ProductResponse = serde_json::from_value(sample_body()).unwrap();
        let page = ProductPage::from(response);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["product"]["totalReviews"], 879);
        assert!(json["product"]["imageUrl"].is_string());
        assert!(json["product"].get("total_reviews").is_none());
        assert_eq!(json["similarProducts"].as_array().map(Vec::len), Some(2));
    }
}
