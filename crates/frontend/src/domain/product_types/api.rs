use contracts::domain::products::{ProductType, ProductTypeRequest};
use contracts::shared::envelope::ApiResponse;

use crate::shared::api::ApiClient;

/// The full product-type catalog; small and read often, so cached.
pub async fn fetch_product_types(client: &ApiClient) -> ApiResponse<Vec<ProductType>> {
    client.get("/product-types").await
}

pub async fn create_product_type(client: &ApiClient, name: &str) -> ApiResponse<ProductType> {
    let request = ProductTypeRequest {
        name: name.to_string(),
    };
    client.post("/product-types", &request).await
}

pub async fn update_product_type(
    client: &ApiClient,
    type_id: &str,
    name: &str,
) -> ApiResponse<ProductType> {
    let request = ProductTypeRequest {
        name: name.to_string(),
    };
    client.put(&format!("/product-types/{type_id}"), &request).await
}

pub async fn delete_product_type(
    client: &ApiClient,
    type_id: &str,
) -> ApiResponse<serde_json::Value> {
    client
        .delete(&format!("/product-types/{type_id}"), None)
        .await
}
