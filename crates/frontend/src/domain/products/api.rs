use contracts::domain::products::{CreateProductRequest, ProductModel, UpdateProductRequest};
use contracts::shared::envelope::ApiResponse;

use crate::shared::api::ApiClient;

/// Paginated product list. Served from cache within the TTL.
pub async fn fetch_products(
    client: &ApiClient,
    page: u32,
    limit: u32,
) -> ApiResponse<Vec<ProductModel>> {
    client
        .get(&format!("/products?page={page}&limit={limit}"))
        .await
}

pub async fn fetch_product(client: &ApiClient, product_id: &str) -> ApiResponse<ProductModel> {
    client.get(&format!("/products/{product_id}")).await
}

/// One-shot create from the finished draft; drops every cached `/products`
/// read.
pub async fn create_product(
    client: &ApiClient,
    request: &CreateProductRequest,
) -> ApiResponse<ProductModel> {
    client.post("/products", request).await
}

pub async fn update_product(
    client: &ApiClient,
    product_id: &str,
    request: &UpdateProductRequest,
) -> ApiResponse<ProductModel> {
    client.put(&format!("/products/{product_id}"), request).await
}

pub async fn delete_product(
    client: &ApiClient,
    product_id: &str,
) -> ApiResponse<serde_json::Value> {
    client.delete(&format!("/products/{product_id}"), None).await
}
