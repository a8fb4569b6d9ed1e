use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::localized::LocalizedText;

/// Product names grouped per language. A product may carry several
/// alternative names in each language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductNames {
    #[serde(default)]
    pub uk: Vec<String>,
    #[serde(default)]
    pub en: Vec<String>,
}

/// Image reference as submitted with a create request. The first slot of
/// the draft becomes the main image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductImage {
    pub image_url: String,
    pub is_main: bool,
}

/// Body of `POST /products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_type_id: String,
    pub product_names: ProductNames,
    pub images: Vec<NewProductImage>,
    pub html_content: LocalizedText,
}

/// Body of `PUT /products/{id}`; only the provided parts change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_names: Option<ProductNames>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<LocalizedText>,
}

/// Stored image as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: String,
    pub image_url: String,
    pub is_main: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_id: String,
}

/// Short product-type reference embedded in product responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeRef {
    pub id: String,
    pub name: String,
}

/// Product as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductModel {
    pub id: String,
    pub name: String,
    pub product_names: ProductNames,
    pub html_content: LocalizedText,
    pub images: Vec<ProductImage>,
    pub product_type_id: String,
    pub product_type: ProductTypeRef,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Product-type catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /product-types` and `PUT /product-types/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTypeRequest {
    pub name: String,
}
