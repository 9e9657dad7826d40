use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<i32>,
    pub modality_id: Option<i32>,
    pub type_id: Option<i32>,
    pub shape_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Catalog listing row with the lookup names the search query denormalizes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CatalogRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<i32>,
    pub modality_id: Option<i32>,
    pub type_id: Option<i32>,
    pub shape_id: Option<i32>,
    pub category_name: Option<String>,
    pub modality_name: Option<String>,
    pub type_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detail row; the detail view additionally shows the shape.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductDetailRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: Option<i32>,
    pub modality_id: Option<i32>,
    pub type_id: Option<i32>,
    pub shape_id: Option<i32>,
    pub category_name: Option<String>,
    pub modality_name: Option<String>,
    pub type_name: Option<String>,
    pub shape_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductColorRow {
    pub product_id: i32,
    pub color_id: i32,
    pub name: String,
    pub hex_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorRef {
    pub color_id: i32,
    pub name: String,
    pub hex_code: Option<String>,
}

impl From<ProductColorRow> for ColorRef {
    fn from(row: ProductColorRow) -> Self {
        Self {
            color_id: row.color_id,
            name: row.name,
            hex_code: row.hex_code,
        }
    }
}

/// Search result before image paths have been resolved to display URLs.
#[derive(Debug)]
pub struct CatalogEntry {
    pub row: CatalogRow,
    pub colors: Vec<ColorRef>,
    pub image_paths: Vec<String>,
}

#[derive(Debug)]
pub struct ProductDetailEntry {
    pub row: ProductDetailRow,
    pub colors: Vec<ColorRef>,
    pub image_paths: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogProduct {
    #[serde(flatten)]
    pub row: CatalogRow,
    pub colors: Vec<ColorRef>,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<CatalogProduct>,
    /// Canonical form of the applied filters, for the client to mirror into
    /// the address bar.
    pub query_string: String,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub row: ProductDetailRow,
    pub colors: Vec<ColorRef>,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveProductRequest {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<i32>,
    pub modality_id: Option<i32>,
    pub type_id: Option<i32>,
    pub shape_id: Option<i32>,
    /// Object keys of freshly uploaded images, appended to the gallery.
    #[serde(default)]
    pub image_keys: Vec<String>,
    /// Full replacement for the product's color set.
    #[serde(default)]
    pub color_ids: Vec<i32>,
}

impl SaveProductRequest {
    /// Field checks that run before any database write. Returns the validated
    /// price so callers do not have to unwrap the optional again.
    pub fn validate(&self) -> Result<Decimal> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }

        let price = self
            .price
            .ok_or_else(|| AppError::BadRequest("price is required".to_string()))?;

        if price < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "price must not be negative".to_string(),
            ));
        }

        Ok(price)
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageUploadRequest {
    pub images: Vec<ImageUploadSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ImageUploadSpec {
    pub content_type: String,
}

#[derive(Debug, Serialize)]
pub struct ImageUploadUrl {
    pub key: String,
    pub upload_url: String,
    pub public_url: String,
}

#[derive(Debug, Serialize)]
pub struct ImageUploadResponse {
    pub images: Vec<ImageUploadUrl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SaveProductRequest {
        SaveProductRequest {
            id: None,
            name: "Lentes clásicos".to_string(),
            description: None,
            price: Some(Decimal::new(19999, 2)),
            category_id: None,
            modality_id: None,
            type_id: None,
            shape_id: None,
            image_keys: Vec::new(),
            color_ids: Vec::new(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(valid_request().validate().unwrap(), Decimal::new(19999, 2));
    }

    #[test]
    fn test_validate_blank_name() {
        let mut req = valid_request();
        req.name = "   ".to_string();
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_validate_missing_price() {
        let mut req = valid_request();
        req.price = None;
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_validate_negative_price() {
        let mut req = valid_request();
        req.price = Some(Decimal::new(-1, 0));
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }
}
