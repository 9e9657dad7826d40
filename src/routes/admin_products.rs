use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::{
        ImageUploadRequest, ImageUploadResponse, ImageUploadUrl, Product, SaveProductRequest,
    },
    queries::product_admin_queries,
    services::image_url_service::{delete_objects, put_object_url},
    AppState,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_admin_queries::get_all(&state.db).await?;

    Ok(Json(products))
}

/// One save handler for both create and edit: an id in the payload means
/// exactly one UPDATE keyed by it, no id means exactly one INSERT. Dependent
/// writes (gallery rows, color set) run only after the product row is
/// committed, in that order; if one of them fails the product stays saved and
/// the error is reported as-is.
pub async fn save_product(
    State(state): State<AppState>,
    Json(payload): Json<SaveProductRequest>,
) -> Result<Json<Product>> {
    let price = payload.validate()?;

    let product = match payload.id {
        Some(id) => product_admin_queries::update_product(&state.db, id, &payload, price)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?,
        None => product_admin_queries::create_product(&state.db, &payload, price).await?,
    };

    product_admin_queries::add_product_images(&state.db, product.id, &payload.image_keys).await?;
    product_admin_queries::replace_product_colors(&state.db, product.id, &payload.color_ids)
        .await?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if product_admin_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    let images = product_admin_queries::find_images_by_product_id(&state.db, id).await?;
    let stored_paths: Vec<String> = images.into_iter().map(|img| img.image_url).collect();

    delete_objects(&state.s3_client, &state.storage.bucket, &stored_paths)
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Failed to delete images from storage: {}", e))
        })?;

    product_admin_queries::delete_product(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Presigned PUT URLs for a batch of gallery uploads. Keys are issued here;
/// the rows are written when the product form is saved, so an abandoned
/// upload leaves no dangling gallery entry.
pub async fn generate_image_upload_urls(
    State(state): State<AppState>,
    Json(payload): Json<ImageUploadRequest>,
) -> Result<Json<ImageUploadResponse>> {
    let mut responses = Vec::new();

    for req in payload.images {
        let extension = match req.content_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpg",
        };

        let key = format!("{}.{}", Uuid::new_v4(), extension);

        let upload_url = put_object_url(
            &state.s3_client,
            &state.storage.bucket,
            &key,
            &req.content_type,
            900,
        )
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to generate presigned URL: {}", e)))?;

        let public_url = state.storage.public_object_url(&key);

        responses.push(ImageUploadUrl {
            key,
            upload_url,
            public_url,
        });
    }

    Ok(Json(ImageUploadResponse { images: responses }))
}
