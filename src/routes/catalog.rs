use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{
        CatalogFilter, CatalogProduct, CatalogResponse, Color, Lookup, LookupKind,
        ProductDetailResponse,
    },
    queries::{catalog_queries, lookup_queries},
    services::image_url_service::resolve_image_urls,
    AppState,
};

/// Filtered catalog listing. A failed query degrades to an empty listing so
/// the storefront always reaches a stable rendered state.
pub async fn search_catalog(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilter>,
) -> Json<CatalogResponse> {
    let entries = match catalog_queries::search_products(&state.db, &filter).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Catalog search failed: {}", e);
            Vec::new()
        }
    };

    let products = entries
        .into_iter()
        .map(|entry| CatalogProduct {
            image_urls: resolve_image_urls(&state.storage, &entry.image_paths),
            colors: entry.colors,
            row: entry.row,
        })
        .collect();

    Json(CatalogResponse {
        products,
        query_string: filter.to_query_string(),
    })
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductDetailResponse>> {
    let entry = catalog_queries::find_product_detail(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductDetailResponse {
        image_urls: resolve_image_urls(&state.storage, &entry.image_paths),
        colors: entry.colors,
        row: entry.row,
    }))
}

#[derive(Debug, serde::Serialize)]
pub struct FilterOptions {
    pub categories: Vec<Lookup>,
    pub modalities: Vec<Lookup>,
    pub types: Vec<Lookup>,
    pub colors: Vec<Color>,
}

/// Everything the filter panel needs to render its selects.
pub async fn get_filter_options(State(state): State<AppState>) -> Result<Json<FilterOptions>> {
    let categories = lookup_queries::get_all(&state.db, LookupKind::Categories).await?;
    let modalities = lookup_queries::get_all(&state.db, LookupKind::Modalities).await?;
    let types = lookup_queries::get_all(&state.db, LookupKind::Types).await?;
    let colors = lookup_queries::get_all_colors(&state.db).await?;

    Ok(Json(FilterOptions {
        categories,
        modalities,
        types,
        colors,
    }))
}
