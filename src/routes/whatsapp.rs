use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::OrderLinkResponse,
    queries::{product_admin_queries, site_config_queries},
    services::whatsapp_service,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct OrderLinkQuery {
    pub color: Option<String>,
}

/// Deep link the "order via WhatsApp" button opens for this product.
pub async fn order_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<OrderLinkQuery>,
) -> Result<Json<OrderLinkResponse>> {
    let product = product_admin_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let config = site_config_queries::get_whatsapp(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("WhatsApp ordering is not configured".to_string()))?;

    let url = whatsapp_service::build_order_link(
        &config.phone_number,
        &config.default_message,
        &product.name,
        product.description.as_deref(),
        product.price,
        params.color.as_deref(),
    );

    Ok(Json(OrderLinkResponse { url }))
}
