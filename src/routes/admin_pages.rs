use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{PageConfiguration, SavePageRequest},
    queries::page_queries,
    services::sanitize_service::sanitize_page_html,
    AppState,
};

pub async fn list_pages(State(state): State<AppState>) -> Result<Json<Vec<PageConfiguration>>> {
    let pages = page_queries::get_all(&state.db).await?;

    Ok(Json(pages))
}

/// Upsert keyed by slug. Content is sanitized here, before storage; the
/// public read path serves it untouched.
pub async fn save_page(
    State(state): State<AppState>,
    Json(payload): Json<SavePageRequest>,
) -> Result<Json<PageConfiguration>> {
    payload.validate()?;

    let content = sanitize_page_html(&payload.content);
    let page = page_queries::upsert_page(&state.db, &payload, &content).await?;

    Ok(Json(page))
}

pub async fn delete_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode> {
    let deleted = page_queries::delete_page(&state.db, &slug).await?;

    if !deleted {
        return Err(AppError::NotFound("Page not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
