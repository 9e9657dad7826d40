use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{MenuEntry, PublicPage},
    queries::page_queries,
    AppState,
};

pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PublicPage>> {
    let page = page_queries::find_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Page not found".to_string()))?;

    Ok(Json(page))
}

pub async fn get_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuEntry>>> {
    let entries = page_queries::get_menu_pages(&state.db).await?;

    Ok(Json(entries))
}
