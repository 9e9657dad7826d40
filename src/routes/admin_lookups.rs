use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::Result,
    models::{Color, CreateColorRequest, CreateLookupRequest, Lookup, LookupKind},
    queries::lookup_queries,
    AppState,
};

pub async fn list_lookup(
    State(state): State<AppState>,
    Path(kind): Path<LookupKind>,
) -> Result<Json<Vec<Lookup>>> {
    let rows = lookup_queries::get_all(&state.db, kind).await?;

    Ok(Json(rows))
}

/// Ad hoc creation from the "new category/modality/…" modals. Validation runs
/// before any database call; a database failure is surfaced as its own
/// message.
pub async fn create_lookup(
    State(state): State<AppState>,
    Path(kind): Path<LookupKind>,
    Json(payload): Json<CreateLookupRequest>,
) -> Result<Json<Lookup>> {
    payload.validate()?;

    let row = lookup_queries::create(&state.db, kind, &payload).await?;

    Ok(Json(row))
}

pub async fn list_colors(State(state): State<AppState>) -> Result<Json<Vec<Color>>> {
    let colors = lookup_queries::get_all_colors(&state.db).await?;

    Ok(Json(colors))
}

pub async fn create_color(
    State(state): State<AppState>,
    Json(payload): Json<CreateColorRequest>,
) -> Result<Json<Color>> {
    payload.validate()?;

    let color = lookup_queries::create_color(&state.db, &payload).await?;

    Ok(Json(color))
}
