use axum::{extract::State, Json};

use crate::{error::Result, models::MarqueeConfig, queries::site_config_queries, AppState};

/// Public banner configuration; `null` when none has been saved yet, which
/// the storefront renders as no banner at all.
pub async fn get_marquee(State(state): State<AppState>) -> Result<Json<Option<MarqueeConfig>>> {
    let config = site_config_queries::get_marquee(&state.db).await?;

    Ok(Json(config))
}
