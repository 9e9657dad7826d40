use axum::{extract::State, Json};

use crate::{
    error::Result,
    models::{MarqueeConfig, SaveMarqueeRequest, SaveWhatsappRequest, WhatsappConfig},
    queries::site_config_queries,
    services::sanitize_service::sanitize_marquee_html,
    AppState,
};

pub async fn save_marquee(
    State(state): State<AppState>,
    Json(payload): Json<SaveMarqueeRequest>,
) -> Result<Json<MarqueeConfig>> {
    let message = sanitize_marquee_html(&payload.message);
    let config = site_config_queries::upsert_marquee(&state.db, &payload, &message).await?;

    Ok(Json(config))
}

pub async fn get_whatsapp(State(state): State<AppState>) -> Result<Json<Option<WhatsappConfig>>> {
    let config = site_config_queries::get_whatsapp(&state.db).await?;

    Ok(Json(config))
}

pub async fn save_whatsapp(
    State(state): State<AppState>,
    Json(payload): Json<SaveWhatsappRequest>,
) -> Result<Json<WhatsappConfig>> {
    payload.validate()?;

    let config = site_config_queries::upsert_whatsapp(&state.db, &payload).await?;

    Ok(Json(config))
}
