use sqlx::PgPool;

use crate::{
    error::Result,
    models::{MarqueeConfig, SaveMarqueeRequest, SaveWhatsappRequest, WhatsappConfig},
};

const SINGLETON_ID: i32 = 1;

pub async fn get_marquee(pool: &PgPool) -> Result<Option<MarqueeConfig>> {
    let config = sqlx::query_as::<_, MarqueeConfig>("SELECT * FROM marquee_config WHERE id = $1")
        .bind(SINGLETON_ID)
        .fetch_optional(pool)
        .await?;

    Ok(config)
}

pub async fn upsert_marquee(
    pool: &PgPool,
    req: &SaveMarqueeRequest,
    message: &str,
) -> Result<MarqueeConfig> {
    let config = sqlx::query_as::<_, MarqueeConfig>(
        r#"
        INSERT INTO marquee_config (id, message, color, background_color)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE SET
            message = EXCLUDED.message,
            color = EXCLUDED.color,
            background_color = EXCLUDED.background_color
        RETURNING *
        "#,
    )
    .bind(SINGLETON_ID)
    .bind(message)
    .bind(req.color.trim())
    .bind(req.background_color.trim())
    .fetch_one(pool)
    .await?;

    Ok(config)
}

pub async fn get_whatsapp(pool: &PgPool) -> Result<Option<WhatsappConfig>> {
    let config = sqlx::query_as::<_, WhatsappConfig>("SELECT * FROM whatsapp_config WHERE id = $1")
        .bind(SINGLETON_ID)
        .fetch_optional(pool)
        .await?;

    Ok(config)
}

pub async fn upsert_whatsapp(pool: &PgPool, req: &SaveWhatsappRequest) -> Result<WhatsappConfig> {
    let config = sqlx::query_as::<_, WhatsappConfig>(
        r#"
        INSERT INTO whatsapp_config (id, phone_number, default_message)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO UPDATE SET
            phone_number = EXCLUDED.phone_number,
            default_message = EXCLUDED.default_message
        RETURNING *
        "#,
    )
    .bind(SINGLETON_ID)
    .bind(req.phone_number.trim())
    .bind(req.default_message.trim())
    .fetch_one(pool)
    .await?;

    Ok(config)
}
