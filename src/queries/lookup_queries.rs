use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Color, CreateColorRequest, CreateLookupRequest, Lookup, LookupKind},
};

pub async fn get_all(pool: &PgPool, kind: LookupKind) -> Result<Vec<Lookup>> {
    let sql = format!("SELECT * FROM {} ORDER BY name ASC", kind.table());

    let rows = sqlx::query_as::<_, Lookup>(&sql).fetch_all(pool).await?;

    Ok(rows)
}

pub async fn create(pool: &PgPool, kind: LookupKind, req: &CreateLookupRequest) -> Result<Lookup> {
    let sql = format!(
        "INSERT INTO {} (name, description) VALUES ($1, $2) RETURNING *",
        kind.table()
    );

    let row = sqlx::query_as::<_, Lookup>(&sql)
        .bind(req.name.trim())
        .bind(req.description.as_deref().map(str::trim))
        .fetch_one(pool)
        .await?;

    Ok(row)
}

pub async fn get_all_colors(pool: &PgPool) -> Result<Vec<Color>> {
    let colors = sqlx::query_as::<_, Color>("SELECT * FROM colors ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(colors)
}

pub async fn create_color(pool: &PgPool, req: &CreateColorRequest) -> Result<Color> {
    let color = sqlx::query_as::<_, Color>(
        "INSERT INTO colors (name, description, hex_code) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(req.name.trim())
    .bind(req.description.as_deref().map(str::trim))
    .bind(req.hex_code.as_deref().map(str::trim))
    .fetch_one(pool)
    .await?;

    Ok(color)
}
