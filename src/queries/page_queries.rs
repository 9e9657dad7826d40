use sqlx::PgPool;

use crate::{
    error::Result,
    models::{MenuEntry, PageConfiguration, PublicPage, SavePageRequest},
};

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<PublicPage>> {
    let page = sqlx::query_as::<_, PublicPage>(
        "SELECT title, content, whatsapp_link FROM page_configuration WHERE page_name = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(page)
}

pub async fn get_menu_pages(pool: &PgPool) -> Result<Vec<MenuEntry>> {
    let entries = sqlx::query_as::<_, MenuEntry>(
        "SELECT page_name, title FROM page_configuration \
         WHERE show_in_menu = true \
         ORDER BY title ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<PageConfiguration>> {
    let pages =
        sqlx::query_as::<_, PageConfiguration>("SELECT * FROM page_configuration ORDER BY title ASC")
            .fetch_all(pool)
            .await?;

    Ok(pages)
}

/// Upsert keyed by the page slug; editing a slug that does not exist yet
/// simply creates the row.
pub async fn upsert_page(
    pool: &PgPool,
    req: &SavePageRequest,
    content: &str,
) -> Result<PageConfiguration> {
    let page = sqlx::query_as::<_, PageConfiguration>(
        r#"
        INSERT INTO page_configuration (page_name, title, content, show_in_menu, whatsapp_link, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        ON CONFLICT (page_name) DO UPDATE SET
            title = EXCLUDED.title,
            content = EXCLUDED.content,
            show_in_menu = EXCLUDED.show_in_menu,
            whatsapp_link = EXCLUDED.whatsapp_link,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(req.page_name.trim())
    .bind(req.title.trim())
    .bind(content)
    .bind(req.show_in_menu)
    .bind(req.whatsapp_link.as_deref().map(str::trim))
    .fetch_one(pool)
    .await?;

    Ok(page)
}

pub async fn delete_page(pool: &PgPool, slug: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM page_configuration WHERE page_name = $1")
        .bind(slug)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
