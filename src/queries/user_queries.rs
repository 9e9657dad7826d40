use sqlx::PgPool;

use crate::{error::Result, models::User};

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn find_role_by_id(pool: &PgPool, id: i32) -> Result<Option<String>> {
    let role = sqlx::query_scalar::<_, String>("SELECT app_role FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(role)
}
