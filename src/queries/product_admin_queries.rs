use sqlx::{PgPool, QueryBuilder};

use crate::{
    error::Result,
    models::{Product, ProductImage, SaveProductRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Back-office listing, same ordering as the public catalog.
pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn create_product(
    pool: &PgPool,
    req: &SaveProductRequest,
    price: rust_decimal::Decimal,
) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, description, price, category_id, modality_id, type_id, shape_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(req.name.trim())
    .bind(&req.description)
    .bind(price)
    .bind(req.category_id)
    .bind(req.modality_id)
    .bind(req.type_id)
    .bind(req.shape_id)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Full-field update; the form always submits every column.
pub async fn update_product(
    pool: &PgPool,
    id: i32,
    req: &SaveProductRequest,
    price: rust_decimal::Decimal,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET
            name = $1,
            description = $2,
            price = $3,
            category_id = $4,
            modality_id = $5,
            type_id = $6,
            shape_id = $7,
            updated_at = NOW()
        WHERE id = $8
        RETURNING *
        "#,
    )
    .bind(req.name.trim())
    .bind(&req.description)
    .bind(price)
    .bind(req.category_id)
    .bind(req.modality_id)
    .bind(req.type_id)
    .bind(req.shape_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn find_images_by_product_id(pool: &PgPool, id: i32) -> Result<Vec<ProductImage>> {
    let images = sqlx::query_as::<_, ProductImage>(
        "SELECT id, product_id, image_url, created_at \
         FROM product_images \
         WHERE product_id = $1 \
         ORDER BY created_at ASC, id ASC",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

/// Append freshly uploaded gallery entries. Insertion order is display order.
pub async fn add_product_images(
    pool: &PgPool,
    product_id: i32,
    image_keys: &[String],
) -> Result<()> {
    if image_keys.is_empty() {
        return Ok(());
    }

    let mut query_builder = QueryBuilder::new("INSERT INTO product_images (product_id, image_url) ");

    query_builder.push_values(image_keys, |mut b, key| {
        b.push_bind(product_id).push_bind(key);
    });

    query_builder.build().execute(pool).await?;

    Ok(())
}

/// The color set is replaced wholesale on every save, never diffed.
pub async fn replace_product_colors(
    pool: &PgPool,
    product_id: i32,
    color_ids: &[i32],
) -> Result<()> {
    sqlx::query("DELETE FROM product_colors WHERE product_id = $1")
        .bind(product_id)
        .execute(pool)
        .await?;

    if !color_ids.is_empty() {
        let mut query_builder =
            QueryBuilder::new("INSERT INTO product_colors (product_id, color_id) ");

        query_builder.push_values(color_ids, |mut b, color_id| {
            b.push_bind(product_id).push_bind(color_id);
        });

        query_builder.build().execute(pool).await?;
    }

    Ok(())
}
