use std::collections::HashMap;

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{
        CatalogEntry, CatalogFilter, CatalogRow, ColorRef, ProductColorRow, ProductDetailEntry,
        ProductDetailRow, ProductImage,
    },
};

/// Compose the catalog SELECT for a filter state.
///
/// Scalar facets become equality predicates on the foreign keys. The color
/// facet is a semijoin: the EXISTS decides whether a product is included at
/// all, and the product's full color list is attached afterwards, so filtering
/// by one color never narrows the color chips shown on the card.
pub fn build_catalog_query(filter: &CatalogFilter) -> QueryBuilder<'static, Postgres> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
        "SELECT p.id, p.name, p.description, p.price, \
         p.category_id, p.modality_id, p.type_id, p.shape_id, \
         c.name AS category_name, m.name AS modality_name, t.name AS type_name, \
         p.created_at, p.updated_at \
         FROM products p \
         LEFT JOIN categories c ON c.id = p.category_id \
         LEFT JOIN modalities m ON m.id = p.modality_id \
         LEFT JOIN types t ON t.id = p.type_id \
         WHERE 1=1",
    );

    if let Some(category) = filter.category {
        query.push(" AND p.category_id = ");
        query.push_bind(category);
    }

    if let Some(modality) = filter.modality {
        query.push(" AND p.modality_id = ");
        query.push_bind(modality);
    }

    if let Some(type_id) = filter.type_id {
        query.push(" AND p.type_id = ");
        query.push_bind(type_id);
    }

    if !filter.colors.is_empty() {
        query.push(
            " AND EXISTS (SELECT 1 FROM product_colors pc \
             WHERE pc.product_id = p.id AND pc.color_id = ANY(",
        );
        query.push_bind(filter.colors.clone());
        query.push("))");
    }

    query.push(" ORDER BY p.name ASC");

    query
}

pub async fn search_products(pool: &PgPool, filter: &CatalogFilter) -> Result<Vec<CatalogEntry>> {
    let rows = build_catalog_query(filter)
        .build_query_as::<CatalogRow>()
        .fetch_all(pool)
        .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let mut colors_map = fetch_colors_for(pool, &product_ids).await?;
    let mut images_map = fetch_image_paths_for(pool, &product_ids).await?;

    let entries = rows
        .into_iter()
        .map(|row| CatalogEntry {
            colors: colors_map.remove(&row.id).unwrap_or_default(),
            image_paths: images_map.remove(&row.id).unwrap_or_default(),
            row,
        })
        .collect();

    Ok(entries)
}

pub async fn find_product_detail(pool: &PgPool, id: i32) -> Result<Option<ProductDetailEntry>> {
    let row = sqlx::query_as::<_, ProductDetailRow>(
        "SELECT p.id, p.name, p.description, p.price, \
         p.category_id, p.modality_id, p.type_id, p.shape_id, \
         c.name AS category_name, m.name AS modality_name, \
         t.name AS type_name, s.name AS shape_name, \
         p.created_at, p.updated_at \
         FROM products p \
         LEFT JOIN categories c ON c.id = p.category_id \
         LEFT JOIN modalities m ON m.id = p.modality_id \
         LEFT JOIN types t ON t.id = p.type_id \
         LEFT JOIN shapes s ON s.id = p.shape_id \
         WHERE p.id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let product_ids = [row.id];
    let colors = fetch_colors_for(pool, &product_ids)
        .await?
        .remove(&row.id)
        .unwrap_or_default();
    let image_paths = fetch_image_paths_for(pool, &product_ids)
        .await?
        .remove(&row.id)
        .unwrap_or_default();

    Ok(Some(ProductDetailEntry {
        row,
        colors,
        image_paths,
    }))
}

/// Full color lists for a batch of products, keyed by product id.
async fn fetch_colors_for(
    pool: &PgPool,
    product_ids: &[i32],
) -> Result<HashMap<i32, Vec<ColorRef>>> {
    let rows = sqlx::query_as::<_, ProductColorRow>(
        "SELECT pc.product_id, pc.color_id, c.name, c.hex_code \
         FROM product_colors pc \
         JOIN colors c ON c.id = pc.color_id \
         WHERE pc.product_id = ANY($1) \
         ORDER BY pc.product_id, c.name ASC",
    )
    .bind(product_ids)
    .fetch_all(pool)
    .await?;

    let mut map: HashMap<i32, Vec<ColorRef>> = HashMap::new();
    for row in rows {
        map.entry(row.product_id)
            .or_default()
            .push(ColorRef::from(row));
    }

    Ok(map)
}

/// Stored image paths per product, in insertion order.
async fn fetch_image_paths_for(
    pool: &PgPool,
    product_ids: &[i32],
) -> Result<HashMap<i32, Vec<String>>> {
    let images = sqlx::query_as::<_, ProductImage>(
        "SELECT id, product_id, image_url, created_at \
         FROM product_images \
         WHERE product_id = ANY($1) \
         ORDER BY product_id, created_at ASC, id ASC",
    )
    .bind(product_ids)
    .fetch_all(pool)
    .await?;

    let mut map: HashMap<i32, Vec<String>> = HashMap::new();
    for image in images {
        map.entry(image.product_id).or_default().push(image.image_url);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_query_has_no_predicates() {
        let mut query = build_catalog_query(&CatalogFilter::default());
        let sql = query.sql();

        assert!(!sql.contains("p.category_id ="));
        assert!(!sql.contains("p.modality_id ="));
        assert!(!sql.contains("p.type_id ="));
        assert!(!sql.contains("EXISTS"));
        assert!(sql.ends_with("ORDER BY p.name ASC"));
    }

    #[test]
    fn test_all_scalar_facets_are_conjunctive() {
        let filter = CatalogFilter {
            category: Some(1),
            modality: Some(2),
            type_id: Some(3),
            colors: Vec::new(),
        };
        let mut query = build_catalog_query(&filter);
        let sql = query.sql();

        assert!(sql.contains("AND p.category_id = $1"));
        assert!(sql.contains("AND p.modality_id = $2"));
        assert!(sql.contains("AND p.type_id = $3"));
    }

    #[test]
    fn test_color_facet_is_a_semijoin() {
        let filter = CatalogFilter {
            colors: vec![4, 7],
            ..Default::default()
        };
        let mut query = build_catalog_query(&filter);
        let sql = query.sql();

        // Membership test against the join table; the joined color list
        // itself is fetched separately and stays complete.
        assert!(sql.contains(
            "EXISTS (SELECT 1 FROM product_colors pc \
             WHERE pc.product_id = p.id AND pc.color_id = ANY($1))"
        ));
    }

    #[test]
    fn test_single_facet_keeps_others_unconstrained() {
        let filter = CatalogFilter {
            modality: Some(9),
            ..Default::default()
        };
        let mut query = build_catalog_query(&filter);
        let sql = query.sql();

        assert!(sql.contains("AND p.modality_id = $1"));
        assert!(!sql.contains("p.category_id ="));
        assert!(!sql.contains("p.type_id ="));
        assert!(!sql.contains("EXISTS"));
    }

    #[test]
    fn test_listing_denormalizes_lookup_names() {
        let mut query = build_catalog_query(&CatalogFilter::default());
        let sql = query.sql();

        assert!(sql.contains("c.name AS category_name"));
        assert!(sql.contains("m.name AS modality_name"));
        assert!(sql.contains("t.name AS type_name"));
        // The catalog card does not show the shape; only the detail view does.
        assert!(!sql.contains("shape_name"));
    }
}
