/**
 * Database Operations for Image Metadata
 *
 * This module persists image records: title, description, and the hosted
 * URL returned by the image host. The binary itself never touches the
 * database.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Image metadata record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Image {
    /// Unique image ID (UUID)
    pub id: Uuid,
    /// Title supplied at upload
    pub title: Option<String>,
    /// Description supplied at upload
    pub description: Option<String>,
    /// URL on the external image host
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new image record.
pub async fn create_image(
    pool: &PgPool,
    title: Option<String>,
    description: Option<String>,
    image_url: String,
) -> Result<Image, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let image = sqlx::query_as::<_, Image>(
        r#"
        INSERT INTO images (id, title, description, image_url, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, description, image_url, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&title)
    .bind(&description)
    .bind(&image_url)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(image)
}

/// List all images ordered by creation time.
pub async fn list_images(pool: &PgPool) -> Result<Vec<Image>, sqlx::Error> {
    let images = sqlx::query_as::<_, Image>(
        r#"
        SELECT id, title, description, image_url, created_at, updated_at
        FROM images
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(images)
}

/// Get an image by ID, or None if not found.
pub async fn get_image_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Image>, sqlx::Error> {
    let image = sqlx::query_as::<_, Image>(
        r#"
        SELECT id, title, description, image_url, created_at, updated_at
        FROM images
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(image)
}

/// Update title and description of an image.
///
/// Returns the updated record, or None if no image has that id.
pub async fn update_image(
    pool: &PgPool,
    id: Uuid,
    title: Option<String>,
    description: Option<String>,
) -> Result<Option<Image>, sqlx::Error> {
    let now = Utc::now();

    let image = sqlx::query_as::<_, Image>(
        r#"
        UPDATE images
        SET title = $1, description = $2, updated_at = $3
        WHERE id = $4
        RETURNING id, title, description, image_url, created_at, updated_at
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(image)
}

/// Delete an image record.
///
/// Returns the deleted record, or None if no image has that id.
pub async fn delete_image(pool: &PgPool, id: Uuid) -> Result<Option<Image>, sqlx::Error> {
    let image = sqlx::query_as::<_, Image>(
        r#"
        DELETE FROM images
        WHERE id = $1
        RETURNING id, title, description, image_url, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(image)
}
