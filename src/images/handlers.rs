/**
 * Image Resource Handlers
 *
 * HTTP handlers for the image CRUD endpoints. All routes sit behind the
 * authentication middleware.
 *
 * # Endpoints
 *
 * - `POST /api/v1/images/upload` - multipart upload (file + title/description)
 * - `GET /api/v1/images` - list all images
 * - `GET /api/v1/images/find/{id}` - get one image
 * - `PUT /api/v1/images/update/{id}` - update title/description
 * - `DELETE /api/v1/images/delete/{id}` - delete an image
 *
 * The upload handler sends the binary to the external image host first and
 * persists metadata with the returned hosted URL; the two steps are not
 * transactional, a failed insert leaves an orphan on the host.
 */

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::images::db::{
    create_image, delete_image, get_image_by_id, list_images as list_images_query, update_image,
    Image,
};
use crate::images::host::ImageHostClient;

/// Update request for title/description.
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateImageRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Delete response carrying the removed record.
#[derive(Serialize, Debug)]
pub struct DeleteImageResponse {
    pub message: String,
    #[serde(rename = "deletedImage")]
    pub deleted_image: Image,
}

/// Upload handler
///
/// Reads the multipart body (fields: `image` file, `title`, `description`),
/// pushes the binary to the image host, and stores the metadata record.
///
/// # Errors
///
/// * `400` - no file part in the request
/// * `500` - host failure or store failure
pub async fn upload_image(
    State(pool): State<Option<PgPool>>,
    State(host): State<ImageHostClient>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Image>), ApiError> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::internal(format!("failed to read multipart body: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("title") => {
                title = Some(field.text().await.map_err(|e| {
                    ApiError::internal(format!("failed to read title field: {}", e))
                })?);
            }
            Some("description") => {
                description = Some(field.text().await.map_err(|e| {
                    ApiError::internal(format!("failed to read description field: {}", e))
                })?);
            }
            Some("image") => {
                let file_name = field
                    .file_name()
                    .unwrap_or("upload")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::internal(format!("failed to read image field: {}", e))
                })?;
                file = Some((file_name, data.to_vec()));
            }
            _ => {}
        }
    }

    // The file check comes before any collaborator call so a bad request
    // never reaches the host or the store.
    let (file_name, data) = file.ok_or(ApiError::MissingImage)?;
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;

    tracing::info!("Uploading image {} ({} bytes)", file_name, data.len());

    let hosted = host.upload(&file_name, data).await?;
    let image = create_image(&pool, title, description, hosted.url).await?;

    tracing::info!("Image stored: {} -> {}", image.id, image.image_url);

    Ok((StatusCode::CREATED, Json(image)))
}

/// GET /api/v1/images - list all images.
pub async fn list_images(State(pool): State<Option<PgPool>>) -> Result<Json<Vec<Image>>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;

    let images = list_images_query(&pool).await?;
    Ok(Json(images))
}

/// GET /api/v1/images/find/{id} - get one image.
///
/// # Errors
///
/// * `404` - no image with that id
pub async fn find_image(
    State(pool): State<Option<PgPool>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Image>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;

    let image = get_image_by_id(&pool, id).await?.ok_or(ApiError::ImageNotFound)?;
    Ok(Json(image))
}

/// Merge an update request onto the stored record.
///
/// Fields absent from the request keep their stored value; only supplied
/// fields overwrite.
fn merge_update(current: &Image, request: UpdateImageRequest) -> (Option<String>, Option<String>) {
    (
        request.title.or_else(|| current.title.clone()),
        request.description.or_else(|| current.description.clone()),
    )
}

/// PUT /api/v1/images/update/{id} - update title and description.
///
/// This is a partial update: a field omitted from the body is left
/// unchanged, never nulled out.
///
/// # Errors
///
/// * `404` - no image with that id
pub async fn update_image_handler(
    State(pool): State<Option<PgPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateImageRequest>,
) -> Result<Json<Image>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;

    let current = get_image_by_id(&pool, id).await?.ok_or(ApiError::ImageNotFound)?;
    let (title, description) = merge_update(&current, request);

    let image = update_image(&pool, id, title, description)
        .await?
        .ok_or(ApiError::ImageNotFound)?;

    Ok(Json(image))
}

/// DELETE /api/v1/images/delete/{id} - delete an image.
///
/// Returns the deleted record so clients can reconcile local state.
///
/// # Errors
///
/// * `404` - no image with that id
pub async fn delete_image_handler(
    State(pool): State<Option<PgPool>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteImageResponse>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;

    let image = delete_image(&pool, id).await?.ok_or(ApiError::ImageNotFound)?;

    tracing::info!("Image deleted: {}", image.id);

    Ok(Json(DeleteImageResponse {
        message: "Image deleted successfully".to_string(),
        deleted_image: image,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stored_image() -> Image {
        Image {
            id: Uuid::new_v4(),
            title: Some("Sunset".to_string()),
            description: Some("Over the bay".to_string()),
            image_url: "https://ik.example.com/demo/sunset.jpg".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_omitted_fields_keep_stored_values() {
        let current = stored_image();
        let request = UpdateImageRequest {
            title: None,
            description: None,
        };

        let (title, description) = merge_update(&current, request);
        assert_eq!(title.as_deref(), Some("Sunset"));
        assert_eq!(description.as_deref(), Some("Over the bay"));
    }

    #[test]
    fn test_supplied_field_overwrites_only_itself() {
        let current = stored_image();
        let request = UpdateImageRequest {
            title: Some("Sunrise".to_string()),
            description: None,
        };

        let (title, description) = merge_update(&current, request);
        assert_eq!(title.as_deref(), Some("Sunrise"));
        assert_eq!(description.as_deref(), Some("Over the bay"));
    }

    #[test]
    fn test_update_merges_onto_empty_fields() {
        let mut current = stored_image();
        current.title = None;
        current.description = None;

        let request = UpdateImageRequest {
            title: Some("Sunrise".to_string()),
            description: None,
        };

        let (title, description) = merge_update(&current, request);
        assert_eq!(title.as_deref(), Some("Sunrise"));
        assert_eq!(description, None);
    }
}
