use axum::extract::{Multipart, State};
use kondate_core::domain::menu::{
    ports::MenuService,
    value_objects::{ExtractMenuFromImageInput, MenuExtraction},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExtractMenuFromImageResponse {
    pub data: MenuExtraction,
}

#[utoipa::path(
    post,
    path = "/extract-from-image",
    tag = "menu",
    summary = "Extract menu from image",
    description = "Identifies the dishes on a photo using LLM vision. Expects a multipart `image` field.",
    responses(
        (status = 200, body = ExtractMenuFromImageResponse),
        (status = 400, description = "Missing or oversized image"),
        (status = 502, description = "LLM unavailable")
    )
)]
pub async fn extract_menu_from_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<ExtractMenuFromImageResponse>, ApiError> {
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some((data.to_vec(), mime_type));
    }

    let (image_data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let extraction = state
        .service
        .extract_menu_from_image(ExtractMenuFromImageInput {
            image_data,
            mime_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ExtractMenuFromImageResponse { data: extraction }))
}
