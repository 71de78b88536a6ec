use axum::extract::State;
use kondate_core::domain::menu::{entities::Menu, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    menu::validators::CreateMenuValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateMenuResponse {
    pub data: Menu,
}

#[utoipa::path(
    post,
    path = "",
    tag = "menu",
    summary = "Create menu",
    description = "Records the menu for a date. Only one menu may exist per date.",
    request_body = CreateMenuValidator,
    responses(
        (status = 201, body = CreateMenuResponse, description = "Menu created"),
        (status = 400, description = "Bad request"),
        (status = 409, description = "A menu already exists for this date")
    )
)]
pub async fn create_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateMenuValidator>,
) -> Result<Response<CreateMenuResponse>, ApiError> {
    let menu = state
        .service
        .create_menu(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateMenuResponse { data: menu }))
}
