use axum::extract::State;
use kondate_core::domain::menu::{entities::Menu, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListMenusResponse {
    pub data: Vec<Menu>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "menu",
    summary = "List menus",
    description = "Returns every recorded menu, newest date first",
    responses(
        (status = 200, body = ListMenusResponse)
    )
)]
pub async fn list_menus(
    State(state): State<AppState>,
) -> Result<Response<ListMenusResponse>, ApiError> {
    let menus = state.service.list_menus().await.map_err(ApiError::from)?;

    Ok(Response::OK(ListMenusResponse { data: menus }))
}
