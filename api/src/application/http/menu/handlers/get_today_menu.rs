use axum::extract::State;
use kondate_core::domain::menu::{entities::Menu, ports::MenuService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTodayMenuResponse {
    pub data: Menu,
}

#[utoipa::path(
    get,
    path = "/today",
    tag = "menu",
    summary = "Get today's menu",
    description = "Returns today's menu, asking the LLM for a suggestion and storing it when none is recorded yet",
    responses(
        (status = 200, body = GetTodayMenuResponse),
        (status = 502, description = "LLM unavailable")
    )
)]
pub async fn get_today_menu(
    State(state): State<AppState>,
) -> Result<Response<GetTodayMenuResponse>, ApiError> {
    let menu = state
        .service
        .get_today_menu()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTodayMenuResponse { data: menu }))
}
