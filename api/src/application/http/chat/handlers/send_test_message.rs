use axum::extract::State;
use kondate_core::domain::chat::ports::ChatService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "chat",
    summary = "Send test message",
    description = "Posts a fixed greeting to the chat webhook",
    responses(
        (status = 200, body = serde_json::Value, description = "Webhook reply"),
        (status = 502, description = "Webhook failed")
    )
)]
pub async fn send_test_message(
    State(state): State<AppState>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let reply = state
        .service
        .send_test_message()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reply))
}
