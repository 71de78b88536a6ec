use axum::extract::State;
use kondate_core::domain::chat::ports::ChatService;

use crate::application::http::{
    chat::validators::RelayMessageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Relay chat message",
    description = "Forwards a message to the configured chat webhook and returns its reply",
    request_body = RelayMessageValidator,
    responses(
        (status = 200, body = serde_json::Value, description = "Webhook reply"),
        (status = 400, description = "Bad request"),
        (status = 502, description = "Webhook failed")
    )
)]
pub async fn relay_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RelayMessageValidator>,
) -> Result<Response<serde_json::Value>, ApiError> {
    let reply = state
        .service
        .relay_message(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reply))
}
