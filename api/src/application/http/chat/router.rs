use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    relay_message::{__path_relay_message, relay_message},
    send_test_message::{__path_send_test_message, send_test_message},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(relay_message, send_test_message))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/chat", state.args.server.root_path),
        get(send_test_message).post(relay_message),
    )
}
