use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    generate_sample_data::{__path_generate_sample_data, generate_sample_data},
    run_analysis::{__path_run_analysis, run_analysis},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(run_analysis, generate_sample_data))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analysis/regression", state.args.server.root_path),
        get(run_analysis).post(generate_sample_data),
    )
}
