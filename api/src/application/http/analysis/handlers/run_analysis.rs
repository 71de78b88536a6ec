use axum::extract::{Query, State};
use kondate_core::domain::analysis::{entities::AnalysisReport, ports::AnalysisService};

use crate::application::http::{
    analysis::validators::RunAnalysisParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/regression",
    tag = "analysis",
    summary = "Run regression analysis",
    description = "Runs one catalog pattern (`id`), a custom pair (`x` and `y`), or every catalog pattern when neither is given",
    params(RunAnalysisParams),
    responses(
        (status = 200, body = AnalysisReport),
        (status = 400, description = "Not enough usable data, or x values do not vary"),
        (status = 404, description = "Unknown pattern id")
    )
)]
pub async fn run_analysis(
    State(state): State<AppState>,
    Query(params): Query<RunAnalysisParams>,
) -> Result<Response<AnalysisReport>, ApiError> {
    let report = state
        .service
        .run_analysis(params.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
