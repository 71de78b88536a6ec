use axum::extract::State;
use kondate_core::domain::analysis::ports::AnalysisService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::GenerateSampleDataValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateSampleDataResponse {
    pub message: String,
    pub count: usize,
}

#[utoipa::path(
    post,
    path = "/regression",
    tag = "analysis",
    summary = "Generate sample data",
    description = "Inserts the demo menus used by the analysis screens. Dates that already have a menu are skipped.",
    request_body = GenerateSampleDataValidator,
    responses(
        (status = 200, body = GenerateSampleDataResponse),
        (status = 400, description = "generate_sample_data was not set")
    )
)]
pub async fn generate_sample_data(
    State(state): State<AppState>,
    // A missing or false flag is rejected with 400 during extraction.
    ValidateJson(_): ValidateJson<GenerateSampleDataValidator>,
) -> Result<Response<GenerateSampleDataResponse>, ApiError> {
    let count = state
        .service
        .seed_sample_menus()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateSampleDataResponse {
        message: format!("Created {} sample menus", count),
        count,
    }))
}
