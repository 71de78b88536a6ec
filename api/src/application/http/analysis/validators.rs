use kondate_core::domain::analysis::value_objects::RunAnalysisInput;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RunAnalysisParams {
    /// Catalog pattern id, e.g. `cost-satisfaction`.
    #[schema(example = "cost-satisfaction")]
    pub id: Option<String>,
    /// Field on the x axis of a custom analysis.
    #[schema(example = "calories")]
    pub x: Option<String>,
    /// Field on the y axis of a custom analysis.
    #[schema(example = "rating")]
    pub y: Option<String>,
}

impl From<RunAnalysisParams> for RunAnalysisInput {
    fn from(params: RunAnalysisParams) -> Self {
        Self {
            pattern_id: params.id,
            x_field: params.x,
            y_field: params.y,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateSampleDataValidator {
    #[serde(default)]
    #[validate(custom(function = "must_be_requested"))]
    pub generate_sample_data: bool,
}

fn must_be_requested(value: &bool) -> Result<(), ValidationError> {
    if *value {
        Ok(())
    } else {
        let mut error = ValidationError::new("generate_sample_data");
        error.message = Some("generate_sample_data must be true".into());
        Err(error)
    }
}
