use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::analysis::{
    extractor::MenuField,
    regression::{DataPoint, RegressionResult},
};

/// A named `(x, y)` pairing from the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AnalysisPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub x_field: MenuField,
    pub y_field: MenuField,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalysisResult {
    pub x_label: String,
    pub y_label: String,
    pub data: Vec<DataPoint>,
    pub regression: RegressionResult,
}

impl AnalysisResult {
    pub fn new(x_field: &str, y_field: &str, data: Vec<DataPoint>, regression: RegressionResult) -> Self {
        Self {
            x_label: super::catalog::field_label(x_field).to_string(),
            y_label: super::catalog::field_label(y_field).to_string(),
            data,
            regression,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalysisReport {
    pub analyses: Vec<AnalysisResult>,
    /// Number of menus the analyses were drawn from.
    pub data_count: usize,
    pub patterns: Vec<AnalysisPattern>,
}
