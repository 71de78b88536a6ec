use crate::domain::{
    analysis::{entities::AnalysisReport, value_objects::RunAnalysisInput},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    /// Run one catalog pattern, one custom pair, or the whole catalog over stored menus.
    fn run_analysis(
        &self,
        input: RunAnalysisInput,
    ) -> impl Future<Output = Result<AnalysisReport, CoreError>> + Send;

    /// Insert the demo menus, returning how many were created.
    fn seed_sample_menus(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
