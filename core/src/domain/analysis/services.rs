use tracing::{info, instrument, warn};

use crate::domain::{
    analysis::{
        catalog::{ANALYSIS_PATTERNS, find_pattern},
        entities::{AnalysisReport, AnalysisResult},
        extractor::{MenuMetrics, extract, extract_by_name},
        ports::AnalysisService,
        regression::{DataPoint, RegressionError, compute_regression},
        value_objects::{AnalysisSelection, RunAnalysisInput, sample_menus},
    },
    chat::ports::ChatRelayClient,
    common::{entities::app_errors::CoreError, services::Service},
    menu::{
        entities::{Menu, MenuConfig},
        ports::{LLMClient, MenuRepository},
    },
};

const MIN_POINTS: usize = 2;

fn analyze(x_field: &str, y_field: &str, data: Vec<DataPoint>) -> Result<AnalysisResult, CoreError> {
    if data.len() < MIN_POINTS {
        return Err(CoreError::InsufficientData(format!(
            "{x_field} / {y_field}: {} usable data points, at least {MIN_POINTS} are required",
            data.len()
        )));
    }

    let regression = compute_regression(&data)?;
    Ok(AnalysisResult::new(x_field, y_field, data, regression))
}

fn sweep(metrics: &[MenuMetrics]) -> Vec<AnalysisResult> {
    ANALYSIS_PATTERNS
        .iter()
        .filter_map(|pattern| {
            let data = extract(metrics, pattern.x_field, pattern.y_field);
            if data.len() < MIN_POINTS {
                return None;
            }

            match compute_regression(&data) {
                Ok(regression) => Some(AnalysisResult::new(
                    pattern.x_field.as_str(),
                    pattern.y_field.as_str(),
                    data,
                    regression,
                )),
                Err(RegressionError::DegenerateInput) => {
                    warn!(pattern = pattern.id, "Skipping pattern, x values do not vary");
                    None
                }
                Err(e) => {
                    warn!(pattern = pattern.id, "Skipping pattern: {}", e);
                    None
                }
            }
        })
        .collect()
}

impl<M, LLM, CH> AnalysisService for Service<M, LLM, CH>
where
    M: MenuRepository,
    LLM: LLMClient,
    CH: ChatRelayClient,
{
    #[instrument(skip(self))]
    async fn run_analysis(&self, input: RunAnalysisInput) -> Result<AnalysisReport, CoreError> {
        let metrics = self.menu_repository.list_metrics().await?;

        if metrics.len() < MIN_POINTS {
            return Err(CoreError::InsufficientData(format!(
                "at least {MIN_POINTS} menus are required, found {}",
                metrics.len()
            )));
        }

        let analyses = match AnalysisSelection::from(input) {
            AnalysisSelection::Pattern(id) => {
                let pattern = find_pattern(&id).ok_or(CoreError::NotFound)?;
                let data = extract(&metrics, pattern.x_field, pattern.y_field);
                vec![analyze(
                    pattern.x_field.as_str(),
                    pattern.y_field.as_str(),
                    data,
                )?]
            }
            AnalysisSelection::Custom { x_field, y_field } => {
                let data = extract_by_name(&metrics, &x_field, &y_field);
                vec![analyze(&x_field, &y_field, data)?]
            }
            AnalysisSelection::All => sweep(&metrics),
        };

        info!(
            analyses = analyses.len(),
            data_count = metrics.len(),
            "Analysis completed"
        );

        Ok(AnalysisReport {
            analyses,
            data_count: metrics.len(),
            patterns: ANALYSIS_PATTERNS.to_vec(),
        })
    }

    #[instrument(skip(self))]
    async fn seed_sample_menus(&self) -> Result<usize, CoreError> {
        let mut created = 0;

        for input in sample_menus() {
            let date = input.date;
            match self
                .menu_repository
                .create_menu(Menu::new(MenuConfig::from(input)))
                .await
            {
                Ok(_) => created += 1,
                Err(e) => warn!(%date, "Skipping sample menu: {}", e),
            }
        }

        info!(created, "Sample menus seeded");
        Ok(created)
    }
}
