//! Simple (single-variable) linear regression.
//!
//! Fits `y = slope * x + intercept` by ordinary least squares using the
//! closed-form sums:
//!
//! ```text
//! slope       = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! intercept   = ȳ − slope·x̄
//! correlation = (n·Σxy − Σx·Σy) / (√(n·Σx² − (Σx)²) · √(n·Σy² − (Σy)²))
//! ```
//!
//! The computation is pure and synchronous over an in-memory slice.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single `(x, y)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RegressionError {
    #[error("regression needs at least 2 data points, got {found}")]
    InsufficientData { found: usize },

    /// Every x value is identical, so the fitted line has no defined slope.
    #[error("x values have zero variance, slope is undefined")]
    DegenerateInput,
}

/// The fitted line, usable as a prediction function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    pub slope: f64,
    pub intercept: f64,
}

impl Prediction {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson's r. `NaN` or an arbitrary value when y has (near-)zero variance.
    pub correlation: f64,
    /// Always `correlation * correlation`.
    pub r_squared: f64,
    pub equation: String,
    #[serde(skip)]
    pub prediction: Prediction,
    pub summary: String,
}

impl RegressionResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.prediction.evaluate(x)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Sums {
    n: f64,
    x: f64,
    y: f64,
    xy: f64,
    xx: f64,
    yy: f64,
}

impl Sums {
    fn accumulate(points: &[DataPoint]) -> Self {
        points.iter().fold(Sums::default(), |acc, p| Sums {
            n: acc.n + 1.0,
            x: acc.x + p.x,
            y: acc.y + p.y,
            xy: acc.xy + p.x * p.y,
            xx: acc.xx + p.x * p.x,
            yy: acc.yy + p.y * p.y,
        })
    }
}

/// Run ordinary least squares over `points`.
pub fn compute_regression(points: &[DataPoint]) -> Result<RegressionResult, RegressionError> {
    if points.len() < 2 {
        return Err(RegressionError::InsufficientData {
            found: points.len(),
        });
    }

    let s = Sums::accumulate(points);

    let mean_x = s.x / s.n;
    let mean_y = s.y / s.n;

    let numerator = s.n * s.xy - s.x * s.y;
    let spread_x = s.n * s.xx - s.x * s.x;
    let spread_y = s.n * s.yy - s.y * s.y;

    let first_x = points[0].x;
    if spread_x == 0.0 || points.iter().all(|p| p.x == first_x) {
        return Err(RegressionError::DegenerateInput);
    }

    let slope = numerator / spread_x;
    let intercept = mean_y - slope * mean_x;

    let correlation = numerator / (spread_x.sqrt() * spread_y.sqrt());
    let r_squared = correlation * correlation;

    Ok(RegressionResult {
        slope,
        intercept,
        correlation,
        r_squared,
        equation: format_equation(slope, intercept),
        prediction: Prediction { slope, intercept },
        summary: summarize(correlation),
    })
}

fn format_equation(slope: f64, intercept: f64) -> String {
    format!("y = {slope:.4}x + {intercept:.4}")
}

/// Qualitative reading of a correlation coefficient.
///
/// Zero (and `NaN`) land in the negative branch.
pub fn summarize(correlation: f64) -> String {
    let strength = correlation.abs();
    let tier = if strength >= 0.8 {
        "strong relationship"
    } else if strength >= 0.5 {
        "moderate relationship"
    } else if strength >= 0.3 {
        "weak relationship"
    } else {
        "almost no relationship"
    };

    let direction = if correlation > 0.0 {
        "(positive correlation)"
    } else {
        "(negative correlation)"
    };

    format!("{tier} {direction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(f64, f64)]) -> Vec<DataPoint> {
        raw.iter().copied().map(DataPoint::from).collect()
    }

    #[test]
    fn perfect_positive_line() {
        let result = compute_regression(&points(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)])).unwrap();

        assert!((result.slope - 2.0).abs() < 1e-12);
        assert!(result.intercept.abs() < 1e-12);
        assert!((result.correlation - 1.0).abs() < 1e-12);
        assert!((result.r_squared - 1.0).abs() < 1e-12);
        assert!(result.summary.contains("strong"));
        assert!(result.summary.contains("positive"));
        assert_eq!(result.equation, "y = 2.0000x + 0.0000");
    }

    #[test]
    fn perfect_negative_line() {
        let result = compute_regression(&points(&[
            (1.0, 5.0),
            (2.0, 4.0),
            (3.0, 3.0),
            (4.0, 2.0),
            (5.0, 1.0),
        ]))
        .unwrap();

        assert!((result.slope + 1.0).abs() < 1e-12);
        assert!((result.intercept - 6.0).abs() < 1e-12);
        assert!((result.correlation + 1.0).abs() < 1e-12);
        assert!(result.summary.contains("strong"));
        assert!(result.summary.contains("negative"));
        assert_eq!(result.equation, "y = -1.0000x + 6.0000");
    }

    #[test]
    fn single_point_is_insufficient() {
        let err = compute_regression(&points(&[(1.0, 1.0)])).unwrap_err();
        assert_eq!(err, RegressionError::InsufficientData { found: 1 });
    }

    #[test]
    fn empty_input_is_insufficient() {
        let err = compute_regression(&[]).unwrap_err();
        assert_eq!(err, RegressionError::InsufficientData { found: 0 });
    }

    #[test]
    fn identical_x_values_are_degenerate() {
        let err = compute_regression(&points(&[(3.0, 1.0), (3.0, 2.0), (3.0, 5.0)])).unwrap_err();
        assert_eq!(err, RegressionError::DegenerateInput);
    }

    #[test]
    fn constant_y_has_flat_slope_and_undefined_correlation() {
        let result = compute_regression(&points(&[(1.0, 4.0), (2.0, 4.0), (3.0, 4.0)])).unwrap();

        assert_eq!(result.slope, 0.0);
        assert!((result.intercept - 4.0).abs() < 1e-12);
        assert!(result.correlation.is_nan());
        assert!(result.r_squared.is_nan());
        assert_eq!(result.summary, "almost no relationship (negative correlation)");
    }

    #[test]
    fn prediction_matches_line_at_every_input() {
        let data = points(&[(10.0, 3.1), (20.0, 3.9), (35.0, 4.4), (45.0, 4.2), (60.0, 4.8)]);
        let result = compute_regression(&data).unwrap();

        for p in &data {
            assert_eq!(result.predict(p.x), result.slope * p.x + result.intercept);
        }
        assert_eq!(result.predict(-7.5), result.slope * -7.5 + result.intercept);
    }

    #[test]
    fn r_squared_is_correlation_squared() {
        let data = points(&[(650.0, 4.5), (580.0, 4.0), (520.0, 3.8), (450.0, 4.8), (680.0, 4.2)]);
        let result = compute_regression(&data).unwrap();

        assert!((result.r_squared - result.correlation * result.correlation).abs() < 1e-12);
        assert!((-1.0..=1.0).contains(&result.correlation));
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let data = points(&[(45.0, 4.5), (20.0, 4.0), (30.0, 3.8), (25.0, 4.8), (15.0, 4.2)]);
        let a = compute_regression(&data).unwrap();
        let b = compute_regression(&data).unwrap();

        assert_eq!(a.slope.to_bits(), b.slope.to_bits());
        assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
        assert_eq!(a.correlation.to_bits(), b.correlation.to_bits());
        assert_eq!(a.r_squared.to_bits(), b.r_squared.to_bits());
    }

    #[test]
    fn summary_tiers() {
        assert_eq!(summarize(0.85), "strong relationship (positive correlation)");
        assert_eq!(summarize(-0.8), "strong relationship (negative correlation)");
        assert_eq!(summarize(0.6), "moderate relationship (positive correlation)");
        assert_eq!(summarize(-0.3), "weak relationship (negative correlation)");
        assert_eq!(summarize(0.1), "almost no relationship (positive correlation)");
    }

    #[test]
    fn zero_correlation_reads_as_negative() {
        assert_eq!(summarize(0.0), "almost no relationship (negative correlation)");
    }

    #[test]
    fn prediction_is_skipped_when_serialized() {
        let result = compute_regression(&points(&[(1.0, 2.0), (2.0, 4.0)])).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("prediction").is_none());
        assert_eq!(json["equation"], "y = 2.0000x + 0.0000");
    }
}
