use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::analysis::regression::DataPoint;

/// Numeric menu attributes that can be put on either axis of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum MenuField {
    Rating,
    Calories,
    CookingTime,
    NutritionScore,
    Cost,
}

impl MenuField {
    pub const ALL: [MenuField; 5] = [
        MenuField::Rating,
        MenuField::Calories,
        MenuField::CookingTime,
        MenuField::NutritionScore,
        MenuField::Cost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuField::Rating => "rating",
            MenuField::Calories => "calories",
            MenuField::CookingTime => "cookingTime",
            MenuField::NutritionScore => "nutritionScore",
            MenuField::Cost => "cost",
        }
    }
}

impl fmt::Display for MenuField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for MenuField {
    type Err = UnknownFieldError;

    // Only the exact wire names; anything else is unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(MenuField::Rating),
            "calories" => Ok(MenuField::Calories),
            "cookingTime" => Ok(MenuField::CookingTime),
            "nutritionScore" => Ok(MenuField::NutritionScore),
            "cost" => Ok(MenuField::Cost),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

/// A record carrying optional numeric menu attributes.
pub trait NumericAttributes {
    fn field_value(&self, field: MenuField) -> Option<f64>;
}

/// The numeric columns of a menu, without the descriptive fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuMetrics {
    pub rating: Option<f64>,
    pub calories: Option<f64>,
    pub cooking_time: Option<f64>,
    pub nutrition_score: Option<f64>,
    pub cost: Option<f64>,
}

impl NumericAttributes for MenuMetrics {
    fn field_value(&self, field: MenuField) -> Option<f64> {
        match field {
            MenuField::Rating => self.rating,
            MenuField::Calories => self.calories,
            MenuField::CookingTime => self.cooking_time,
            MenuField::NutritionScore => self.nutrition_score,
            MenuField::Cost => self.cost,
        }
    }
}

/// Project records onto `(x, y)` pairs.
///
/// Records missing either field are skipped silently; order is preserved.
pub fn extract<R: NumericAttributes>(records: &[R], x: MenuField, y: MenuField) -> Vec<DataPoint> {
    records
        .iter()
        .filter_map(|record| match (record.field_value(x), record.field_value(y)) {
            (Some(x), Some(y)) => Some(DataPoint { x, y }),
            _ => None,
        })
        .collect()
}

/// Same as [`extract`], with field names as given by a caller.
///
/// An unrecognized name yields no points.
pub fn extract_by_name<R: NumericAttributes>(records: &[R], x: &str, y: &str) -> Vec<DataPoint> {
    match (x.parse::<MenuField>(), y.parse::<MenuField>()) {
        (Ok(x), Ok(y)) => extract(records, x, y),
        _ => Vec::new(),
    }
}
