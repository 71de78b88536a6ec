use chrono::NaiveDate;
use kondate_core::domain::menu::{entities::MenuCategory, value_objects::CreateMenuInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateMenuValidator {
    #[schema(example = "2025-05-01")]
    pub date: NaiveDate,
    #[validate(length(
        min = 1,
        max = 200,
        message = "main_dish must be between 1 and 200 characters"
    ))]
    pub main_dish: String,
    #[validate(length(max = 200))]
    pub side_dish: Option<String>,
    #[validate(length(max = 200))]
    pub soup: Option<String>,
    #[validate(length(max = 200))]
    pub rice: Option<String>,
    pub category: Option<MenuCategory>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[validate(range(min = 0.0))]
    pub calories: Option<f64>,
    #[validate(range(min = 0.0))]
    pub cooking_time: Option<f64>,
    #[validate(range(min = 0.0))]
    pub nutrition_score: Option<f64>,
    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
}

impl From<CreateMenuValidator> for CreateMenuInput {
    fn from(payload: CreateMenuValidator) -> Self {
        Self {
            date: payload.date,
            main_dish: payload.main_dish,
            side_dish: payload.side_dish,
            soup: payload.soup,
            rice: payload.rice,
            category: payload.category,
            description: payload.description,
            rating: payload.rating,
            calories: payload.calories,
            cooking_time: payload.cooking_time,
            nutrition_score: payload.nutrition_score,
            cost: payload.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: serde_json::Value) -> CreateMenuValidator {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn minimal_menu_is_valid() {
        let menu = payload(json!({ "date": "2025-05-01", "main_dish": "Tonkatsu" }));
        assert!(menu.validate().is_ok());
    }

    #[test]
    fn rating_above_five_is_rejected() {
        let menu = payload(json!({
            "date": "2025-05-01",
            "main_dish": "Tonkatsu",
            "rating": 5.5
        }));
        assert!(menu.validate().is_err());
    }

    #[test]
    fn negative_cost_is_rejected() {
        let menu = payload(json!({
            "date": "2025-05-01",
            "main_dish": "Tonkatsu",
            "cost": -1.0
        }));
        assert!(menu.validate().is_err());
    }

    #[test]
    fn empty_main_dish_is_rejected() {
        let menu = payload(json!({ "date": "2025-05-01", "main_dish": "" }));
        assert!(menu.validate().is_err());
    }
}
