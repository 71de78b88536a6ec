use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::menu::entities::{MenuCategory, MenuConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMenuInput {
    pub date: NaiveDate,
    pub main_dish: String,
    pub side_dish: Option<String>,
    pub soup: Option<String>,
    pub rice: Option<String>,
    pub category: Option<MenuCategory>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub calories: Option<f64>,
    pub cooking_time: Option<f64>,
    pub nutrition_score: Option<f64>,
    pub cost: Option<f64>,
}

impl From<CreateMenuInput> for MenuConfig {
    fn from(input: CreateMenuInput) -> Self {
        Self {
            date: input.date,
            main_dish: input.main_dish,
            side_dish: non_empty(input.side_dish),
            soup: non_empty(input.soup),
            rice: non_empty(input.rice),
            category: input.category.unwrap_or_default(),
            description: non_empty(input.description),
            rating: input.rating,
            calories: input.calories,
            cooking_time: input.cooking_time,
            nutrition_score: input.nutrition_score,
            cost: input.cost,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct ExtractMenuFromImageInput {
    pub image_data: Vec<u8>,
    pub mime_type: String,
}

/// Menu fields as read by the vision model. Unknown parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedMenu {
    #[serde(default, alias = "mainDish")]
    pub main_dish: String,
    #[serde(default, alias = "sideDish")]
    pub side_dish: String,
    #[serde(default)]
    pub soup: String,
    #[serde(default)]
    pub rice: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuExtraction {
    pub menu: ExtractedMenu,
    pub original_response: String,
}
