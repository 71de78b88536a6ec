use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    analysis::extractor::{MenuField, NumericAttributes},
    common::generate_timestamp,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Menu {
    pub id: Uuid,
    pub date: NaiveDate,
    pub main_dish: String,
    pub side_dish: Option<String>,
    pub soup: Option<String>,
    pub rice: Option<String>,
    pub category: MenuCategory,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub calories: Option<f64>,
    pub cooking_time: Option<f64>, // minutes
    pub nutrition_score: Option<f64>,
    pub cost: Option<f64>, // yen
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    #[default]
    Japanese,
    Western,
    Chinese,
    Other,
}

impl MenuCategory {
    pub fn as_str(&self) -> &str {
        match self {
            MenuCategory::Japanese => "japanese",
            MenuCategory::Western => "western",
            MenuCategory::Chinese => "chinese",
            MenuCategory::Other => "other",
        }
    }

    /// Lenient mapping for labels produced by the vision model.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "japanese" | "washoku" | "和食" => MenuCategory::Japanese,
            "western" | "yoshoku" | "洋食" => MenuCategory::Western,
            "chinese" | "chuka" | "中華" => MenuCategory::Chinese,
            _ => MenuCategory::Other,
        }
    }
}

impl From<&str> for MenuCategory {
    fn from(s: &str) -> Self {
        MenuCategory::from_label(s)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuConfig {
    pub date: NaiveDate,
    pub main_dish: String,
    pub side_dish: Option<String>,
    pub soup: Option<String>,
    pub rice: Option<String>,
    pub category: MenuCategory,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub calories: Option<f64>,
    pub cooking_time: Option<f64>,
    pub nutrition_score: Option<f64>,
    pub cost: Option<f64>,
}

impl Menu {
    pub fn new(config: MenuConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            date: config.date,
            main_dish: config.main_dish,
            side_dish: config.side_dish,
            soup: config.soup,
            rice: config.rice,
            category: config.category,
            description: config.description,
            rating: config.rating,
            calories: config.calories,
            cooking_time: config.cooking_time,
            nutrition_score: config.nutrition_score,
            cost: config.cost,
            created_at: now,
            updated_at: now,
        }
    }
}

impl NumericAttributes for Menu {
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
