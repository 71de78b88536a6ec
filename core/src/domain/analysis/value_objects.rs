use chrono::NaiveDate;

use crate::domain::menu::{entities::MenuCategory, value_objects::CreateMenuInput};

#[derive(Debug, Clone, Default)]
pub struct RunAnalysisInput {
    pub pattern_id: Option<String>,
    pub x_field: Option<String>,
    pub y_field: Option<String>,
}

/// What a caller asked to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisSelection {
    Pattern(String),
    Custom { x_field: String, y_field: String },
    All,
}

impl From<RunAnalysisInput> for AnalysisSelection {
    // A lone x or y falls through to the full sweep.
    fn from(input: RunAnalysisInput) -> Self {
        match input {
            RunAnalysisInput {
                pattern_id: Some(id),
                ..
            } if !id.is_empty() => AnalysisSelection::Pattern(id),
            RunAnalysisInput {
                x_field: Some(x_field),
                y_field: Some(y_field),
                ..
            } if !x_field.is_empty() && !y_field.is_empty() => {
                AnalysisSelection::Custom { x_field, y_field }
            }
            _ => AnalysisSelection::All,
        }
    }
}

struct SampleMenu {
    date: (i32, u32, u32),
    main_dish: &'static str,
    category: MenuCategory,
    rating: f64,
    calories: f64,
    cooking_time: f64,
    nutrition_score: f64,
    cost: f64,
}

const SAMPLE_MENUS: [SampleMenu; 5] = [
    SampleMenu {
        date: (2024, 1, 1),
        main_dish: "Hamburg steak",
        category: MenuCategory::Western,
        rating: 4.5,
        calories: 650.0,
        cooking_time: 45.0,
        nutrition_score: 7.5,
        cost: 800.0,
    },
    SampleMenu {
        date: (2024, 1, 2),
        main_dish: "Ginger pork",
        category: MenuCategory::Japanese,
        rating: 4.0,
        calories: 580.0,
        cooking_time: 20.0,
        nutrition_score: 8.0,
        cost: 600.0,
    },
    SampleMenu {
        date: (2024, 1, 3),
        main_dish: "Mapo tofu",
        category: MenuCategory::Chinese,
        rating: 3.8,
        calories: 520.0,
        cooking_time: 30.0,
        nutrition_score: 6.5,
        cost: 550.0,
    },
    SampleMenu {
        date: (2024, 1, 4),
        main_dish: "Salmon meuniere",
        category: MenuCategory::Western,
        rating: 4.8,
        calories: 450.0,
        cooking_time: 25.0,
        nutrition_score: 9.0,
        cost: 1200.0,
    },
    SampleMenu {
        date: (2024, 1, 5),
        main_dish: "Oyakodon",
        category: MenuCategory::Japanese,
        rating: 4.2,
        calories: 680.0,
        cooking_time: 15.0,
        nutrition_score: 7.0,
        cost: 450.0,
    },
];

/// Fixed demo menus used to populate an empty database for analysis.
pub fn sample_menus() -> Vec<CreateMenuInput> {
    SAMPLE_MENUS
        .iter()
        .filter_map(|sample| {
            let (y, m, d) = sample.date;
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(CreateMenuInput {
                date,
                main_dish: sample.main_dish.to_string(),
                side_dish: None,
                soup: None,
                rice: None,
                category: Some(sample.category),
                description: None,
                rating: Some(sample.rating),
                calories: Some(sample.calories),
                cooking_time: Some(sample.cooking_time),
                nutrition_score: Some(sample.nutrition_score),
                cost: Some(sample.cost),
            })
        })
        .collect()
}
