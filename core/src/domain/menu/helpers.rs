use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use crate::domain::menu::{
    entities::{MenuCategory, MenuConfig},
    value_objects::ExtractedMenu,
};

static JSON_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[\s\S]*\}").expect("JSON object pattern is valid")
});

pub const UNIDENTIFIED_DISH: &str = "Could not identify a dish from the image";

/// Pull the first `{ ... }` block out of a model reply and parse it.
pub fn parse_menu_json(raw: &str) -> Option<ExtractedMenu> {
    let block = JSON_OBJECT.find(raw)?;
    match serde_json::from_str::<ExtractedMenu>(block.as_str()) {
        Ok(menu) => Some(menu),
        Err(e) => {
            warn!("Model reply contained malformed menu JSON: {}", e);
            None
        }
    }
}

/// Parse an image-extraction reply, falling back to a placeholder menu.
pub fn extracted_menu_or_fallback(raw: &str) -> ExtractedMenu {
    parse_menu_json(raw).unwrap_or_else(|| ExtractedMenu {
        main_dish: UNIDENTIFIED_DISH.to_string(),
        category: MenuCategory::Other.as_str().to_string(),
        description: raw.to_string(),
        ..Default::default()
    })
}

/// Build today's menu from a suggestion reply.
///
/// Falls back to a fixed Japanese set menu when the reply has no usable JSON;
/// the description always keeps the model's full answer.
pub fn menu_from_suggestion(date: NaiveDate, raw: &str) -> MenuConfig {
    let description = Some(raw.to_string());

    match parse_menu_json(raw).filter(|m| !m.main_dish.trim().is_empty()) {
        Some(menu) => MenuConfig {
            date,
            main_dish: menu.main_dish,
            side_dish: Some(menu.side_dish).filter(|s| !s.is_empty()),
            soup: Some(menu.soup).filter(|s| !s.is_empty()),
            rice: Some(menu.rice).filter(|s| !s.is_empty()),
            category: MenuCategory::from_label(&menu.category),
            description,
            ..Default::default()
        },
        None => MenuConfig {
            date,
            main_dish: "Ginger pork".to_string(),
            side_dish: Some("Cabbage salad".to_string()),
            soup: Some("Wakame miso soup".to_string()),
            rice: Some("Steamed rice".to_string()),
            category: MenuCategory::Japanese,
            description,
            ..Default::default()
        },
    }
}
