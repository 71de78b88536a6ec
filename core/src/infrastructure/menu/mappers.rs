use sea_orm::ActiveValue::Set;

use crate::{
    domain::menu::entities::{Menu, MenuCategory},
    entity::menus,
};

impl From<&menus::Model> for Menu {
    fn from(model: &menus::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            main_dish: model.main_dish.clone(),
            side_dish: model.side_dish.clone(),
            soup: model.soup.clone(),
            rice: model.rice.clone(),
            category: MenuCategory::from(model.category.as_str()),
            description: model.description.clone(),
            rating: model.rating,
            calories: model.calories,
            cooking_time: model.cooking_time,
            nutrition_score: model.nutrition_score,
            cost: model.cost,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<menus::Model> for Menu {
    fn from(model: menus::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Menu> for menus::ActiveModel {
    fn from(menu: &Menu) -> Self {
        Self {
            id: Set(menu.id),
            date: Set(menu.date),
            main_dish: Set(menu.main_dish.clone()),
            side_dish: Set(menu.side_dish.clone()),
            soup: Set(menu.soup.clone()),
            rice: Set(menu.rice.clone()),
            category: Set(menu.category.as_str().to_string()),
            description: Set(menu.description.clone()),
            rating: Set(menu.rating),
            calories: Set(menu.calories),
            cooking_time: Set(menu.cooking_time),
            nutrition_score: Set(menu.nutrition_score),
            cost: Set(menu.cost),
            created_at: Set(menu.created_at.fixed_offset()),
            updated_at: Set(menu.updated_at.fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn stored_category_round_trips() {
        let now = Utc::now().fixed_offset();
        let model = menus::Model {
            id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            main_dish: "Mapo tofu".to_string(),
            side_dish: None,
            soup: Some("Egg drop soup".to_string()),
            rice: None,
            category: "chinese".to_string(),
            description: None,
            rating: Some(3.8),
            calories: Some(520.0),
            cooking_time: Some(30.0),
            nutrition_score: Some(6.5),
            cost: Some(550.0),
            created_at: now,
            updated_at: now,
        };

        let menu = Menu::from(&model);
        assert_eq!(menu.category, MenuCategory::Chinese);
        assert_eq!(menu.cooking_time, Some(30.0));

        let active = menus::ActiveModel::from(&menu);
        assert_eq!(active.category, Set("chinese".to_string()));
        assert_eq!(active.date, Set(model.date));
    }
}
