use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub date: Date,
    pub main_dish: String,
    pub side_dish: Option<String>,
    pub soup: Option<String>,
    pub rice: Option<String>,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub calories: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub cooking_time: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub nutrition_score: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub cost: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
