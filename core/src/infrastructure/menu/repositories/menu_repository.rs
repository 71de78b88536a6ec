use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};
use tracing::error;

use crate::{
    domain::{
        analysis::extractor::MenuMetrics,
        common::entities::app_errors::CoreError,
        menu::{entities::Menu, ports::MenuRepository},
    },
    entity::menus::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresMenuRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct MetricsRow {
    rating: Option<f64>,
    calories: Option<f64>,
    cooking_time: Option<f64>,
    nutrition_score: Option<f64>,
    cost: Option<f64>,
}

impl From<MetricsRow> for MenuMetrics {
    fn from(row: MetricsRow) -> Self {
        Self {
            rating: row.rating,
            calories: row.calories,
            cooking_time: row.cooking_time,
            nutrition_score: row.nutrition_score,
            cost: row.cost,
        }
    }
}

fn map_insert_error(e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::AlreadyExists,
        _ => {
            error!("Failed to create menu: {}", e);
            CoreError::InternalServerError
        }
    }
}

impl MenuRepository for PostgresMenuRepository {
    async fn create_menu(&self, menu: Menu) -> Result<Menu, CoreError> {
        let created = Entity::insert(ActiveModel::from(&menu))
            .exec_with_returning(&self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(Menu::from(created))
    }

    async fn list_menus(&self) -> Result<Vec<Menu>, CoreError> {
        let models = Entity::find()
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list menus: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(Menu::from).collect())
    }

    async fn get_by_date(&self, date: NaiveDate) -> Result<Option<Menu>, CoreError> {
        let model = Entity::find()
            .filter(Column::Date.eq(date))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get menu by date: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Menu::from))
    }

    async fn list_metrics(&self) -> Result<Vec<MenuMetrics>, CoreError> {
        let rows = Entity::find()
            .select_only()
            .columns([
                Column::Rating,
                Column::Calories,
                Column::CookingTime,
                Column::NutritionScore,
                Column::Cost,
            ])
            .order_by_asc(Column::Date)
            .into_model::<MetricsRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list menu metrics: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(MenuMetrics::from).collect())
    }
}
