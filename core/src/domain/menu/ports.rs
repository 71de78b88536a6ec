use chrono::NaiveDate;

use crate::domain::{
    analysis::extractor::MenuMetrics,
    common::entities::app_errors::CoreError,
    menu::{
        entities::Menu,
        value_objects::{CreateMenuInput, ExtractMenuFromImageInput, MenuExtraction},
    },
};

/// Repository trait for menu persistence
#[cfg_attr(test, mockall::automock)]
pub trait MenuRepository: Send + Sync {
    fn create_menu(&self, menu: Menu) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    /// All menus, newest date first.
    fn list_menus(&self) -> impl Future<Output = Result<Vec<Menu>, CoreError>> + Send;

    fn get_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Option<Menu>, CoreError>> + Send;

    /// Only the numeric columns of every menu.
    fn list_metrics(&self) -> impl Future<Output = Result<Vec<MenuMetrics>, CoreError>> + Send;
}

/// LLM Client trait for calling chat completion models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        system_prompt: String,
        user_prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for menu business logic
#[cfg_attr(test, mockall::automock)]
pub trait MenuService: Send + Sync {
    fn list_menus(&self) -> impl Future<Output = Result<Vec<Menu>, CoreError>> + Send;

    fn create_menu(
        &self,
        input: CreateMenuInput,
    ) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    /// Today's menu, suggested by the LLM and stored if none was recorded.
    fn get_today_menu(&self) -> impl Future<Output = Result<Menu, CoreError>> + Send;

    fn extract_menu_from_image(
        &self,
        input: ExtractMenuFromImageInput,
    ) -> impl Future<Output = Result<MenuExtraction, CoreError>> + Send;
}
