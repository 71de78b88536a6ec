use chrono::Local;
use tracing::{info, instrument, warn};

use crate::domain::{
    chat::ports::ChatRelayClient,
    common::{entities::app_errors::CoreError, services::Service},
    menu::{
        entities::{Menu, MenuConfig},
        helpers::{extracted_menu_or_fallback, menu_from_suggestion},
        ports::{LLMClient, MenuRepository, MenuService},
        prompts::{IMAGE_EXTRACTION_PROMPT, TODAY_MENU_SYSTEM_PROMPT, TODAY_MENU_USER_PROMPT},
        value_objects::{CreateMenuInput, ExtractMenuFromImageInput, MenuExtraction},
    },
};

const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";
const EMPTY_SUGGESTION: &str = "Failed to generate a menu suggestion";

impl<M, LLM, CH> MenuService for Service<M, LLM, CH>
where
    M: MenuRepository,
    LLM: LLMClient,
    CH: ChatRelayClient,
{
    async fn list_menus(&self) -> Result<Vec<Menu>, CoreError> {
        self.menu_repository.list_menus().await
    }

    #[instrument(skip(self, input), fields(date = %input.date))]
    async fn create_menu(&self, input: CreateMenuInput) -> Result<Menu, CoreError> {
        if input.main_dish.trim().is_empty() {
            return Err(CoreError::Invalid("main dish is required".to_string()));
        }

        let menu = Menu::new(MenuConfig::from(input));
        let menu = self.menu_repository.create_menu(menu).await?;

        info!(menu_id = %menu.id, "Menu created");
        Ok(menu)
    }

    #[instrument(skip(self))]
    async fn get_today_menu(&self) -> Result<Menu, CoreError> {
        let today = Local::now().date_naive();

        if let Some(menu) = self.menu_repository.get_by_date(today).await? {
            return Ok(menu);
        }

        // 1. Ask the model for a suggestion
        let raw = self
            .llm_client
            .generate_with_text(
                TODAY_MENU_SYSTEM_PROMPT.to_string(),
                TODAY_MENU_USER_PROMPT.to_string(),
            )
            .await?;
        let raw = if raw.trim().is_empty() {
            EMPTY_SUGGESTION.to_string()
        } else {
            raw
        };

        // 2. Store it as today's menu
        let menu = Menu::new(menu_from_suggestion(today, &raw));
        match self.menu_repository.create_menu(menu).await {
            Ok(menu) => {
                info!(menu_id = %menu.id, "Stored suggested menu for today");
                Ok(menu)
            }
            Err(CoreError::AlreadyExists) => {
                // Another request stored today's menu first.
                warn!("Today's menu was created concurrently, returning the stored one");
                self.menu_repository
                    .get_by_date(today)
                    .await?
                    .ok_or(CoreError::NotFound)
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self, input), fields(size = input.image_data.len(), mime_type = %input.mime_type))]
    async fn extract_menu_from_image(
        &self,
        input: ExtractMenuFromImageInput,
    ) -> Result<MenuExtraction, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("image is empty".to_string()));
        }

        let mime_type = if input.mime_type.trim().is_empty() {
            DEFAULT_IMAGE_MIME_TYPE.to_string()
        } else {
            input.mime_type
        };

        let raw = self
            .llm_client
            .generate_with_image(IMAGE_EXTRACTION_PROMPT.to_string(), input.image_data, mime_type)
            .await?;

        Ok(MenuExtraction {
            menu: extracted_menu_or_fallback(&raw),
            original_response: raw,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        chat::ports::MockChatRelayClient,
        menu::{
            entities::MenuCategory,
            helpers::UNIDENTIFIED_DISH,
            ports::{MockLLMClient, MockMenuRepository},
        },
    };

    type TestService = Service<MockMenuRepository, MockLLMClient, MockChatRelayClient>;

    fn service(menu_repository: MockMenuRepository, llm_client: MockLLMClient) -> TestService {
        Service::new(menu_repository, llm_client, MockChatRelayClient::new())
    }

    fn input(main_dish: &str) -> CreateMenuInput {
        CreateMenuInput {
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            main_dish: main_dish.to_string(),
            side_dish: Some("  ".to_string()),
            soup: Some("Miso soup".to_string()),
            rice: None,
            category: None,
            description: None,
            rating: Some(4.0),
            calories: None,
            cooking_time: None,
            nutrition_score: None,
            cost: None,
        }
    }

    #[tokio::test]
    async fn create_menu_applies_defaults() {
        let mut repository = MockMenuRepository::new();
        repository
            .expect_create_menu()
            .times(1)
            .returning(|menu| Box::pin(async move { Ok(menu) }));

        let menu = service(repository, MockLLMClient::new())
            .create_menu(input("Tonkatsu"))
            .await
            .unwrap();

        assert_eq!(menu.main_dish, "Tonkatsu");
        assert_eq!(menu.category, MenuCategory::Japanese);
        assert_eq!(menu.side_dish, None);
        assert_eq!(menu.soup.as_deref(), Some("Miso soup"));
        assert_eq!(menu.rating, Some(4.0));
    }

    #[tokio::test]
    async fn create_menu_rejects_blank_main_dish() {
        let mut repository = MockMenuRepository::new();
        repository.expect_create_menu().never();

        let err = service(repository, MockLLMClient::new())
            .create_menu(input("   "))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn today_menu_is_returned_when_recorded() {
        let stored = Menu::new(MenuConfig {
            date: Local::now().date_naive(),
            main_dish: "Nikujaga".to_string(),
            ..Default::default()
        });
        let expected = stored.clone();

        let mut repository = MockMenuRepository::new();
        repository.expect_get_by_date().times(1).returning(move |_| {
            let menu = stored.clone();
            Box::pin(async move { Ok(Some(menu)) })
        });
        repository.expect_create_menu().never();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();

        let menu = service(repository, llm).get_today_menu().await.unwrap();
        assert_eq!(menu, expected);
    }

    #[tokio::test]
    async fn today_menu_is_generated_and_stored() {
        let mut repository = MockMenuRepository::new();
        repository
            .expect_get_by_date()
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));
        repository
            .expect_create_menu()
            .times(1)
            .returning(|menu| Box::pin(async move { Ok(menu) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(async {
                Ok("Try this: {\"mainDish\": \"Saba miso\", \"soup\": \"Tonjiru\", \
                    \"category\": \"和食\"}"
                    .to_string())
            })
        });

        let menu = service(repository, llm).get_today_menu().await.unwrap();

        assert_eq!(menu.date, Local::now().date_naive());
        assert_eq!(menu.main_dish, "Saba miso");
        assert_eq!(menu.soup.as_deref(), Some("Tonjiru"));
        assert!(menu.description.unwrap().starts_with("Try this"));
    }

    #[tokio::test]
    async fn empty_suggestion_still_stores_default_menu() {
        let mut repository = MockMenuRepository::new();
        repository
            .expect_get_by_date()
            .returning(|_| Box::pin(async { Ok(None) }));
        repository
            .expect_create_menu()
            .returning(|menu| Box::pin(async move { Ok(menu) }));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok(String::new()) }));

        let menu = service(repository, llm).get_today_menu().await.unwrap();

        assert_eq!(menu.main_dish, "Ginger pork");
        assert_eq!(menu.description.as_deref(), Some(EMPTY_SUGGESTION));
    }

    #[tokio::test]
    async fn llm_failure_propagates_from_today_menu() {
        let mut repository = MockMenuRepository::new();
        repository
            .expect_get_by_date()
            .returning(|_| Box::pin(async { Ok(None) }));
        repository.expect_create_menu().never();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
        });

        let err = service(repository, llm).get_today_menu().await.unwrap_err();
        assert_eq!(err, CoreError::ExternalServiceError("timeout".to_string()));
    }

    #[tokio::test]
    async fn image_extraction_parses_model_reply() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|_, data, mime| data == &vec![1u8, 2, 3] && mime == DEFAULT_IMAGE_MIME_TYPE)
            .times(1)
            .returning(|_, _, _| {
                Box::pin(async {
                    Ok("{\"mainDish\": \"Karaage\", \"rice\": \"Rice\", \"category\": \"和食\"}"
                        .to_string())
                })
            });

        let extraction = service(MockMenuRepository::new(), llm)
            .extract_menu_from_image(ExtractMenuFromImageInput {
                image_data: vec![1, 2, 3],
                mime_type: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(extraction.menu.main_dish, "Karaage");
        assert_eq!(extraction.menu.rice, "Rice");
        assert!(extraction.original_response.contains("Karaage"));
    }

    #[tokio::test]
    async fn image_extraction_falls_back_on_prose() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .returning(|_, _, _| Box::pin(async { Ok("A blurry plate.".to_string()) }));

        let extraction = service(MockMenuRepository::new(), llm)
            .extract_menu_from_image(ExtractMenuFromImageInput {
                image_data: vec![0xff],
                mime_type: "image/png".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(extraction.menu.main_dish, UNIDENTIFIED_DISH);
        assert_eq!(extraction.menu.description, "A blurry plate.");
    }

    #[tokio::test]
    async fn image_extraction_rejects_empty_upload() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().never();

        let err = service(MockMenuRepository::new(), llm)
            .extract_menu_from_image(ExtractMenuFromImageInput {
                image_data: Vec::new(),
                mime_type: "image/png".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }
}
