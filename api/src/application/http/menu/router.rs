use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_menu::{__path_create_menu, create_menu},
    extract_menu_from_image::{
        __path_extract_menu_from_image, MAX_IMAGE_SIZE, extract_menu_from_image,
    },
    get_today_menu::{__path_get_today_menu, get_today_menu},
    list_menus::{__path_list_menus, list_menus},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_menus, create_menu, get_today_menu, extract_menu_from_image))]
pub struct MenuApiDoc;

pub fn menu_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/menus", state.args.server.root_path),
            get(list_menus).post(create_menu),
        )
        .route(
            &format!("{}/menus/today", state.args.server.root_path),
            get(get_today_menu),
        )
        .route(
            &format!("{}/menus/extract-from-image", state.args.server.root_path),
            // leave headroom for the multipart framing around the image
            post(extract_menu_from_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
}
