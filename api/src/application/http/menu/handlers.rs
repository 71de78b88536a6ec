pub mod create_menu;
pub mod extract_menu_from_image;
pub mod get_today_menu;
pub mod list_menus;
