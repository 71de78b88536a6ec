pub use super::menus::Entity as Menus;
