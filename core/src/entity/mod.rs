pub mod prelude;

pub mod menus;
