pub mod analysis;
pub mod chat;
pub mod menu;
pub mod server;
