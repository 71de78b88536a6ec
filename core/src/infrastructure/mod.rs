pub mod chat;
pub mod db;
pub mod llm;
pub mod menu;
