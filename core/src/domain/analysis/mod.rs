pub mod catalog;
pub mod entities;
pub mod extractor;
pub mod ports;
pub mod regression;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
