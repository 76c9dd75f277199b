pub mod item;
pub mod repository;

pub use item::{Item, ItemCategory, ItemError};
pub use repository::ItemRepository;
