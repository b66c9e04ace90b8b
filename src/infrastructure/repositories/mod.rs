// src/infrastructure/repositories/mod.rs
mod error;
mod memory_article;
mod sqlite_article;

pub use error::map_sqlx;
pub use memory_article::InMemoryArticleStore;
pub use sqlite_article::SqliteArticleStore;
