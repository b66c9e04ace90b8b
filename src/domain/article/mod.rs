pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::ArticleStore;
pub use value_objects::{ArticleAuthor, ArticleContent, ArticleId, ArticleTitle};
