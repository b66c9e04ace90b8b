use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Durable home of every article.
///
/// `create` is the only mutating operation and commits before returning.
/// `get_by_id` reports a missing record as `DomainError::NotFound` with a
/// message naming the id.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn create(&self, article: NewArticle) -> DomainResult<Article>;
    /// All articles, ascending by id.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article>;
}

pub fn missing_article_message(id: impl std::fmt::Display) -> String {
    format!("there is no article with id {id}")
}
