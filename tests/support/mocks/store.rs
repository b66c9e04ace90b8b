// tests/support/mocks/store.rs
use article_board::domain::article::{Article, ArticleId, ArticleStore, NewArticle};
use article_board::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

/// Store whose backend is always unreachable.
pub struct FailingArticleStore;

fn unreachable_backend() -> DomainError {
    DomainError::Persistence("unable to open database file".into())
}

#[async_trait]
impl ArticleStore for FailingArticleStore {
    async fn create(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(unreachable_backend())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Err(unreachable_backend())
    }

    async fn get_by_id(&self, _id: ArticleId) -> DomainResult<Article> {
        Err(unreachable_backend())
    }
}
