use crate::application::ports::time::Clock;
use crate::domain::article::{
    Article, ArticleId, ArticleStore, NewArticle, repository::missing_article_message,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Records {
    last_id: i64,
    articles: Vec<Article>,
}

/// Process-local store. Contents vanish with the process.
pub struct InMemoryArticleStore {
    records: RwLock<Records>,
    clock: Arc<dyn Clock>,
}

impl InMemoryArticleStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: RwLock::new(Records::default()),
            clock,
        }
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn create(&self, article: NewArticle) -> DomainResult<Article> {
        // id assignment and push happen under one write guard
        let mut records = self.records.write().await;
        let id = ArticleId::new(records.last_id + 1)
            .map_err(|err| DomainError::Persistence(err.to_string()))?;
        let article = article.into_article(id, self.clock.now());
        records.last_id = i64::from(id);
        records.articles.push(article.clone());
        Ok(article)
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.records.read().await.articles.clone())
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        self.records
            .read()
            .await
            .articles
            .iter()
            .find(|article| article.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(missing_article_message(id)))
    }
}
