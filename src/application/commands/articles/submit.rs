// src/application/commands/articles/submit.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleAuthor, ArticleContent, ArticleTitle, NewArticle},
};

/// Raw submission as it arrives from the form or the JSON API.
#[derive(Debug, Clone, Default)]
pub struct SubmitArticleCommand {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    /// Validate and persist a new article. Invalid input is rejected before
    /// the store is contacted.
    pub async fn submit_article(
        &self,
        command: SubmitArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let author = ArticleAuthor::new(command.author)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content);

        let created = self
            .store
            .create(NewArticle::new(author, title, content))
            .await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::application::ports::time::Clock;
    use crate::domain::article::{Article, ArticleId, ArticleStore};
    use crate::domain::errors::DomainResult;
    use crate::infrastructure::repositories::InMemoryArticleStore;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    struct CountingStore {
        inner: InMemoryArticleStore,
        creates: AtomicUsize,
    }

    #[async_trait]
    impl ArticleStore for CountingStore {
        async fn create(&self, article: NewArticle) -> DomainResult<Article> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            self.inner.create(article).await
        }

        async fn list_all(&self) -> DomainResult<Vec<Article>> {
            self.inner.list_all().await
        }

        async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
            self.inner.get_by_id(id).await
        }
    }

    fn counting_store() -> Arc<CountingStore> {
        let clock = Arc::new(FixedClock(Utc::now()));
        Arc::new(CountingStore {
            inner: InMemoryArticleStore::new(clock),
            creates: AtomicUsize::new(0),
        })
    }

    fn command(author: &str, title: &str, content: &str) -> SubmitArticleCommand {
        SubmitArticleCommand {
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn submit_returns_stored_snapshot() {
        let store = counting_store();
        let service = ArticleCommandService::new(store.clone());

        let dto = service
            .submit_article(command("Ada", "Hello", "World"))
            .await
            .unwrap();

        assert_eq!(dto.id, 1);
        assert_eq!(dto.author, "Ada");
        assert_eq!(dto.title, "Hello");
        assert_eq!(dto.content, "World");
        assert_eq!(store.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_fields_never_reach_the_store() {
        let store = counting_store();
        let service = ArticleCommandService::new(store.clone());

        for (author, title) in [("", "Hello"), ("Ada", "  "), (" \t", "\n")] {
            let err = service
                .submit_article(command(author, title, "body"))
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::Validation(_)));
        }

        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_content_is_accepted() {
        let store = counting_store();
        let service = ArticleCommandService::new(store.clone());

        let dto = service.submit_article(command("Ada", "Hello", "")).await.unwrap();
        assert_eq!(dto.content, "");
    }
}
