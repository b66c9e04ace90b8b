use super::error::map_sqlx;
use crate::application::ports::time::Clock;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleContent, ArticleId, ArticleStore, ArticleTitle, NewArticle,
    repository::missing_article_message,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, author, title, content, created_at";

#[derive(Clone)]
pub struct SqliteArticleStore {
    pool: Arc<SqlitePool>,
    clock: Arc<dyn Clock>,
}

impl SqliteArticleStore {
    pub fn new(pool: Arc<SqlitePool>, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author: String,
    title: String,
    content: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    /// A stored row that fails the value-object rules is a store fault, so
    /// it surfaces as `Persistence` rather than `Validation`.
    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let row_id = row.id;
        let malformed = |err: DomainError| {
            DomainError::Persistence(format!("stored article {row_id} is malformed: {err}"))
        };

        Ok(Article {
            id: ArticleId::new(row.id).map_err(malformed)?,
            author: ArticleAuthor::new(row.author).map_err(malformed)?,
            title: ArticleTitle::new(row.title).map_err(malformed)?,
            content: ArticleContent::from(row.content),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleStore for SqliteArticleStore {
    async fn create(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author,
            title,
            content,
        } = article;
        let created_at = self.clock.now();

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO article (author, title, content, created_at) VALUES (?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(author.as_str())
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM article ORDER BY id ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM article WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound(missing_article_message(id)))
    }
}
