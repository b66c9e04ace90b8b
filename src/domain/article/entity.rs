// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleAuthor, ArticleContent, ArticleId, ArticleTitle,
};
use chrono::{DateTime, Utc};

/// A stored article. Records are never updated once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub author: ArticleAuthor,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

/// Insert shape. The store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author: ArticleAuthor,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

impl NewArticle {
    pub fn new(author: ArticleAuthor, title: ArticleTitle, content: ArticleContent) -> Self {
        Self {
            author,
            title,
            content,
        }
    }

    pub fn into_article(self, id: ArticleId, created_at: DateTime<Utc>) -> Article {
        Article {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
            created_at,
        }
    }
}
