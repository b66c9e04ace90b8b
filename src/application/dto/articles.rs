use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Flat snapshot of an article handed to views and the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            author: article.author.into_inner(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            created_at: article.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleAuthor, ArticleContent, ArticleId, ArticleTitle};
    use serde_json::json;

    #[test]
    fn serializes_the_five_view_fields() {
        let created_at = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let dto = ArticleDto::from(Article {
            id: ArticleId::new(1).unwrap(),
            author: ArticleAuthor::new("Ada").unwrap(),
            title: ArticleTitle::new("Hello").unwrap(),
            content: ArticleContent::new("World"),
            created_at,
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "author": "Ada",
                "title": "Hello",
                "content": "World",
                "created_at": "2024-01-01T00:00:00Z",
            })
        );
    }
}
