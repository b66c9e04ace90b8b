use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, repository::missing_article_message},
};

/// Lookup by the raw id text taken from the request path.
pub struct GetArticleQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn fetch_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let Some(id) = ArticleId::parse(&query.id) else {
            tracing::debug!(raw_id = %query.id, "article id is not a positive integer");
            return Err(ApplicationError::not_found(missing_article_message(&query.id)));
        };

        let article = self.store.get_by_id(id).await.inspect_err(|err| {
            tracing::debug!(article_id = %id, error = %err, "article lookup failed");
        })?;
        Ok(article.into())
    }
}
