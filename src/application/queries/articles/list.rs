use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Every stored article as a view snapshot, ascending by id.
    pub async fn fetch_all_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.store.list_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
