// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, queries::articles::ArticleQueryService,
    },
    domain::article::ArticleStore,
};

/// Everything a request handler needs, built once at startup and shared by
/// handle. Both services talk to the same store.
pub struct ServiceContext {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ServiceContext {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&store)));
        let article_queries = Arc::new(ArticleQueryService::new(store));

        Self {
            article_commands,
            article_queries,
        }
    }
}
