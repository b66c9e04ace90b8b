// src/application/commands/articles/mod.rs
mod service;
mod submit;

pub use service::ArticleCommandService;
pub use submit::SubmitArticleCommand;
