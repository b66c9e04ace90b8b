// src/presentation/http/views.rs
use crate::application::dto::ArticleDto;
use axum::http::StatusCode;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../../../templates/base.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("post_article.html", include_str!("../../../templates/post_article.html")),
    ("article.html", include_str!("../../../templates/article.html")),
    ("error.html", include_str!("../../../templates/error.html")),
];

#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct ViewError(#[from] tera::Error);

/// Values echoed back into the submission form.
#[derive(Debug, Default, Serialize)]
pub struct SubmissionFormView {
    pub error: Option<String>,
    pub author: String,
    pub title: String,
    pub content: String,
}

/// Renders view payloads into HTML. Templates are compiled into the binary
/// and parsed once, when the renderer is built.
pub struct ViewRenderer {
    tera: Tera,
}

impl ViewRenderer {
    pub fn new() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    pub fn index(&self, articles: &[ArticleDto]) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("articles", articles);
        self.render("index.html", &context)
    }

    pub fn submission_form(&self, form: &SubmissionFormView) -> Result<String, ViewError> {
        let context = Context::from_serialize(form)?;
        self.render("post_article.html", &context)
    }

    pub fn article(&self, article: &ArticleDto) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("article", article);
        self.render("article.html", &context)
    }

    pub fn error_page(&self, status: StatusCode, message: &str) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("status", &status.to_string());
        context.insert("message", message);
        self.render("error.html", &context)
    }

    fn render(&self, name: &str, context: &Context) -> Result<String, ViewError> {
        Ok(self.tera.render(name, context)?)
    }
}
