// src/presentation/http/controllers/pages.rs
use crate::application::{
    commands::articles::SubmitArticleCommand, error::ApplicationError,
    queries::articles::GetArticleQuery,
};
use crate::presentation::http::{error::PageError, state::HttpState, views::SubmissionFormView};
use axum::{
    Extension, Form,
    extract::Path,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

pub type PageResult<T = Html<String>> = Result<T, PageError>;

/// Fields of the submission form. Missing keys read as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmitArticleForm {
    pub author: String,
    pub title: String,
    pub content: String,
}

pub async fn index(Extension(state): Extension<HttpState>) -> PageResult {
    let articles = state
        .services
        .article_queries
        .fetch_all_articles()
        .await
        .map_err(|err| state.page_error(err))?;

    Ok(Html(state.views.index(&articles)?))
}

pub async fn submission_form(Extension(state): Extension<HttpState>) -> PageResult {
    Ok(Html(
        state
            .views
            .submission_form(&SubmissionFormView::default())?,
    ))
}

pub async fn submit_article(
    Extension(state): Extension<HttpState>,
    Form(form): Form<SubmitArticleForm>,
) -> PageResult<Response> {
    let command = SubmitArticleCommand {
        author: form.author.clone(),
        title: form.title.clone(),
        content: form.content.clone(),
    };

    match state.services.article_commands.submit_article(command).await {
        Ok(_) => Ok((StatusCode::FOUND, [(header::LOCATION, "/index")]).into_response()),
        Err(ApplicationError::Validation(message)) => {
            let view = SubmissionFormView {
                error: Some(message),
                author: form.author,
                title: form.title,
                content: form.content,
            };
            Ok(Html(state.views.submission_form(&view)?).into_response())
        }
        Err(err) => Err(state.page_error(err)),
    }
}

pub async fn show_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> PageResult {
    let article = state
        .services
        .article_queries
        .fetch_article(GetArticleQuery { id })
        .await
        .map_err(|err| state.page_error(err))?;

    Ok(Html(state.views.article(&article)?))
}
