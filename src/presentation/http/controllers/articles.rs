// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::SubmitArticleCommand, dto::ArticleDto, queries::articles::GetArticleQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Every article, ascending by id.", body = ArticleListResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleListResponse>> {
    let items = state
        .services
        .article_queries
        .fetch_all_articles()
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { items }))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article has this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .fetch_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article stored.", body = ArticleDto),
        (status = 400, description = "Author or title missing or too long.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = SubmitArticleCommand {
        author: payload.author,
        title: payload.title,
        content: payload.content,
    };

    let created = state
        .services
        .article_commands
        .submit_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}
