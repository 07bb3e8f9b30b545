use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::{
    models::{Article, ArticleDraft, Category, Comment, CommentDraft, Rating},
    ClientConfig, ClientError,
};

pub async fn get_categories(config: &ClientConfig) -> Result<Vec<Category>, ClientError> {
    fetch_json(config.http.get(config.url("categories")?)).await
}

pub async fn get_category(config: &ClientConfig, id: i32) -> Result<Category, ClientError> {
    fetch_json(config.http.get(config.url(&format!("categories/{id}"))?)).await
}

/// All articles, newest first, each with its mean rating.
pub async fn get_articles(config: &ClientConfig) -> Result<Vec<Article>, ClientError> {
    fetch_json(config.http.get(config.url("articles")?)).await
}

pub async fn get_articles_by_priority(
    config: &ClientConfig,
    priority: i32,
    limit: Option<i64>,
) -> Result<Vec<Article>, ClientError> {
    let mut query = vec![("priority", i64::from(priority))];
    query.extend(limit.map(|limit| ("limit", limit)));
    fetch_json(config.http.get(config.url("articles")?).query(&query)).await
}

pub async fn get_articles_by_category(
    config: &ClientConfig,
    category_id: i32,
    limit: Option<i64>,
) -> Result<Vec<Article>, ClientError> {
    let mut query = vec![("categoryId", i64::from(category_id))];
    query.extend(limit.map(|limit| ("limit", limit)));
    fetch_json(config.http.get(config.url("articles")?).query(&query)).await
}

pub async fn get_article(config: &ClientConfig, id: i32) -> Result<Article, ClientError> {
    fetch_json(config.http.get(config.url(&format!("articles/{id}"))?)).await
}

pub async fn add_article(config: &ClientConfig, draft: &ArticleDraft) -> Result<Article, ClientError> {
    fetch_json(config.http.post(config.url("articles")?).json(draft)).await
}

pub async fn update_article(config: &ClientConfig, article: &Article) -> Result<(), ClientError> {
    let url = config.url(&format!("articles/{}", article.id))?;
    fetch_empty(config.http.put(url).json(article)).await
}

pub async fn delete_article(config: &ClientConfig, id: i32) -> Result<(), ClientError> {
    fetch_empty(config.http.delete(config.url(&format!("articles/{id}"))?)).await
}

pub async fn get_ratings(config: &ClientConfig, article_id: i32) -> Result<Vec<Rating>, ClientError> {
    fetch_json(config.http.get(config.url(&format!("articles/{article_id}/ratings"))?)).await
}

pub async fn add_rating(config: &ClientConfig, article_id: i32, value: i32) -> Result<Rating, ClientError> {
    let url = config.url(&format!("articles/{article_id}/ratings"))?;
    fetch_json(config.http.post(url).json(&json!({ "value": value }))).await
}

pub async fn get_comments(config: &ClientConfig, article_id: i32) -> Result<Vec<Comment>, ClientError> {
    fetch_json(config.http.get(config.url(&format!("articles/{article_id}/comments"))?)).await
}

pub async fn add_comment(
    config: &ClientConfig,
    article_id: i32,
    draft: &CommentDraft,
) -> Result<Comment, ClientError> {
    let url = config.url(&format!("articles/{article_id}/comments"))?;
    fetch_json(config.http.post(url).json(draft)).await
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let body = read_success(send(request).await?).await?;
    serde_json::from_str(&body).map_err(|source| ClientError::Decode { source })
}

async fn fetch_empty(request: RequestBuilder) -> Result<(), ClientError> {
    read_success(send(request).await?).await.map(|_| ())
}

async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .map_err(|source| ClientError::RequestSend { source })?;
    debug!(url = %response.url(), status = %response.status(), "news api response");
    Ok(response)
}

async fn read_success(response: Response) -> Result<String, ClientError> {
    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| ClientError::ResponseRead { source })?;

    if !status.is_success() {
        return Err(ClientError::Status { status, body });
    }
    Ok(body)
}
