use axum::{
    extract::{Extension, Json},
    response::IntoResponse,
};
use chrono::Utc;
use tracing::info;

use super::ArticlePayload;
use crate::db::{
    article::queries::{insert_article, InsertArticleError},
    PgPool,
};
use crate::endpoints::{error::EndpointError, payload::JsonObject, with_conn};

/// Axum handler: POST /articles
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    JsonObject(payload): JsonObject<ArticlePayload>,
) -> Result<impl IntoResponse, EndpointError> {
    let new = payload.into_new(Utc::now().naive_utc())?;

    let article = with_conn(pool, move |conn| {
        insert_article(conn, &new).map_err(|err| match err {
            InsertArticleError::CategoryNotFound { category_id } => {
                EndpointError::not_found("category", category_id)
            }
            other => EndpointError::query(other),
        })
    })
    .await?;

    info!(id = article.id, heading = %article.heading, "article created");
    Ok(Json(article))
}
