use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};
use chrono::Utc;
use tracing::info;

use super::CommentPayload;
use crate::db::{
    comment::queries::{insert_comment, InsertCommentError},
    PgPool,
};
use crate::endpoints::{error::EndpointError, payload::JsonObject, with_conn};

/// Axum handler: POST /articles/{id}/comments
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(article_id): Path<i32>,
    JsonObject(payload): JsonObject<CommentPayload>,
) -> Result<impl IntoResponse, EndpointError> {
    let new = payload.into_new(article_id, Utc::now().naive_utc())?;

    let comment = with_conn(pool, move |conn| {
        insert_comment(conn, &new).map_err(|err| match err {
            InsertCommentError::ArticleNotFound { article_id } => {
                EndpointError::not_found("article", article_id)
            }
            other => EndpointError::query(other),
        })
    })
    .await?;

    info!(id = comment.id, article_id, nickname = %comment.nickname, "comment created");
    Ok(Json(comment))
}
