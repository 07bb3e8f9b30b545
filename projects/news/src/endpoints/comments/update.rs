use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use tracing::info;

use super::CommentPayload;
use crate::db::{comment::queries::update_comment, PgPool};
use crate::endpoints::{affected, error::EndpointError, payload::JsonObject, with_conn};

/// Axum handler: PUT /articles/{id}/comments/{comment_id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path((article_id, id)): Path<(i32, i32)>,
    JsonObject(payload): JsonObject<CommentPayload>,
) -> Result<impl IntoResponse, EndpointError> {
    let changes = payload.into_changes()?;

    let count = with_conn(pool, move |conn| {
        update_comment(conn, article_id, id, &changes).map_err(EndpointError::query)
    })
    .await?;

    info!(id, article_id, count, "comment updated");
    affected(count, "comment", id)
}
