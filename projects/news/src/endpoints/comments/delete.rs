use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use tracing::info;

use crate::db::{comment::queries::delete_comment, PgPool};
use crate::endpoints::{affected, error::EndpointError, with_conn};

/// Axum handler: DELETE /articles/{id}/comments/{comment_id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path((article_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, EndpointError> {
    let count = with_conn(pool, move |conn| {
        delete_comment(conn, article_id, id).map_err(EndpointError::query)
    })
    .await?;

    info!(id, article_id, count, "comment deleted");
    affected(count, "comment", id)
}
