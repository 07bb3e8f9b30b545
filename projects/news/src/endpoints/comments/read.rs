use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};

use crate::db::{comment::queries::get_comment, PgPool};
use crate::endpoints::{error::EndpointError, with_conn};

/// Axum handler: GET /articles/{id}/comments/{comment_id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path((article_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, EndpointError> {
    let comment = with_conn(pool, move |conn| {
        get_comment(conn, article_id, id).map_err(EndpointError::query)
    })
    .await?
    .ok_or(EndpointError::not_found("comment", id))?;

    Ok(Json(comment))
}
