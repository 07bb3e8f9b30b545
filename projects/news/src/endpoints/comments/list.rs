use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};

use crate::db::{comment::queries::list_comments, PgPool};
use crate::endpoints::{error::EndpointError, with_conn};

/// Axum handler: GET /articles/{id}/comments
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, EndpointError> {
    let comments = with_conn(pool, move |conn| {
        list_comments(conn, article_id).map_err(EndpointError::query)
    })
    .await?;

    Ok(Json(comments))
}
