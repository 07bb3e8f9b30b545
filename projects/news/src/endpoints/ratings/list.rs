use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};

use crate::db::{rating::queries::list_ratings, PgPool};
use crate::endpoints::{error::EndpointError, with_conn};

/// Axum handler: GET /articles/{id}/ratings
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(article_id): Path<i32>,
) -> Result<impl IntoResponse, EndpointError> {
    let ratings = with_conn(pool, move |conn| {
        list_ratings(conn, article_id).map_err(EndpointError::query)
    })
    .await?;

    Ok(Json(ratings))
}
