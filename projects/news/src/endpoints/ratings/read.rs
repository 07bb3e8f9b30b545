use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};

use crate::db::{rating::queries::get_rating, PgPool};
use crate::endpoints::{error::EndpointError, with_conn};

/// Axum handler: GET /articles/{id}/ratings/{rating_id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path((article_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, EndpointError> {
    let rating = with_conn(pool, move |conn| {
        get_rating(conn, article_id, id).map_err(EndpointError::query)
    })
    .await?
    .ok_or(EndpointError::not_found("rating", id))?;

    Ok(Json(rating))
}
