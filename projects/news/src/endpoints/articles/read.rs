use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};

use crate::db::{article::queries::get_rated_article, PgPool};
use crate::endpoints::{error::EndpointError, with_conn};

/// Axum handler: GET /articles/{id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, EndpointError> {
    let article = with_conn(pool, move |conn| {
        get_rated_article(conn, id).map_err(EndpointError::query)
    })
    .await?
    .ok_or(EndpointError::not_found("article", id))?;

    Ok(Json(article))
}
