use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};

use crate::db::{article::queries::list_category_articles, PgPool};
use crate::endpoints::{error::EndpointError, with_conn};

/// Axum handler: GET /categories/{id}/articles
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, EndpointError> {
    let articles = with_conn(pool, move |conn| {
        list_category_articles(conn, id).map_err(EndpointError::query)
    })
    .await?;

    Ok(Json(articles))
}
