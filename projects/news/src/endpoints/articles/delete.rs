use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use tracing::info;

use crate::db::{article::queries::delete_article, PgPool};
use crate::endpoints::{affected, error::EndpointError, with_conn};

/// Axum handler: DELETE /articles/{id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, EndpointError> {
    let count = with_conn(pool, move |conn| {
        delete_article(conn, id).map_err(EndpointError::query)
    })
    .await?;

    info!(id, count, "article deleted");
    affected(count, "article", id)
}
