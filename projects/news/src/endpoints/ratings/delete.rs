use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use tracing::info;

use crate::db::{rating::queries::delete_rating, PgPool};
use crate::endpoints::{affected, error::EndpointError, with_conn};

/// Axum handler: DELETE /articles/{id}/ratings/{rating_id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path((article_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, EndpointError> {
    let count = with_conn(pool, move |conn| {
        delete_rating(conn, article_id, id).map_err(EndpointError::query)
    })
    .await?;

    info!(id, article_id, count, "rating deleted");
    affected(count, "rating", id)
}
