use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use tracing::info;

use crate::db::{category::queries::delete_category, PgPool};
use crate::endpoints::{affected, error::EndpointError, with_conn};

/// Axum handler: DELETE /categories/{id}
///
/// Removes the category's articles, and their ratings and comments, too.
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, EndpointError> {
    let count = with_conn(pool, move |conn| {
        delete_category(conn, id).map_err(EndpointError::query)
    })
    .await?;

    info!(id, count, "category deleted");
    affected(count, "category", id)
}
