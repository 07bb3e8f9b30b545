use axum::{
    extract::{Extension, Json},
    response::IntoResponse,
};
use tracing::debug;

use crate::db::{category::queries::list_categories, PgPool};
use crate::endpoints::{error::EndpointError, with_conn};

/// Axum handler: GET /categories
pub async fn handler(Extension(pool): Extension<PgPool>) -> Result<impl IntoResponse, EndpointError> {
    let categories = with_conn(pool, |conn| {
        list_categories(conn).map_err(EndpointError::query)
    })
    .await?;

    debug!(count = categories.len(), "listed categories");
    Ok(Json(categories))
}
