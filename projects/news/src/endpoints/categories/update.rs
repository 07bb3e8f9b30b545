use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use tracing::info;

use super::CategoryPayload;
use crate::db::{category::queries::update_category, PgPool};
use crate::endpoints::{affected, error::EndpointError, payload::JsonObject, with_conn};

/// Axum handler: PUT /categories/{id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
    JsonObject(payload): JsonObject<CategoryPayload>,
) -> Result<impl IntoResponse, EndpointError> {
    let changes = payload.into_changes()?;

    let count = with_conn(pool, move |conn| {
        update_category(conn, id, &changes).map_err(EndpointError::query)
    })
    .await?;

    info!(id, count, "category updated");
    affected(count, "category", id)
}
