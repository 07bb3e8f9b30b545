use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use tracing::info;

use super::RatingPayload;
use crate::db::{rating::queries::update_rating, PgPool};
use crate::endpoints::{affected, error::EndpointError, payload::JsonObject, with_conn};

/// Axum handler: PUT /articles/{id}/ratings/{rating_id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path((article_id, id)): Path<(i32, i32)>,
    JsonObject(payload): JsonObject<RatingPayload>,
) -> Result<impl IntoResponse, EndpointError> {
    let value = payload.checked_value()?;

    let count = with_conn(pool, move |conn| {
        update_rating(conn, article_id, id, value).map_err(EndpointError::query)
    })
    .await?;

    info!(id, article_id, count, "rating updated");
    affected(count, "rating", id)
}
