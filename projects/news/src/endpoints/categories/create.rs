use axum::{
    extract::{Extension, Json},
    response::IntoResponse,
};
use tracing::info;

use super::CategoryPayload;
use crate::db::{category::queries::insert_category, PgPool};
use crate::endpoints::{error::EndpointError, payload::JsonObject, with_conn};

/// Axum handler: POST /categories
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    JsonObject(payload): JsonObject<CategoryPayload>,
) -> Result<impl IntoResponse, EndpointError> {
    let new = payload.into_new()?;

    let category = with_conn(pool, move |conn| {
        insert_category(conn, &new).map_err(EndpointError::query)
    })
    .await?;

    info!(id = category.id, name = %category.name, "category created");
    Ok(Json(category))
}
