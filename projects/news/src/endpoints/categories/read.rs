use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};

use crate::db::{category::queries::get_category, PgPool};
use crate::endpoints::{error::EndpointError, with_conn};

/// Axum handler: GET /categories/{id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, EndpointError> {
    let category = with_conn(pool, move |conn| {
        get_category(conn, id).map_err(EndpointError::query)
    })
    .await?
    .ok_or(EndpointError::not_found("category", id))?;

    Ok(Json(category))
}
