use axum::{
    extract::{Extension, Json, Path},
    response::IntoResponse,
};
use tracing::info;

use super::RatingPayload;
use crate::db::{
    rating::{
        models::NewRating,
        queries::{insert_rating, InsertRatingError},
    },
    PgPool,
};
use crate::endpoints::{error::EndpointError, payload::JsonObject, with_conn};

/// Axum handler: POST /articles/{id}/ratings
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(article_id): Path<i32>,
    JsonObject(payload): JsonObject<RatingPayload>,
) -> Result<impl IntoResponse, EndpointError> {
    let new = NewRating { value: payload.checked_value()?, article_id };

    let rating = with_conn(pool, move |conn| {
        insert_rating(conn, &new).map_err(|err| match err {
            InsertRatingError::ArticleNotFound { article_id } => {
                EndpointError::not_found("article", article_id)
            }
            other => EndpointError::query(other),
        })
    })
    .await?;

    info!(id = rating.id, article_id, value = rating.value, "rating created");
    Ok(Json(rating))
}
