use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use tracing::info;

use super::ArticlePayload;
use crate::db::{
    article::queries::{update_article, UpdateArticleError},
    PgPool,
};
use crate::endpoints::{affected, error::EndpointError, payload::JsonObject, with_conn};

/// Axum handler: PUT /articles/{id}
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    Path(id): Path<i32>,
    JsonObject(payload): JsonObject<ArticlePayload>,
) -> Result<impl IntoResponse, EndpointError> {
    let changes = payload.into_changes()?;

    let count = with_conn(pool, move |conn| {
        update_article(conn, id, &changes).map_err(|err| match err {
            UpdateArticleError::CategoryNotFound { category_id } => {
                EndpointError::not_found("category", category_id.unwrap_or_default())
            }
            other => EndpointError::query(other),
        })
    })
    .await?;

    info!(id, count, "article updated");
    affected(count, "article", id)
}
