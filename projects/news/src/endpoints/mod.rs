pub mod error;
pub mod payload;
pub mod categories;
pub mod articles;
pub mod ratings;
pub mod comments;

use axum::{routing::get, Extension, Router};
use diesel::PgConnection;

use crate::db::PgPool;
use error::EndpointError;

pub fn router(pool: PgPool) -> Router {
    Router::new()
        .route("/categories", get(categories::list::handler).post(categories::create::handler))
        .route(
            "/categories/{id}",
            get(categories::read::handler)
                .put(categories::update::handler)
                .delete(categories::delete::handler),
        )
        .route("/categories/{id}/articles", get(categories::articles::handler))
        .route("/articles", get(articles::list::handler).post(articles::create::handler))
        .route(
            "/articles/{id}",
            get(articles::read::handler)
                .put(articles::update::handler)
                .delete(articles::delete::handler),
        )
        .route("/articles/{id}/ratings", get(ratings::list::handler).post(ratings::create::handler))
        .route(
            "/articles/{id}/ratings/{rating_id}",
            get(ratings::read::handler)
                .put(ratings::update::handler)
                .delete(ratings::delete::handler),
        )
        .route("/articles/{id}/comments", get(comments::list::handler).post(comments::create::handler))
        .route(
            "/articles/{id}/comments/{comment_id}",
            get(comments::read::handler)
                .put(comments::update::handler)
                .delete(comments::delete::handler),
        )
        .layer(Extension(pool))
}

/// Runs `f` on a pooled connection on the blocking thread pool.
pub(crate) async fn with_conn<T, F>(pool: PgPool, f: F) -> Result<T, EndpointError>
where
    F: FnOnce(&mut PgConnection) -> Result<T, EndpointError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await?
}

/// Maps an affected-row count to 200, or 404 when nothing matched.
pub(crate) fn affected(
    count: usize,
    resource: &'static str,
    id: i32,
) -> Result<axum::http::StatusCode, EndpointError> {
    match count {
        0 => Err(EndpointError::not_found(resource, id)),
        _ => Ok(axum::http::StatusCode::OK),
    }
}
