use axum::{
    extract::{rejection::QueryRejection, Extension, Json, Query},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::db::{
    article::queries::{load_rated_articles, RatedArticleQuery},
    PgPool,
};
use crate::endpoints::{error::EndpointError, with_conn};

/// Query parameters for the endpoint. Any combination is accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListParams {
    pub priority: Option<i32>,
    pub category_id: Option<i32>,
    pub limit: Option<i64>,
}

impl ArticleListParams {
    pub fn into_query(self) -> Result<RatedArticleQuery, EndpointError> {
        if let Some(limit) = self.limit.filter(|limit| *limit < 0) {
            return Err(EndpointError::InvalidQuery {
                message: format!("limit must not be negative, got {limit}"),
            });
        }
        Ok(RatedArticleQuery {
            id: None,
            priority: self.priority,
            category_id: self.category_id,
            limit: self.limit,
        })
    }
}

/// Axum handler: GET /articles
pub async fn handler(
    Extension(pool): Extension<PgPool>,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> Result<impl IntoResponse, EndpointError> {
    let Query(params) = params
        .map_err(|rejection| EndpointError::InvalidQuery { message: rejection.body_text() })?;
    let query = params.into_query()?;

    let articles = with_conn(pool, move |conn| {
        load_rated_articles(conn, &query).map_err(EndpointError::query)
    })
    .await?;

    debug!(?query, count = articles.len(), "listed rated articles");
    Ok(Json(articles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_map_onto_query() {
        let params = ArticleListParams { priority: Some(1), category_id: None, limit: Some(20) };
        assert_eq!(params.into_query().unwrap(), RatedArticleQuery::by_priority(1).with_limit(20));
    }

    #[test]
    fn negative_limit_is_rejected() {
        let params = ArticleListParams { limit: Some(-1), ..ArticleListParams::default() };
        assert!(matches!(params.into_query(), Err(EndpointError::InvalidQuery { .. })));
    }
}
