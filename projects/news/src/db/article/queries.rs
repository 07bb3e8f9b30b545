use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Integer};
use crate::db::{
    article::models::*,
    is_missing_parent,
    schema::{articles, comments, ratings},
};

/// Every article joined to the mean of its ratings. Articles without
/// ratings come back with a NULL `rating`.
const RATED_ARTICLES: &str = "SELECT a.*, r.rating FROM articles a \
    LEFT JOIN (SELECT article_id, AVG(value)::float8 AS rating FROM ratings GROUP BY article_id) r \
    ON a.id = r.article_id";

const ORDER_BY_TIME_PUBLISHED: &str = " ORDER BY a.time_published DESC, a.id DESC";

/// Filters for the rated-article listing. Filters are ANDed, `limit` applies
/// after ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatedArticleQuery {
    pub id: Option<i32>,
    pub priority: Option<i32>,
    pub category_id: Option<i32>,
    pub limit: Option<i64>,
}

/// A value bound to a `$n` placeholder of a rendered query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryParam {
    Int4(i32),
    Int8(i64),
}

impl RatedArticleQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: i32) -> Self {
        Self { id: Some(id), ..Self::default() }
    }

    pub fn by_priority(priority: i32) -> Self {
        Self { priority: Some(priority), ..Self::default() }
    }

    pub fn by_category(category_id: i32) -> Self {
        Self { category_id: Some(category_id), ..Self::default() }
    }

    pub fn with_limit(self, limit: i64) -> Self {
        Self { limit: Some(limit), ..self }
    }

    /// Renders the statement text with numbered placeholders and the values
    /// to bind to them, in order.
    pub fn render(&self) -> (String, Vec<QueryParam>) {
        let mut sql = String::from(RATED_ARTICLES);
        let mut params = Vec::new();

        let conditions = [
            ("a.id", self.id),
            ("a.priority", self.priority),
            ("a.category_id", self.category_id),
        ];
        for (column, value) in conditions
            .into_iter()
            .filter_map(|(column, value)| value.map(|value| (column, value)))
        {
            sql.push_str(if params.is_empty() { " WHERE " } else { " AND " });
            params.push(QueryParam::Int4(value));
            sql.push_str(&format!("{column} = ${}", params.len()));
        }

        sql.push_str(ORDER_BY_TIME_PUBLISHED);

        if let Some(limit) = self.limit {
            params.push(QueryParam::Int8(limit));
            sql.push_str(&format!(" LIMIT ${}", params.len()));
        }

        (sql, params)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadRatedArticlesError {
    #[error("LoadRatedArticles: {source}")]
    LoadRatedArticles {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn load_rated_articles(
    conn: &mut PgConnection,
    query: &RatedArticleQuery,
) -> Result<Vec<RatedArticle>, LoadRatedArticlesError> {
    let (sql, params) = query.render();

    let mut statement: BoxedSqlQuery<'_, Pg, SqlQuery> = diesel::sql_query(sql).into_boxed();
    for param in params {
        statement = match param {
            QueryParam::Int4(value) => statement.bind::<Integer, _>(value),
            QueryParam::Int8(value) => statement.bind::<BigInt, _>(value),
        };
    }

    statement
        .load::<RatedArticle>(conn)
        .map_err(|source| LoadRatedArticlesError::LoadRatedArticles { source })
}

#[derive(Debug, thiserror::Error)]
pub enum GetRatedArticleError {
    #[error(transparent)]
    LoadRatedArticles {
        #[from]
        source: LoadRatedArticlesError,
    },
}

pub fn get_rated_article(
    conn: &mut PgConnection,
    id_val: i32,
) -> Result<Option<RatedArticle>, GetRatedArticleError> {
    let mut rows = load_rated_articles(conn, &RatedArticleQuery::by_id(id_val))?;
    Ok(rows.pop())
}

#[derive(Debug, thiserror::Error)]
pub enum ListCategoryArticlesError {
    #[error("ListCategoryArticles: {source}")]
    ListCategoryArticles {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn list_category_articles(
    conn: &mut PgConnection,
    category_id_val: i32,
) -> Result<Vec<Article>, ListCategoryArticlesError> {
    articles::table
        .filter(articles::category_id.eq(category_id_val))
        .order_by((articles::time_published.desc(), articles::id.desc()))
        .select(Article::as_select())
        .load(conn)
        .map_err(|source| ListCategoryArticlesError::ListCategoryArticles { source })
}

#[derive(Debug, thiserror::Error)]
pub enum InsertArticleError {
    #[error("CategoryNotFound: {category_id}")]
    CategoryNotFound { category_id: i32 },
    #[error("InsertArticle: {source}")]
    InsertArticle {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn insert_article(
    conn: &mut PgConnection,
    new: &NewArticle,
) -> Result<Article, InsertArticleError> {
    diesel::insert_into(articles::table)
        .values(new)
        .returning(Article::as_returning())
        .get_result(conn)
        .map_err(|source| {
            if is_missing_parent(&source) {
                InsertArticleError::CategoryNotFound { category_id: new.category_id }
            } else {
                InsertArticleError::InsertArticle { source }
            }
        })
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateArticleError {
    #[error("CategoryNotFound: {category_id:?}")]
    CategoryNotFound { category_id: Option<i32> },
    #[error("UpdateArticle: {source}")]
    UpdateArticle {
        #[from]
        source: diesel::result::Error,
    },
}

/// Returns the number of rows updated. Fields left as `None` are untouched.
pub fn update_article(
    conn: &mut PgConnection,
    id_val: i32,
    changes: &ArticleChanges,
) -> Result<usize, UpdateArticleError> {
    diesel::update(articles::table.find(id_val))
        .set(changes)
        .execute(conn)
        .map_err(|source| {
            if is_missing_parent(&source) {
                UpdateArticleError::CategoryNotFound { category_id: changes.category_id }
            } else {
                UpdateArticleError::UpdateArticle { source }
            }
        })
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteArticleError {
    #[error("DeleteArticle: {source}")]
    DeleteArticle {
        #[from]
        source: diesel::result::Error,
    },
}

/// Deletes the article with its ratings and comments. Returns the number of
/// articles removed.
pub fn delete_article(conn: &mut PgConnection, id_val: i32) -> Result<usize, DeleteArticleError> {
    conn.transaction(|conn| {
        diesel::delete(ratings::table.filter(ratings::article_id.eq(id_val))).execute(conn)?;
        diesel::delete(comments::table.filter(comments::article_id.eq(id_val))).execute(conn)?;
        diesel::delete(articles::table.find(id_val)).execute(conn)
    })
    .map_err(|source| DeleteArticleError::DeleteArticle { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "SELECT a.*, r.rating FROM articles a \
        LEFT JOIN (SELECT article_id, AVG(value)::float8 AS rating FROM ratings GROUP BY article_id) r \
        ON a.id = r.article_id";

    #[test]
    fn unfiltered_orders_by_time_published() {
        let (sql, params) = RatedArticleQuery::all().render();
        assert_eq!(sql, format!("{BASE} ORDER BY a.time_published DESC, a.id DESC"));
        assert!(params.is_empty());
    }

    #[test]
    fn by_priority() {
        let (sql, params) = RatedArticleQuery::by_priority(1).render();
        assert_eq!(
            sql,
            format!("{BASE} WHERE a.priority = $1 ORDER BY a.time_published DESC, a.id DESC")
        );
        assert_eq!(params, vec![QueryParam::Int4(1)]);
    }

    #[test]
    fn by_category() {
        let (sql, params) = RatedArticleQuery::by_category(3).render();
        assert_eq!(
            sql,
            format!("{BASE} WHERE a.category_id = $1 ORDER BY a.time_published DESC, a.id DESC")
        );
        assert_eq!(params, vec![QueryParam::Int4(3)]);
    }

    #[test]
    fn by_priority_with_limit() {
        let (sql, params) = RatedArticleQuery::by_priority(1).with_limit(20).render();
        assert_eq!(
            sql,
            format!(
                "{BASE} WHERE a.priority = $1 ORDER BY a.time_published DESC, a.id DESC LIMIT $2"
            )
        );
        assert_eq!(params, vec![QueryParam::Int4(1), QueryParam::Int8(20)]);
    }

    #[test]
    fn by_category_with_limit() {
        let (sql, params) = RatedArticleQuery::by_category(2).with_limit(5).render();
        assert_eq!(
            sql,
            format!(
                "{BASE} WHERE a.category_id = $1 ORDER BY a.time_published DESC, a.id DESC LIMIT $2"
            )
        );
        assert_eq!(params, vec![QueryParam::Int4(2), QueryParam::Int8(5)]);
    }

    #[test]
    fn limit_without_filter() {
        let (sql, params) = RatedArticleQuery::all().with_limit(3).render();
        assert_eq!(sql, format!("{BASE} ORDER BY a.time_published DESC, a.id DESC LIMIT $1"));
        assert_eq!(params, vec![QueryParam::Int8(3)]);
    }

    #[test]
    fn both_filters_are_anded() {
        let query = RatedArticleQuery {
            priority: Some(2),
            category_id: Some(4),
            ..RatedArticleQuery::default()
        };
        let (sql, params) = query.render();
        assert!(sql.contains(" WHERE a.priority = $1 AND a.category_id = $2 ORDER BY"));
        assert_eq!(params, vec![QueryParam::Int4(2), QueryParam::Int4(4)]);
    }

    #[test]
    fn single_article() {
        let (sql, params) = RatedArticleQuery::by_id(7).render();
        assert!(sql.contains(" WHERE a.id = $1 ORDER BY"));
        assert_eq!(params, vec![QueryParam::Int4(7)]);
    }
}
