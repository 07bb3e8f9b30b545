use diesel::prelude::*;
use crate::db::{is_missing_parent, rating::models::*, schema::ratings};

#[derive(Debug, thiserror::Error)]
pub enum ListRatingsError {
    #[error("ListRatings: {source}")]
    ListRatings {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn list_ratings(
    conn: &mut PgConnection,
    article_id: i32,
) -> Result<Vec<Rating>, ListRatingsError> {
    ratings::table
        .filter(ratings::article_id.eq(article_id))
        .order_by(ratings::id)
        .select(Rating::as_select())
        .load(conn)
        .map_err(|source| ListRatingsError::ListRatings { source })
}

#[derive(Debug, thiserror::Error)]
pub enum GetRatingError {
    #[error("GetRating: {source}")]
    GetRating {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_rating(
    conn: &mut PgConnection,
    article_id: i32,
    id: i32,
) -> Result<Option<Rating>, GetRatingError> {
    ratings::table
        .filter(ratings::id.eq(id))
        .filter(ratings::article_id.eq(article_id))
        .select(Rating::as_select())
        .first(conn)
        .optional()
        .map_err(|source| GetRatingError::GetRating { source })
}

#[derive(Debug, thiserror::Error)]
pub enum InsertRatingError {
    #[error("ArticleNotFound: {article_id}")]
    ArticleNotFound { article_id: i32 },
    #[error("InsertRating: {source}")]
    InsertRating {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn insert_rating(
    conn: &mut PgConnection,
    new: &NewRating,
) -> Result<Rating, InsertRatingError> {
    diesel::insert_into(ratings::table)
        .values(new)
        .returning(Rating::as_returning())
        .get_result(conn)
        .map_err(|source| {
            if is_missing_parent(&source) {
                InsertRatingError::ArticleNotFound { article_id: new.article_id }
            } else {
                InsertRatingError::InsertRating { source }
            }
        })
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateRatingError {
    #[error("UpdateRating: {source}")]
    UpdateRating {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn update_rating(
    conn: &mut PgConnection,
    article_id: i32,
    id: i32,
    value: i32,
) -> Result<usize, UpdateRatingError> {
    diesel::update(ratings::table.filter(ratings::id.eq(id)).filter(ratings::article_id.eq(article_id)))
        .set(ratings::value.eq(value))
        .execute(conn)
        .map_err(|source| UpdateRatingError::UpdateRating { source })
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteRatingError {
    #[error("DeleteRating: {source}")]
    DeleteRating {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn delete_rating(
    conn: &mut PgConnection,
    article_id: i32,
    id: i32,
) -> Result<usize, DeleteRatingError> {
    diesel::delete(ratings::table.filter(ratings::id.eq(id)).filter(ratings::article_id.eq(article_id)))
        .execute(conn)
        .map_err(|source| DeleteRatingError::DeleteRating { source })
}
