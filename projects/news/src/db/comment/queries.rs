use diesel::prelude::*;
use crate::db::{comment::models::*, is_missing_parent, schema::comments};

#[derive(Debug, thiserror::Error)]
pub enum ListCommentsError {
    #[error("ListComments: {source}")]
    ListComments {
        #[from]
        source: diesel::result::Error,
    },
}

/// Newest first.
pub fn list_comments(
    conn: &mut PgConnection,
    article_id: i32,
) -> Result<Vec<Comment>, ListCommentsError> {
    comments::table
        .filter(comments::article_id.eq(article_id))
        .order_by((comments::time_published.desc(), comments::id.desc()))
        .select(Comment::as_select())
        .load(conn)
        .map_err(|source| ListCommentsError::ListComments { source })
}

#[derive(Debug, thiserror::Error)]
pub enum GetCommentError {
    #[error("GetComment: {source}")]
    GetComment {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_comment(
    conn: &mut PgConnection,
    article_id: i32,
    id: i32,
) -> Result<Option<Comment>, GetCommentError> {
    comments::table
        .filter(comments::id.eq(id))
        .filter(comments::article_id.eq(article_id))
        .select(Comment::as_select())
        .first(conn)
        .optional()
        .map_err(|source| GetCommentError::GetComment { source })
}

#[derive(Debug, thiserror::Error)]
pub enum InsertCommentError {
    #[error("ArticleNotFound: {article_id}")]
    ArticleNotFound { article_id: i32 },
    #[error("InsertComment: {source}")]
    InsertComment {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn insert_comment(
    conn: &mut PgConnection,
    new: &NewComment,
) -> Result<Comment, InsertCommentError> {
    diesel::insert_into(comments::table)
        .values(new)
        .returning(Comment::as_returning())
        .get_result(conn)
        .map_err(|source| {
            if is_missing_parent(&source) {
                InsertCommentError::ArticleNotFound { article_id: new.article_id }
            } else {
                InsertCommentError::InsertComment { source }
            }
        })
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateCommentError {
    #[error("UpdateComment: {source}")]
    UpdateComment {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn update_comment(
    conn: &mut PgConnection,
    article_id: i32,
    id: i32,
    changes: &CommentChanges,
) -> Result<usize, UpdateCommentError> {
    diesel::update(comments::table.filter(comments::id.eq(id)).filter(comments::article_id.eq(article_id)))
        .set(changes)
        .execute(conn)
        .map_err(|source| UpdateCommentError::UpdateComment { source })
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("DeleteComment: {source}")]
    DeleteComment {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn delete_comment(
    conn: &mut PgConnection,
    article_id: i32,
    id: i32,
) -> Result<usize, DeleteCommentError> {
    diesel::delete(comments::table.filter(comments::id.eq(id)).filter(comments::article_id.eq(article_id)))
        .execute(conn)
        .map_err(|source| DeleteCommentError::DeleteComment { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_article_names_the_article() {
        let err = InsertCommentError::ArticleNotFound { article_id: 7 };
        assert_eq!(err.to_string(), "ArticleNotFound: 7");
    }
}
