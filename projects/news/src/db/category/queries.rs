use diesel::prelude::*;
use crate::db::{
    category::models::*,
    schema::{articles, categories, comments, ratings},
};

#[derive(Debug, thiserror::Error)]
pub enum ListCategoriesError {
    #[error("ListCategories: {source}")]
    ListCategories {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn list_categories(conn: &mut PgConnection) -> Result<Vec<Category>, ListCategoriesError> {
    categories::table
        .order_by(categories::id)
        .select(Category::as_select())
        .load(conn)
        .map_err(|source| ListCategoriesError::ListCategories { source })
}

#[derive(Debug, thiserror::Error)]
pub enum GetCategoryError {
    #[error("GetCategory: {source}")]
    GetCategory {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn get_category(
    conn: &mut PgConnection,
    id_val: i32,
) -> Result<Option<Category>, GetCategoryError> {
    categories::table
        .find(id_val)
        .select(Category::as_select())
        .first(conn)
        .optional()
        .map_err(|source| GetCategoryError::GetCategory { source })
}

#[derive(Debug, thiserror::Error)]
pub enum InsertCategoryError {
    #[error("InsertCategory: {source}")]
    InsertCategory {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn insert_category(
    conn: &mut PgConnection,
    new: &NewCategory,
) -> Result<Category, InsertCategoryError> {
    diesel::insert_into(categories::table)
        .values(new)
        .returning(Category::as_returning())
        .get_result(conn)
        .map_err(|source| InsertCategoryError::InsertCategory { source })
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateCategoryError {
    #[error("UpdateCategory: {source}")]
    UpdateCategory {
        #[from]
        source: diesel::result::Error,
    },
}

/// Returns the number of rows updated.
pub fn update_category(
    conn: &mut PgConnection,
    id_val: i32,
    changes: &CategoryChanges,
) -> Result<usize, UpdateCategoryError> {
    diesel::update(categories::table.find(id_val))
        .set(changes)
        .execute(conn)
        .map_err(|source| UpdateCategoryError::UpdateCategory { source })
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteCategoryError {
    #[error("DeleteCategory: {source}")]
    DeleteCategory {
        #[from]
        source: diesel::result::Error,
    },
}

/// Deletes the category with its articles and their ratings and comments.
/// Returns the number of categories removed.
pub fn delete_category(
    conn: &mut PgConnection,
    id_val: i32,
) -> Result<usize, DeleteCategoryError> {
    conn.transaction(|conn| {
        let article_ids = articles::table
            .filter(articles::category_id.eq(id_val))
            .select(articles::id);

        diesel::delete(ratings::table.filter(ratings::article_id.eq_any(article_ids.clone())))
            .execute(conn)?;
        diesel::delete(comments::table.filter(comments::article_id.eq_any(article_ids)))
            .execute(conn)?;
        diesel::delete(articles::table.filter(articles::category_id.eq(id_val)))
            .execute(conn)?;

        diesel::delete(categories::table.find(id_val)).execute(conn)
    })
    .map_err(|source| DeleteCategoryError::DeleteCategory { source })
}
