use diesel::prelude::*;
use serde::Serialize;
use crate::db::schema::ratings;
use crate::db::article::models::Article;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(belongs_to(Article))]
#[diesel(table_name = ratings)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: i32,
    pub value: i32,
    pub article_id: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ratings)]
pub struct NewRating {
    pub value: i32,
    pub article_id: i32,
}
