use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;
use crate::db::schema::comments;
use crate::db::article::models::Article;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(belongs_to(Article))]
#[diesel(table_name = comments)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub time_published: NaiveDateTime,
    pub nickname: String,
    pub text: String,
    pub article_id: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment {
    pub time_published: NaiveDateTime,
    pub nickname: String,
    pub text: String,
    pub article_id: i32,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = comments)]
pub struct CommentChanges {
    pub time_published: Option<NaiveDateTime>,
    pub nickname: Option<String>,
    pub text: Option<String>,
}

impl CommentChanges {
    pub fn is_empty(&self) -> bool {
        self.time_published.is_none() && self.nickname.is_none() && self.text.is_none()
    }
}
