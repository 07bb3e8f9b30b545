use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{Double, Nullable};
use serde::Serialize;
use crate::db::schema::articles;
use crate::db::category::models::Category;

#[derive(Debug, Clone, PartialEq, Queryable, QueryableByName, Selectable, Identifiable, Associations, Serialize)]
#[diesel(belongs_to(Category))]
#[diesel(table_name = articles)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i32,
    pub time_published: NaiveDateTime,
    pub written_by: String,
    pub heading: String,
    pub text: String,
    pub image: String,
    pub priority: i32,
    pub category_id: i32,
}

/// An article with the mean of its ratings, `None` when it has none.
#[derive(Debug, Clone, PartialEq, QueryableByName, Serialize)]
pub struct RatedArticle {
    #[diesel(embed)]
    #[serde(flatten)]
    pub article: Article,
    #[diesel(sql_type = Nullable<Double>)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = articles)]
pub struct NewArticle {
    pub time_published: NaiveDateTime,
    pub written_by: String,
    pub heading: String,
    pub text: String,
    pub image: String,
    pub priority: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = articles)]
pub struct ArticleChanges {
    pub time_published: Option<NaiveDateTime>,
    pub written_by: Option<String>,
    pub heading: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub priority: Option<i32>,
    pub category_id: Option<i32>,
}

impl ArticleChanges {
    pub fn is_empty(&self) -> bool {
        self.time_published.is_none()
            && self.written_by.is_none()
            && self.heading.is_none()
            && self.text.is_none()
            && self.image.is_none()
            && self.priority.is_none()
            && self.category_id.is_none()
    }
}
