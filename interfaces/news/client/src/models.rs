use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// An article as listed by the API. `rating` is the mean of its ratings and
/// is absent from write responses, where it defaults to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    #[serde(default, skip_serializing)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_published: Option<NaiveDateTime>,
    pub written_by: String,
    pub heading: String,
    pub text: String,
    pub image: String,
    pub priority: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: i32,
    pub value: i32,
    pub article_id: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub time_published: NaiveDateTime,
    pub nickname: String,
    pub text: String,
    pub article_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_published: Option<NaiveDateTime>,
    pub nickname: String,
    pub text: String,
}

/// Rating as shown next to an article: one decimal, or "No ratings".
pub fn display_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) => format!("{}", (value * 10.0).round() / 10.0),
        None => "No ratings".to_string(),
    }
}
