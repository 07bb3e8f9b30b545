pub mod list;
pub mod read;
pub mod create;
pub mod update;
pub mod delete;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::db::article::models::{ArticleChanges, NewArticle};
use crate::endpoints::{error::EndpointError, payload::deserialize_timestamp};

pub const PRIORITIES: [i32; 2] = [1, 2];

/// Body of POST and PUT /articles. Unknown fields such as `id` or `rating`
/// are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub time_published: Option<NaiveDateTime>,
    pub written_by: Option<String>,
    pub heading: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub priority: Option<i32>,
    pub category_id: Option<i32>,
}

impl ArticlePayload {
    /// `time_published` falls back to `now`.
    pub fn into_new(self, now: NaiveDateTime) -> Result<NewArticle, EndpointError> {
        let priority = self.priority.ok_or(EndpointError::missing_field("priority"))?;

        Ok(NewArticle {
            time_published: self.time_published.unwrap_or(now),
            written_by: self.written_by.ok_or(EndpointError::missing_field("writtenBy"))?,
            heading: self.heading.ok_or(EndpointError::missing_field("heading"))?,
            text: self.text.ok_or(EndpointError::missing_field("text"))?,
            image: self.image.ok_or(EndpointError::missing_field("image"))?,
            priority: check_priority(priority)?,
            category_id: self.category_id.ok_or(EndpointError::missing_field("categoryId"))?,
        })
    }

    pub fn into_changes(self) -> Result<ArticleChanges, EndpointError> {
        let changes = ArticleChanges {
            time_published: self.time_published,
            written_by: self.written_by,
            heading: self.heading,
            text: self.text,
            image: self.image,
            priority: self.priority.map(check_priority).transpose()?,
            category_id: self.category_id,
        };
        if changes.is_empty() {
            return Err(EndpointError::MalformedBody { message: "no fields to update".to_string() });
        }
        Ok(changes)
    }
}

fn check_priority(priority: i32) -> Result<i32, EndpointError> {
    if !PRIORITIES.contains(&priority) {
        return Err(EndpointError::InvalidField {
            field: "priority",
            message: format!("must be one of {PRIORITIES:?}, got {priority}"),
        });
    }
    Ok(priority)
}
