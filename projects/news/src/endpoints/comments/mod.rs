pub mod list;
pub mod read;
pub mod create;
pub mod update;
pub mod delete;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::db::comment::models::{CommentChanges, NewComment};
use crate::endpoints::{error::EndpointError, payload::deserialize_timestamp};

/// Body of POST and PUT /articles/{id}/comments.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub time_published: Option<NaiveDateTime>,
    pub nickname: Option<String>,
    pub text: Option<String>,
}

impl CommentPayload {
    pub fn into_new(self, article_id: i32, now: NaiveDateTime) -> Result<NewComment, EndpointError> {
        Ok(NewComment {
            time_published: self.time_published.unwrap_or(now),
            nickname: self.nickname.ok_or(EndpointError::missing_field("nickname"))?,
            text: self.text.ok_or(EndpointError::missing_field("text"))?,
            article_id,
        })
    }

    pub fn into_changes(self) -> Result<CommentChanges, EndpointError> {
        let changes = CommentChanges {
            time_published: self.time_published,
            nickname: self.nickname,
            text: self.text,
        };
        if changes.is_empty() {
            return Err(EndpointError::MalformedBody { message: "no fields to update".to_string() });
        }
        Ok(changes)
    }
}
