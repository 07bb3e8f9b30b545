pub mod list;
pub mod read;
pub mod create;
pub mod update;
pub mod delete;

use serde::Deserialize;

use crate::db::rating::models::{MAX_RATING, MIN_RATING};
use crate::endpoints::error::EndpointError;

/// Body of POST and PUT /articles/{id}/ratings. The article comes from the
/// path, an `articleId` in the body is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RatingPayload {
    pub value: Option<i32>,
}

impl RatingPayload {
    pub fn checked_value(&self) -> Result<i32, EndpointError> {
        let value = self.value.ok_or(EndpointError::missing_field("value"))?;
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(EndpointError::InvalidField {
                field: "value",
                message: format!("must be between {MIN_RATING} and {MAX_RATING}, got {value}"),
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_to_five() {
        for value in 1..=5 {
            assert_eq!(RatingPayload { value: Some(value) }.checked_value().unwrap(), value);
        }
    }

    #[test]
    fn rejects_out_of_range_and_missing() {
        assert!(RatingPayload { value: Some(0) }.checked_value().is_err());
        assert!(RatingPayload { value: Some(6) }.checked_value().is_err());
        assert!(RatingPayload { value: None }.checked_value().is_err());
    }
}
