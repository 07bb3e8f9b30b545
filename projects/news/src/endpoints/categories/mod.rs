pub mod list;
pub mod read;
pub mod create;
pub mod update;
pub mod delete;
pub mod articles;

use serde::Deserialize;

use crate::db::category::models::{CategoryChanges, NewCategory};
use crate::endpoints::error::EndpointError;

/// Body of POST and PUT /categories.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub name: Option<String>,
}

impl CategoryPayload {
    pub fn into_new(self) -> Result<NewCategory, EndpointError> {
        let name = self.name.ok_or(EndpointError::missing_field("name"))?;
        Ok(NewCategory { name: non_blank(name)? })
    }

    pub fn into_changes(self) -> Result<CategoryChanges, EndpointError> {
        let changes = CategoryChanges { name: self.name.map(non_blank).transpose()? };
        if changes.is_empty() {
            return Err(EndpointError::MalformedBody { message: "no fields to update".to_string() });
        }
        Ok(changes)
    }
}

fn non_blank(name: String) -> Result<String, EndpointError> {
    if name.trim().is_empty() {
        return Err(EndpointError::InvalidField {
            field: "name",
            message: "must not be blank".to_string(),
        });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required_on_create() {
        let err = CategoryPayload::default().into_new().unwrap_err();
        assert!(matches!(err, EndpointError::InvalidField { field: "name", .. }));
    }

    #[test]
    fn blank_name_is_rejected() {
        let payload = CategoryPayload { name: Some("  ".to_string()) };
        assert!(payload.into_changes().is_err());
    }

    #[test]
    fn empty_update_is_malformed() {
        let err = CategoryPayload::default().into_changes().unwrap_err();
        assert!(matches!(err, EndpointError::MalformedBody { .. }));
    }
}
