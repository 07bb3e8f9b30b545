use axum::{
    extract::{FromRequest, Request},
    Json,
};
use chrono::{DateTime, NaiveDateTime};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use super::error::EndpointError;

/// JSON body that must be an object. Anything else, including a missing or
/// unparsable body, is rejected with 400.
pub struct JsonObject<T>(pub T);

impl<S, T> FromRequest<S> for JsonObject<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = EndpointError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| EndpointError::MalformedBody { message: rejection.body_text() })?;

        if !value.is_object() {
            return Err(EndpointError::MalformedBody {
                message: "request body must be a JSON object".to_string(),
            });
        }

        serde_json::from_value(value)
            .map(JsonObject)
            .map_err(|source| EndpointError::MalformedBody { message: source.to_string() })
    }
}

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// Accepts RFC 3339 timestamps (converted to UTC) as sent by browsers, and
/// the offset-less forms used by the seed data.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{raw}`"))),
    }
}
