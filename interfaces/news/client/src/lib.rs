//! Typed client for the news site REST API.
//!
//! Every call takes an explicit [`ClientConfig`]; nothing is global.

pub mod index;
pub mod models;
pub mod ticker;

use reqwest::{Client, StatusCode};
use url::Url;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub http: Client,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, http: Client) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|source| ClientError::InvalidUrl { source })?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url, http })
    }

    /// Resolves `path` below the base URL, keeping any base path prefix.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ClientError::InvalidUrl { source })
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("InvalidUrl: {source}")]
    InvalidUrl {
        source: url::ParseError,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("Decode: {source}")]
    Decode {
        source: serde_json::Error,
    },

    #[error("Status: {status}: {body}")]
    Status {
        status: StatusCode,
        body: String,
    },
}
