//! News site backend
//!
//! - REST API endpoints in `endpoints/`
//! - PostgreSQL models and queries in `db/`
//! - Environment configuration in `config`, requires DATABASE_URL

pub mod config;
pub mod db;
pub mod endpoints;
