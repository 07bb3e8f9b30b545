pub mod schema;
pub mod setup;
pub mod category;
pub mod article;
pub mod rating;
pub mod comment;

use std::time::Duration;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Pool sizing and timeouts. Defaults: 5 connections, none kept idle,
/// 30s to acquire, 10s before an idle connection is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_size: u32,
    pub min_idle: u32,
    pub connection_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_size: 5,
            min_idle: 0,
            connection_timeout: Duration::from_millis(30_000),
            idle_timeout: Duration::from_millis(10_000),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildPoolError {
    #[error("BuildPool: {source}")]
    BuildPool {
        #[from]
        source: r2d2::Error,
    },
}

pub fn build_pool(database_url: &str, settings: &PoolSettings) -> Result<PgPool, BuildPoolError> {
    builder(settings)
        .build(ConnectionManager::new(database_url))
        .map_err(|source| BuildPoolError::BuildPool { source })
}

/// Builds the pool without opening a connection up front.
pub fn build_pool_unchecked(database_url: &str, settings: &PoolSettings) -> PgPool {
    builder(settings).build_unchecked(ConnectionManager::new(database_url))
}

fn builder(settings: &PoolSettings) -> diesel::r2d2::Builder<ConnectionManager<PgConnection>> {
    Pool::builder()
        .max_size(settings.max_size)
        .min_idle(Some(settings.min_idle))
        .connection_timeout(settings.connection_timeout)
        .idle_timeout(Some(settings.idle_timeout))
}

/// True when `err` is a foreign key violation, i.e. the referenced parent row is missing.
pub(crate) fn is_missing_parent(err: &diesel::result::Error) -> bool {
    matches!(
        err,
        diesel::result::Error::DatabaseError(diesel::result::DatabaseErrorKind::ForeignKeyViolation, _)
    )
}
