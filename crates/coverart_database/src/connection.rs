//! Database connection utilities.

use crate::DatabaseResult;
use coverart_error::{DatabaseError, DatabaseErrorKind};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::{info, instrument};

/// Pool of PostgreSQL connections.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Build a connection pool for the given database URL.
///
/// The pool connects eagerly, so an unreachable database fails here at
/// startup instead of on the first request.
///
/// # Errors
///
/// Returns an error if no connection can be established.
#[instrument(skip(database_url))]
pub fn establish_pool(database_url: &str, max_size: u32) -> DatabaseResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;
    info!(max_size, "Database pool ready");
    Ok(pool)
}
