//! # btm-db
//!
//! libSQL storage for the BTM exercise catalog.
//!
//! Holds the `exercises` collection (unique on name, body part and
//! equipment) and the two label collections, `body_parts` and `equipment`.
//! [`ExerciseDb`] implements [`btm_core::ExerciseStore`] so the refresh
//! engine and the HTTP layer can program against the trait.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod seed;
mod store;

use std::time::Duration;

use btm_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;
use tokio::sync::Mutex;

/// How long a writer waits on another process's lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Central database handle for exercise catalog storage.
///
/// Wraps a libSQL database and a single shared connection. Writes that span
/// more than one statement take `write_lock` so concurrent tasks sharing this
/// handle never interleave inside each other's transaction.
pub struct ExerciseDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    write_lock: Mutex<()>,
}

impl ExerciseDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| DatabaseError::Migration(format!("busy_timeout: {e}")))?;

        let exercise_db = Self::from_parts(db, conn);
        exercise_db.run_migrations().await?;
        tracing::debug!(path, "opened local exercise database");
        Ok(exercise_db)
    }

    /// Open a remote libSQL database (e.g., Turso).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let exercise_db = Self::from_parts(db, conn);
        exercise_db.run_migrations().await?;
        tracing::debug!(url, "opened remote exercise database");
        Ok(exercise_db)
    }

    /// Open whichever database `config` describes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`] / [`Self::open_remote`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.path).await
        }
    }

    fn from_parts(db: libsql::Database, conn: libsql::Connection) -> Self {
        Self {
            db,
            conn,
            write_lock: Mutex::new(()),
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
