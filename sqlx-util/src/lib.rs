//! Query helpers on top of sqlx: `IN (?)` expansion, OR-joined paired
//! conditions and multi-row inserts.
//!
//! Every builder emits `?` markers, hands the finished SQL to
//! [`Executor::rebind`] once and then runs it through the same executor.
//!
//! ```ignore
//! use sqlx_util::prelude::*;
//!
//! let database = Database::from_env().await?;
//!
//! let users: Vec<User> =
//!     select_in(&database, "SELECT id, name FROM users WHERE id IN (?)", in_args![vec![2, 4, 6]])
//!         .await?;
//!
//! bulk_insert(
//!     &database,
//!     "INSERT INTO users (id, name)",
//!     vec![args![7, "name7"], args![8, "name8"]],
//! )
//! .await?;
//! ```

/// This module contains the macros used in the crate.
#[macro_use]
mod macros;

/// This module contains the database-related functionality.
pub mod db;

/// This module contains the error type of the crate.
pub mod error;

/// This module contains the prelude for the crate.
pub mod prelude;

/// This module contains the argument and result types used in the crate.
pub mod types;

mod utils;

#[cfg(test)]
mod testing;

pub use db::query::bulk::{build_bulk_insert, bulk_insert, bulk_insert_records};
pub use db::query::expand::{expand_in, select_in};
pub use db::query::paired::{build_paired, select_in_paired, select_in_paired_with_custom_args};
pub use db::query::{generate_placeholder_pattern, placeholder_pattern, Query};
pub use db::{BindType, Executor, IntoRow, Record, PLACEHOLDER};
pub use error::{BoxError, Error, Result};
pub use types::{Arg, ExecResult, Value};
pub use sqlx_util_derive::IntoRow;
pub use utils::database_url;

#[cfg(not(feature = "turso"))]
pub use sqlx;

#[cfg(feature = "turso")]
pub use libsql;

#[cfg(not(feature = "turso"))]
pub type Connection = sqlx::Pool<sqlx::Any>;

#[cfg(feature = "turso")]
pub type Connection = libsql::Connection;

/// Size of the pool opened by [`Database::new`].
#[cfg(not(feature = "turso"))]
const MAX_CONNECTIONS: u32 = 5;

/// A connection plus the placeholder syntax of its driver.
pub struct Database {
    pub conn: Connection,
    bind_type: BindType,
}

impl Database {
    /// Connects to `database_url`; its scheme selects the placeholder syntax.
    #[cfg(not(feature = "turso"))]
    pub async fn new(database_url: &str) -> Result<Self> {
        let bind_type = BindType::from_url(database_url)
            .ok_or_else(|| Error::UnsupportedDatabase(database_url.to_owned()))?;

        sqlx::any::install_default_drivers();
        let conn = sqlx::any::AnyPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        tracing::debug!(target: "sqlx_util", ?bind_type, "connected");
        Ok(Self { conn, bind_type })
    }

    /// Connects to the url in `DATABASE_URL` (a `.env` file is honoured).
    #[cfg(not(feature = "turso"))]
    pub async fn from_env() -> Result<Self> {
        Self::new(&database_url()?).await
    }

    /// Wraps an already opened pool.
    #[cfg(not(feature = "turso"))]
    pub fn from_pool(conn: Connection, bind_type: BindType) -> Self {
        Self { conn, bind_type }
    }

    #[cfg(feature = "turso")]
    pub async fn new_local(path: &str) -> Result<Self> {
        let db = libsql::Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        Ok(Self::from_connection(conn))
    }

    #[cfg(feature = "turso")]
    pub async fn new_remote_replica(
        path: &str,
        database_url: &str,
        auth_token: &str,
    ) -> Result<Self> {
        let db = libsql::Builder::new_remote_replica(
            path,
            database_url.to_string(),
            auth_token.to_string(),
        )
        .build()
        .await?;
        let conn = db.connect()?;
        Ok(Self::from_connection(conn))
    }

    #[cfg(feature = "turso")]
    pub async fn new_remote(database_url: &str, auth_token: &str) -> Result<Self> {
        let db = libsql::Builder::new_remote(database_url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        Ok(Self::from_connection(conn))
    }

    /// libsql always speaks SQLite's `?`.
    #[cfg(feature = "turso")]
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            bind_type: BindType::Question,
        }
    }
}
