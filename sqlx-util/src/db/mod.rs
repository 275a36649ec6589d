//! The `db` module connects the query builders to a database.
//!
//! Builders only ever emit the [`PLACEHOLDER`] marker. An [`Executor`] turns
//! that into the driver's own syntax through [`Executor::rebind`] and then runs
//! the statement.

/// The `executor` module implements [`Executor`] for [`Database`](crate::Database).
pub mod executor;

/// The `query` module builds IN-expanded, paired-condition and bulk-insert statements.
pub mod query;

use crate::{ExecResult, Result, Value};

/// The driver-agnostic marker every builder emits.
pub const PLACEHOLDER: &str = "?";

/// Placeholder syntax understood by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindType {
    /// `?`
    #[default]
    Question,
    /// `$1, $2, ...`
    Dollar,
    /// `:arg1, :arg2, ...`
    Named,
    /// `@p1, @p2, ...`
    At,
}

impl BindType {
    /// Picks the placeholder syntax from the scheme of a database url.
    ///
    /// # Example
    /// ```
    /// use sqlx_util::BindType;
    ///
    /// assert_eq!(BindType::from_url("postgres://localhost/app"), Some(BindType::Dollar));
    /// assert_eq!(BindType::from_url("sqlite::memory:"), Some(BindType::Question));
    /// ```
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split(':').next()?.to_ascii_lowercase();
        match scheme.as_str() {
            "sqlite" | "mysql" | "mariadb" => Some(Self::Question),
            "postgres" | "postgresql" | "cockroach" | "cockroachdb" => Some(Self::Dollar),
            "oracle" => Some(Self::Named),
            "sqlserver" | "mssql" => Some(Self::At),
            _ => None,
        }
    }

    /// Rewrites every `?` marker, left to right, into this syntax.
    ///
    /// The text is not parsed: a `?` inside a string literal is rewritten too.
    pub fn rebind(self, query: &str) -> String {
        let prefix = match self {
            Self::Question => return query.to_owned(),
            Self::Dollar => "$",
            Self::Named => ":arg",
            Self::At => "@p",
        };

        let mut rebound = String::with_capacity(query.len() + 10);
        let mut index = 0;
        for (i, part) in query.split(PLACEHOLDER).enumerate() {
            if i > 0 {
                index += 1;
                rebound.push_str(prefix);
                rebound.push_str(&index.to_string());
            }
            rebound.push_str(part);
        }
        rebound
    }
}

/// A destination row shape for [`Executor::fetch_all`].
#[cfg(not(feature = "turso"))]
pub trait Record: for<'r> sqlx::FromRow<'r, sqlx::any::AnyRow> + Send + Unpin {}

#[cfg(not(feature = "turso"))]
impl<T> Record for T where T: for<'r> sqlx::FromRow<'r, sqlx::any::AnyRow> + Send + Unpin {}

/// A destination row shape for [`Executor::fetch_all`].
#[cfg(feature = "turso")]
pub trait Record: serde::de::DeserializeOwned + Send {}

#[cfg(feature = "turso")]
impl<T> Record for T where T: serde::de::DeserializeOwned + Send {}

/// A record that can be written as one row of a bulk insert.
///
/// Usually derived with `#[derive(IntoRow)]`; `into_row` must yield one value
/// per entry of `COLUMNS`, in the same order.
pub trait IntoRow {
    const COLUMNS: &'static [&'static str];

    fn into_row(&self) -> Vec<Value>;
}

/// The database collaborator the builders call through.
///
/// Builders call [`rebind`](Executor::rebind) exactly once per invocation and
/// then either [`fetch_all`](Executor::fetch_all) or
/// [`execute`](Executor::execute). Errors are forwarded untouched.
#[async_trait::async_trait]
pub trait Executor: Sync {
    fn bind_type(&self) -> BindType;

    fn rebind(&self, query: &str) -> String {
        self.bind_type().rebind(query)
    }

    /// Runs a query and decodes every returned row into `T`.
    async fn fetch_all<T: Record>(&self, query: &str, args: Vec<Value>) -> Result<Vec<T>>;

    /// Runs a statement that returns no rows.
    async fn execute(&self, query: &str, args: Vec<Value>) -> Result<ExecResult>;
}
