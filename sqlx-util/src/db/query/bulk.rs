//! Multi-row `INSERT ... VALUES (...), (...)` statements.

use super::{check_arity, placeholder_pattern, Query};
use crate::db::Executor;
use crate::{utils, Error, ExecResult, IntoRow, Result, Value};

/// Builds one INSERT with a VALUES tuple per row.
///
/// Returns `Ok(None)` when `values` is empty. ` VALUES ` is appended when
/// `query` does not contain the text `VALUES`; like the `WHERE` check of
/// [`build_paired`](super::paired::build_paired) this is a plain substring
/// match. Arguments are flattened row by row.
///
/// # Example
/// ```
/// use sqlx_util::{build_bulk_insert, Value};
///
/// let query = build_bulk_insert(
///     "INSERT INTO users (id, name)",
///     vec![
///         vec![Value::from(1), Value::from("a")],
///         vec![Value::from(2), Value::from("b")],
///     ],
/// )
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(query.sql, "INSERT INTO users (id, name) VALUES (?, ?), (?, ?)");
/// assert_eq!(query.args.len(), 4);
/// ```
pub fn build_bulk_insert(query: &str, values: Vec<Vec<Value>>) -> Result<Option<Query>> {
    if values.is_empty() {
        return Ok(None);
    }
    let arity = check_arity(&values)?;
    if arity == 0 {
        return Err(Error::ArityMismatch);
    }

    let mut sql = query.to_owned();
    if !sql.contains("VALUES") {
        sql.push_str(" VALUES ");
    }

    let pattern = placeholder_pattern(arity);
    sql.reserve((pattern.len() + 2) * values.len());
    for i in 0..values.len() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&pattern);
    }

    let mut args = Vec::with_capacity(values.len() * arity);
    args.extend(values.into_iter().flatten());

    Ok(Some(Query { sql, args }))
}

/// Inserts every row of `values` with a single statement.
///
/// An empty `values` is a successful no-op.
///
/// # Example
/// ```ignore
/// bulk_insert(
///     &database,
///     "INSERT INTO example_table (id, name)",
///     (200..300).map(|i| args![i, format!("name{i}")]).collect(),
/// )
/// .await?;
/// ```
pub async fn bulk_insert<E>(conn: &E, query: &str, values: Vec<Vec<Value>>) -> Result<ExecResult>
where
    E: Executor,
{
    let Some(Query { sql, args }) = build_bulk_insert(query, values)? else {
        tracing::trace!(target: "sqlx_util", "no rows to insert, skipping statement");
        return Ok(ExecResult::default());
    };

    let sql = conn.rebind(&sql);
    utils::log_query(&sql, args.len());
    conn.execute(&sql, args).await
}

/// Inserts records into `table` using the columns declared by [`IntoRow`].
///
/// # Example
/// ```ignore
/// #[derive(IntoRow)]
/// struct Example {
///     id: i64,
///     name: String,
/// }
///
/// bulk_insert_records(&database, "example_table", &examples).await?;
/// ```
pub async fn bulk_insert_records<R, E>(conn: &E, table: &str, records: &[R]) -> Result<ExecResult>
where
    R: IntoRow,
    E: Executor,
{
    let query = format!(
        "INSERT INTO {table} ({columns})",
        columns = R::COLUMNS.join(", ")
    );
    let values = records.iter().map(IntoRow::into_row).collect();
    bulk_insert(conn, &query, values).await
}
