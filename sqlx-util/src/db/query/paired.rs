//! OR-joined tuple conditions, the multi-column stand-in for `IN`.

use super::{check_arity, Query};
use crate::db::{Executor, Record};
use crate::{utils, Result, Value};

/// Appends one copy of `pair_query` per tuple to `base_query`, joined by `OR`.
///
/// Returns `Ok(None)` when `paired_args` is empty. ` WHERE ` is appended when
/// `base_query` does not contain the text `WHERE` anywhere; the check is a
/// plain substring match. Arguments come out as `custom_args` followed by every
/// tuple in order.
///
/// # Example
/// ```
/// use sqlx_util::{build_paired, Value};
///
/// let query = build_paired(
///     "SELECT * FROM users",
///     "(id = ? AND name = ?)",
///     vec![],
///     vec![
///         vec![Value::from(2), Value::from("name2")],
///         vec![Value::from(4), Value::from("name4")],
///     ],
/// )
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(
///     query.sql,
///     "SELECT * FROM users WHERE (id = ? AND name = ?) OR (id = ? AND name = ?)"
/// );
/// assert_eq!(query.args.len(), 4);
/// ```
pub fn build_paired(
    base_query: &str,
    pair_query: &str,
    custom_args: Vec<Value>,
    paired_args: Vec<Vec<Value>>,
) -> Result<Option<Query>> {
    if paired_args.is_empty() {
        return Ok(None);
    }
    let arity = check_arity(&paired_args)?;

    let mut sql = base_query.to_owned();
    if !sql.contains("WHERE") {
        sql.push_str(" WHERE ");
    }
    sql.push_str(&vec![pair_query; paired_args.len()].join(" OR "));

    let mut args = Vec::with_capacity(custom_args.len() + paired_args.len() * arity);
    args.extend(custom_args);
    args.extend(paired_args.into_iter().flatten());

    Ok(Some(Query { sql, args }))
}

/// Fetches the rows matching any of the `paired_args` tuples.
///
/// Shorthand for [`select_in_paired_with_custom_args`] without extra arguments.
///
/// # Example
/// ```ignore
/// let users: Vec<User> = select_in_paired(
///     &database,
///     "SELECT id, name FROM users",
///     "(id = ? AND name = ?)",
///     vec![args![2, "name2"], args![4, "name4"]],
/// )
/// .await?;
/// ```
pub async fn select_in_paired<T, E>(
    conn: &E,
    base_query: &str,
    pair_query: &str,
    paired_args: Vec<Vec<Value>>,
) -> Result<Vec<T>>
where
    T: Record,
    E: Executor,
{
    select_in_paired_with_custom_args(conn, base_query, pair_query, Vec::new(), paired_args).await
}

/// Fetches the rows matching any of the `paired_args` tuples, binding
/// `custom_args` first for markers already present in `base_query`.
///
/// An empty `paired_args` returns no rows without running a query.
///
/// # Example
/// ```ignore
/// let users: Vec<User> = select_in_paired_with_custom_args(
///     &database,
///     "SELECT u.id, u.name FROM users u JOIN orgs o ON o.id = u.org_id AND o.slug = ?",
///     "(u.id = ? AND u.name = ?)",
///     args!["acme"],
///     vec![args![2, "name2"], args![4, "name4"]],
/// )
/// .await?;
/// ```
pub async fn select_in_paired_with_custom_args<T, E>(
    conn: &E,
    base_query: &str,
    pair_query: &str,
    custom_args: Vec<Value>,
    paired_args: Vec<Vec<Value>>,
) -> Result<Vec<T>>
where
    T: Record,
    E: Executor,
{
    let Some(Query { sql, args }) = build_paired(base_query, pair_query, custom_args, paired_args)?
    else {
        tracing::trace!(target: "sqlx_util", "no paired arguments, skipping query");
        return Ok(Vec::new());
    };

    let sql = conn.rebind(&sql);
    utils::log_query(&sql, args.len());
    conn.fetch_all(&sql, args).await
}
