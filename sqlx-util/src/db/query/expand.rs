//! Expansion of `IN (?)` placeholders.
//!
//! # Example
//! ```
//! use sqlx_util::{expand_in, Arg, Value};
//!
//! let query = expand_in(
//!     "SELECT * FROM users WHERE status = ? AND id IN (?)",
//!     vec![Arg::from("active"), Arg::from(vec![2, 4, 6])],
//! )
//! .unwrap();
//!
//! assert_eq!(query.sql, "SELECT * FROM users WHERE status = ? AND id IN (?, ?, ?)");
//! assert_eq!(query.args.len(), 4);
//! assert_eq!(query.args[1], Value::Integer(2));
//! ```

use super::{check_arity, placeholder_list, placeholder_pattern, Query};
use crate::db::{Executor, Record, PLACEHOLDER};
use crate::{utils, Arg, Error, Result};

/// Replaces each `?` with as many markers as its argument holds values.
///
/// Every `?` in `query` consumes one argument, in order. A list argument
/// becomes `?, ?, ?`; a tuples argument becomes `(?, ?), (?, ?)`. Markers and
/// arguments must pair up one to one, and lists must not be empty.
pub fn expand_in(query: &str, args: Vec<Arg>) -> Result<Query> {
    let bind_count = query.matches(PLACEHOLDER).count();
    if bind_count < args.len() {
        return Err(Error::expansion(format!(
            "number of bindVars less than number arguments ({bind_count} < {})",
            args.len()
        )));
    }
    if bind_count > args.len() {
        return Err(Error::expansion(format!(
            "number of bindVars exceeds arguments ({bind_count} > {})",
            args.len()
        )));
    }

    let mut sql = String::with_capacity(query.len() + args.len() * 3);
    let mut flat = Vec::with_capacity(args.len());
    let mut args = args.into_iter();

    for (i, part) in query.split(PLACEHOLDER).enumerate() {
        if i > 0 {
            // counted above, one argument per marker
            let Some(arg) = args.next() else {
                return Err(Error::expansion("number of bindVars exceeds arguments"));
            };
            match arg {
                Arg::Scalar(value) => {
                    sql.push_str(PLACEHOLDER);
                    flat.push(value);
                }
                Arg::List(values) => {
                    if values.is_empty() {
                        return Err(Error::expansion(format!(
                            "empty slice passed to 'in' query (argument {i})"
                        )));
                    }
                    sql.push_str(&placeholder_list(values.len()));
                    flat.extend(values);
                }
                Arg::Tuples(tuples) => {
                    let arity = check_arity(&tuples)?;
                    if arity == 0 {
                        return Err(Error::expansion(format!(
                            "empty tuple passed to 'in' query (argument {i})"
                        )));
                    }
                    let pattern = placeholder_pattern(arity);
                    let rendered = vec![pattern.as_ref(); tuples.len()].join(", ");
                    sql.push_str(&rendered);
                    flat.extend(tuples.into_iter().flatten());
                }
            }
        }
        sql.push_str(part);
    }

    Ok(Query { sql, args: flat })
}

/// Expands `IN (?)` placeholders, rebinds the query and fetches every row.
///
/// # Arguments
/// * `conn` - The executor running the query.
/// * `query` - SQL with one `?` per argument.
/// * `args` - Scalars, lists or tuples, one per `?`.
///
/// # Example
/// ```ignore
/// let users: Vec<User> = select_in(
///     &database,
///     "SELECT id, name FROM users WHERE id IN (?)",
///     in_args![vec![2, 4, 6]],
/// )
/// .await?;
/// ```
pub async fn select_in<T, E>(conn: &E, query: &str, args: Vec<Arg>) -> Result<Vec<T>>
where
    T: Record,
    E: Executor,
{
    let Query { sql, args } = expand_in(query, args)?;
    let sql = conn.rebind(&sql);
    utils::log_query(&sql, args.len());
    conn.fetch_all(&sql, args).await
}
