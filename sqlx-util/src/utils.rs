use crate::{Error, Result};

/// Reads `DATABASE_URL`, loading a `.env` file first when there is one.
pub fn database_url() -> Result<String> {
    dotenv::dotenv().ok();
    std::env::var("DATABASE_URL")
        .map_err(|err| Error::Config(format!("DATABASE_URL: {err}")))
}

/// Emits the statement about to be sent to the driver.
///
/// Debug builds pretty-print the SQL with `sqlformat`.
pub(crate) fn log_query(query: &str, arg_count: usize) {
    if !tracing::enabled!(target: "sqlx_util", tracing::Level::DEBUG) {
        return;
    }

    #[cfg(debug_assertions)]
    {
        let formatted_sql = sqlformat::format(
            query,
            &sqlformat::QueryParams::None,
            &sqlformat::FormatOptions::default(),
        );
        tracing::debug!(target: "sqlx_util", args = arg_count, "\n{formatted_sql}");
    }

    #[cfg(not(debug_assertions))]
    tracing::debug!(target: "sqlx_util", args = arg_count, sql = query);
}

#[cfg(feature = "turso")]
pub async fn libsql_from_row<T>(mut rows: libsql::Rows) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let mut results = Vec::new();
    while let Some(row) = rows.next().await? {
        let s = libsql::de::from_row::<T>(&row).map_err(Error::execution)?;
        results.push(s);
    }
    Ok(results)
}
