use super::{BindType, Executor, Record};
#[allow(unused_imports)]
use crate::{utils, Database, ExecResult, Result, Value};

#[async_trait::async_trait]
impl Executor for Database {
    fn bind_type(&self) -> BindType {
        self.bind_type
    }

    #[cfg(not(feature = "turso"))]
    async fn fetch_all<T: Record>(&self, query: &str, args: Vec<Value>) -> Result<Vec<T>> {
        let mut stream = sqlx::query_as::<_, T>(query);
        binds!(args, stream);
        Ok(stream.fetch_all(&self.conn).await?)
    }

    #[cfg(feature = "turso")]
    async fn fetch_all<T: Record>(&self, query: &str, args: Vec<Value>) -> Result<Vec<T>> {
        let params = binds!(args);
        let rows = self.conn.query(query, params).await?;
        utils::libsql_from_row(rows).await
    }

    #[cfg(not(feature = "turso"))]
    async fn execute(&self, query: &str, args: Vec<Value>) -> Result<ExecResult> {
        let mut stream = sqlx::query(query);
        binds!(args, stream);
        let result = stream.execute(&self.conn).await?;
        Ok(ExecResult {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_id(),
        })
    }

    #[cfg(feature = "turso")]
    async fn execute(&self, query: &str, args: Vec<Value>) -> Result<ExecResult> {
        let params = binds!(args);
        let rows_affected = self.conn.execute(query, params).await?;
        Ok(ExecResult {
            rows_affected,
            last_insert_id: Some(self.conn.last_insert_rowid()),
        })
    }
}
