use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::{BindType, Error, ExecResult, Executor, Record, Result, Value};

#[cfg_attr(not(feature = "turso"), derive(sqlx::FromRow))]
#[cfg_attr(feature = "turso", derive(serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Example {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub sql: String,
    pub args: Vec<Value>,
}

/// Records every statement instead of running it.
pub struct MockExecutor {
    bind_type: BindType,
    failure: Option<&'static str>,
    rebinds: AtomicUsize,
    calls: Mutex<Vec<Call>>,
}

impl MockExecutor {
    pub fn new(bind_type: BindType) -> Self {
        Self {
            bind_type,
            failure: None,
            rebinds: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call is recorded, then fails with `message`.
    pub fn failing(bind_type: BindType, message: &'static str) -> Self {
        Self {
            failure: Some(message),
            ..Self::new(bind_type)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn rebind_calls(&self) -> usize {
        self.rebinds.load(Ordering::SeqCst)
    }

    fn record(&self, query: &str, args: Vec<Value>) -> Result<()> {
        self.calls.lock().unwrap().push(Call {
            sql: query.to_owned(),
            args,
        });
        match self.failure {
            Some(message) => Err(Error::execution(message)),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Executor for MockExecutor {
    fn bind_type(&self) -> BindType {
        self.bind_type
    }

    fn rebind(&self, query: &str) -> String {
        self.rebinds.fetch_add(1, Ordering::SeqCst);
        self.bind_type.rebind(query)
    }

    async fn fetch_all<T: Record>(&self, query: &str, args: Vec<Value>) -> Result<Vec<T>> {
        self.record(query, args)?;
        Ok(Vec::new())
    }

    async fn execute(&self, query: &str, args: Vec<Value>) -> Result<ExecResult> {
        self.record(query, args)?;
        Ok(ExecResult::default())
    }
}
