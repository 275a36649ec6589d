#[cfg(not(feature = "turso"))]
pub use sqlx::FromRow;

pub use super::{args, in_args};
pub use super::{
    build_bulk_insert, build_paired, bulk_insert, bulk_insert_records, expand_in, select_in,
    select_in_paired, select_in_paired_with_custom_args,
};
pub use super::{
    Arg, BindType, Database, Error, ExecResult, Executor, IntoRow, Query, Record, Result, Value,
};
