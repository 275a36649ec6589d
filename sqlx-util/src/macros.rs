/// A macro to build one row or tuple of [`Value`](crate::Value)s.
///
/// Every expression goes through `Value::from`, so integers, floats, bools,
/// strings and `Option`s of them can be mixed freely.
///
/// # Example
///
/// ```
/// use sqlx_util::{args, Value};
///
/// let row = args![200, "name200", None::<i32>];
/// assert_eq!(row, vec![Value::Integer(200), Value::Text("name200".into()), Value::Null]);
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}

/// A macro to build the argument list of [`select_in`](crate::select_in).
///
/// Scalars stay scalars, `Vec`s and slices become lists expanded into `?, ?, ?`.
///
/// # Example
///
/// ```
/// use sqlx_util::{in_args, Arg};
///
/// let args = in_args!["active", vec![2, 4, 6]];
/// assert!(matches!(args[1], Arg::List(ref values) if values.len() == 3));
/// ```
#[macro_export]
macro_rules! in_args {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Arg::from($value)),*]
    };
}

#[cfg(not(feature = "turso"))]
macro_rules! binds {
    ($args:expr, $stream:expr) => {{
        for arg in $args {
            $stream = match arg {
                $crate::Value::Null => $stream.bind(Option::<String>::None),
                $crate::Value::Integer(v) => $stream.bind(v),
                $crate::Value::Real(v) => $stream.bind(v),
                $crate::Value::Text(v) => $stream.bind(v),
                $crate::Value::Boolean(v) => $stream.bind(v),
                $crate::Value::Blob(v) => $stream.bind(v),
            };
        }
    }};
}

#[cfg(feature = "turso")]
macro_rules! binds {
    ($args:expr) => {{
        use libsql::Value;
        let mut params = Vec::new();
        for arg in $args {
            params.push(match arg {
                $crate::Value::Null => Value::Null,
                $crate::Value::Integer(v) => Value::Integer(v),
                $crate::Value::Real(v) => Value::Real(v),
                $crate::Value::Text(v) => Value::Text(v),
                $crate::Value::Boolean(v) => Value::Integer(i64::from(v)),
                $crate::Value::Blob(v) => Value::Blob(v),
            });
        }
        libsql::params_from_iter(params)
    }};
}
