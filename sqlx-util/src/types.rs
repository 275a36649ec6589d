use crate::{Error, Result};

/// A single scalar bound to one `?` marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    Blob(Vec<u8>),
}

/// An argument handed to [`expand_in`](crate::expand_in).
///
/// Scalars occupy their `?` unchanged, lists become `?, ?, ?` and tuples
/// become `(?, ?), (?, ?)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Scalar(Value),
    List(Vec<Value>),
    Tuples(Vec<Vec<Value>>),
}

impl Arg {
    pub fn list<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Composite keys, e.g. for `WHERE (id, name) IN (?)`.
    pub fn tuples<I, T>(tuples: impl IntoIterator<Item = I>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Tuples(
            tuples
                .into_iter()
                .map(|tuple| tuple.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

/// Outcome of a statement run through [`Executor::execute`](crate::Executor::execute).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
    pub last_insert_id: Option<i64>,
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }

            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Scalar(value.into())
                }
            }

            impl From<Vec<$ty>> for Arg {
                fn from(values: Vec<$ty>) -> Self {
                    Arg::list(values)
                }
            }

            impl From<&[$ty]> for Arg {
                fn from(values: &[$ty]) -> Self {
                    Arg::list(values.iter().cloned())
                }
            }
        )*
    };
}

impl_from_scalar!(
    i8 => Integer,
    i16 => Integer,
    i32 => Integer,
    i64 => Integer,
    u16 => Integer,
    u32 => Integer,
    f32 => Real,
    f64 => Real,
    bool => Boolean,
    String => Text,
    &str => Text,
);

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value.into())
    }
}

impl From<u8> for Arg {
    fn from(value: u8) -> Self {
        Arg::Scalar(value.into())
    }
}

// Bytes are one blob, never a list to expand.
impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(value.to_vec())
    }
}

impl From<Vec<u8>> for Arg {
    fn from(value: Vec<u8>) -> Self {
        Arg::Scalar(value.into())
    }
}

impl From<&[u8]> for Arg {
    fn from(value: &[u8]) -> Self {
        Arg::Scalar(value.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Scalar(value)
    }
}

impl From<Vec<Value>> for Arg {
    fn from(values: Vec<Value>) -> Self {
        Arg::List(values)
    }
}

impl From<Vec<Vec<Value>>> for Arg {
    fn from(tuples: Vec<Vec<Value>>) -> Self {
        Arg::Tuples(tuples)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;
        match value {
            Json::Null => Ok(Value::Null),
            Json::Bool(b) => Ok(Value::Boolean(b)),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Integer(i)),
                None => n
                    .as_f64()
                    .map(Value::Real)
                    .ok_or_else(|| Error::expansion(format!("number {n} is out of range"))),
            },
            Json::String(s) => Ok(Value::Text(s)),
            other => Err(Error::expansion(format!(
                "expected a scalar, got {other}"
            ))),
        }
    }
}

impl TryFrom<serde_json::Value> for Arg {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;
        match value {
            Json::Array(items) if items.iter().any(Json::is_array) => items
                .into_iter()
                .map(|item| match item {
                    Json::Array(tuple) => tuple
                        .into_iter()
                        .map(Value::try_from)
                        .collect::<Result<Vec<_>>>(),
                    other => Err(Error::expansion(format!(
                        "expected a tuple, got {other}"
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Arg::Tuples),
            Json::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Arg::List),
            scalar => Value::try_from(scalar).map(Arg::Scalar),
        }
    }
}
