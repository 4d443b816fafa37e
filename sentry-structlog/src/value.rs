use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// The value of an [`Attr`].
#[derive(Clone, Debug)]
pub enum Value {
    /// A string.
    String(String),
    /// A signed integer.
    I64(i64),
    /// An unsigned integer.
    U64(u64),
    /// A floating point number.
    F64(f64),
    /// A boolean.
    Bool(bool),
    /// A span of time.
    Duration(Duration),
    /// An error object.
    Error(Arc<dyn Error + Send + Sync + 'static>),
    /// A nested list of attributes.
    Group(Vec<Attr>),
    /// Any other value, captured through its `Debug` representation.
    Other(String),
}

impl Value {
    /// Wraps an error so it can be attached to a record.
    pub fn error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Value::Error(Arc::new(error))
    }

    /// Captures an arbitrary value through its `Debug` representation.
    pub fn from_debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Value::Other(format!("{value:?}"))
    }

    /// Returns the contained error, if this value holds one.
    pub fn as_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Value::Error(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(value) | Value::Other(value) => f.write_str(value),
            Value::I64(value) => fmt::Display::fmt(value, f),
            Value::U64(value) => fmt::Display::fmt(value, f),
            Value::F64(value) => fmt::Display::fmt(value, f),
            Value::Bool(value) => fmt::Display::fmt(value, f),
            Value::Duration(value) => write!(f, "{value:?}"),
            Value::Error(error) => fmt::Display::fmt(error, f),
            Value::Group(attrs) => {
                f.write_str("[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{attr}")?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from! {
    &str => String as String,
    String => String as String,
    Cow<'_, str> => String as String,
    i8 => I64 as i64,
    i16 => I64 as i64,
    i32 => I64 as i64,
    i64 => I64 as i64,
    u8 => U64 as u64,
    u16 => U64 as u64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    f32 => F64 as f64,
    f64 => F64 as f64,
    bool => Bool as bool,
    Duration => Duration as Duration,
    Vec<Attr> => Group as Vec<Attr>,
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::U64(value as u64)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::I64(value as i64)
    }
}

impl From<Arc<dyn Error + Send + Sync + 'static>> for Value {
    fn from(error: Arc<dyn Error + Send + Sync + 'static>) -> Self {
        Value::Error(error)
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Value {
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Value::Error(Arc::from(error))
    }
}

/// A key/value pair attached to a [`Record`](crate::Record).
#[derive(Clone, Debug)]
pub struct Attr {
    /// The attribute key.
    pub key: String,
    /// The attribute value.
    pub value: Value,
}

impl Attr {
    /// Creates a new attribute.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Attr {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
