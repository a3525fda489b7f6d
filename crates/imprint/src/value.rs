//! Runtime argument values.
//!
//! Format arguments are a closed [`Value`] variant rather than an open "any"
//! list, so the renderer can match exhaustively per conversion kind and a
//! type mismatch is an ordinary error instead of a crash. `From`
//! conversions cover the primitive types, strings, `Option` (where `None`
//! becomes [`Value::Null`]), the chrono date-time types, and
//! `serde_json::Value` for dynamic data.

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone, Utc};

use crate::time;

/// One argument to [`format`](crate::format).
///
/// # Example
///
/// ```
/// use imprint::Value;
///
/// let args = [Value::from("total"), Value::from(42), Value::from(None::<i64>)];
/// assert_eq!(imprint::format("%s=%d (%s)", &args).unwrap(), "total=42 (nil)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text.
    Text(String),
    /// Boolean.
    Bool(bool),
    /// A point in time carrying its own zone offset.
    Timestamp(DateTime<FixedOffset>),
    /// The absent value; renders as `nil` where a conversion allows it.
    Null,
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Human-readable name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Timestamp(_) => "timestamp",
            Value::Null => "null",
        }
    }

    /// The plain text form of the value, as rendered by `%s` and `%c`.
    pub(crate) fn text_form(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Float(f) if f.is_nan() => "NaN".to_string(),
            Value::Float(f) if f.is_infinite() => {
                let token = if *f < 0.0 { "-Infinity" } else { "Infinity" };
                token.to_string()
            }
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Timestamp(ts) => time::full_text(ts),
            Value::Null => "nil".to_string(),
        }
    }
}

macro_rules! from_int {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::Int(n as i64)
            }
        })+
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(ch: char) -> Self {
        Value::Text(ch.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Timestamp(ts.fixed_offset())
    }
}

impl From<DateTime<Local>> for Value {
    fn from(ts: DateTime<Local>) -> Self {
        Value::Timestamp(ts.fixed_offset())
    }
}

/// Naive date-times are interpreted in the system-local zone; across a DST
/// gap the earliest valid instant wins, with UTC as the last resort.
impl From<NaiveDateTime> for Value {
    fn from(naive: NaiveDateTime) -> Self {
        let resolved = match Local.from_local_datetime(&naive) {
            LocalResult::Single(ts) => ts.fixed_offset(),
            LocalResult::Ambiguous(earliest, _) => earliest.fixed_offset(),
            LocalResult::None => Utc.from_utc_datetime(&naive).fixed_offset(),
        };
        Value::Timestamp(resolved)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            // Arrays and objects keep their JSON representation.
            other => Value::Text(other.to_string()),
        }
    }
}
