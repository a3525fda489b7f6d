//! Printf-style string formatting.
//!
//! `imprint` renders a template containing `%` directives against an ordered
//! argument list. Directives support positional (`%2$s`) and relative (`%<`)
//! argument references, the usual flag/width/precision set, twelve
//! conversion kinds, and a family of date/time fields behind `%t`.
//!
//! # Example
//!
//! ```rust
//! use imprint::fmt;
//!
//! let line = fmt!("%-8s|%5d|%.2f", "item", 42, 3.14159).unwrap();
//! assert_eq!(line, "item    |   42|3.14");
//!
//! assert_eq!(fmt!("%,d", 1_234_567).unwrap(), "1,234,567");
//! assert_eq!(fmt!("%2$s %1$s", "world", "hello").unwrap(), "hello world");
//! assert_eq!(fmt!("%s %<s", "twice").unwrap(), "twice twice");
//! ```
//!
//! Arguments are [`Value`]s, a closed variant over integers, floats, text,
//! booleans, timestamps, and null; [`format`] takes a slice of them and the
//! [`fmt!`] macro builds the slice from anything `Into<Value>`:
//!
//! ```rust
//! use imprint::{format, Value};
//!
//! let args = [Value::from("down"), Value::from(3)];
//! assert_eq!(format("%s: %d left", &args).unwrap(), "down: 3 left");
//! ```
//!
//! # Directive grammar
//!
//! ```text
//! directive   := "%" [argindex] [flags] [width] ["." precision] conv [timespec]
//! argindex    := digit+ "$" | "<"
//! flags       := *("-" / "#" / "+" / " " / "0" / "," / "(")
//! width       := digit+
//! precision   := digit+
//! conv        := one of "sSbBhHcCdoxXeEfgGtT%"
//! timespec    := one of "HIklMSLNpzZsQBbAaYyCjdeRTrDFc"   (only if conv is t/T)
//! ```
//!
//! # Errors
//!
//! [`format`] fails with a typed [`FormatError`]: a syntax error carrying
//! the offending substring and byte offset, an out-of-range argument index,
//! or a type mismatch between a value and its conversion. Formatting is
//! pure and deterministic; the first error aborts the call and nothing is
//! returned but the error.

mod error;
mod render;
mod scan;
mod time;
mod value;

pub use error::{FormatError, Result};
pub use scan::format;
pub use value::Value;

// The directive layer, for callers that parse or inspect directives
// themselves.
pub use imprint_directive::{ArgCursor, ConversionKind, Directive, SyntaxError, TimeField};

/// Formats a template with inline arguments, converting each through
/// [`Value::from`].
///
/// # Example
///
/// ```rust
/// use imprint::fmt;
///
/// assert_eq!(fmt!("%05d", 3).unwrap(), "00003");
/// assert_eq!(fmt!("no args").unwrap(), "no args");
/// ```
#[macro_export]
macro_rules! fmt {
    ($template:expr) => {
        $crate::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format($template, &[$($crate::Value::from($arg)),+])
    };
}
