//! Per-kind value rendering and post-processing.
//!
//! Each conversion kind first produces an unpadded work string, then
//! [`finish`] applies the common post-processing: whole-string uppercase for
//! the kinds with an uppercase variant, then width padding. Numeric kinds
//! with the `0` flag pad with zeros placed after the sign (and after the
//! `0x` prefix of alternate-form hex); renderings with no digits to pad,
//! `nil` and the non-finite tokens, fall back to space padding.

use imprint_directive::{ConversionKind, Directive, TimeField};

use crate::error::FormatError;
use crate::time;
use crate::value::Value;

pub(crate) fn render(directive: &Directive, value: &Value) -> Result<String, FormatError> {
    let (work, digits) = match directive.kind {
        ConversionKind::String => (string_form(directive, value), false),
        ConversionKind::Percent => ("%".to_string(), false),
        ConversionKind::Bool => (bool_form(value)?, false),
        ConversionKind::Hash => (hash_form(value)?, false),
        ConversionKind::Char => (char_form(value), false),
        ConversionKind::Decimal => decimal_form(directive, value)?,
        ConversionKind::Octal => (radix_form(directive, value, false)?, true),
        ConversionKind::Hex => (radix_form(directive, value, true)?, true),
        ConversionKind::Exp => float_form(directive, value, FloatStyle::Scientific)?,
        ConversionKind::Float => float_form(directive, value, FloatStyle::Fixed)?,
        ConversionKind::GeneralFloat => float_form(directive, value, FloatStyle::General)?,
        ConversionKind::Time => (time_form(directive, value)?, false),
    };
    Ok(finish(directive, work, digits))
}

/// Case and width post-processing shared by every kind.
fn finish(directive: &Directive, mut work: String, digits: bool) -> String {
    let uppercases = matches!(
        directive.kind,
        ConversionKind::String
            | ConversionKind::Bool
            | ConversionKind::Hex
            | ConversionKind::Exp
            | ConversionKind::GeneralFloat
    );
    if directive.upper_case && uppercases {
        work = work.to_uppercase();
    }

    let length = work.chars().count();
    if directive.width > length {
        let pad = directive.width - length;
        if directive.left_justified {
            work.push_str(&" ".repeat(pad));
        } else if directive.zero_padded && digits {
            work.insert_str(zero_pad_offset(&work, directive), &"0".repeat(pad));
        } else {
            work.insert_str(0, &" ".repeat(pad));
        }
    }
    work
}

/// Zeros go after the sign character and after a hex `0x`/`0X` prefix.
fn zero_pad_offset(work: &str, directive: &Directive) -> usize {
    let mut offset = match work.as_bytes().first() {
        Some(b'+' | b'-' | b' ' | b'(') => 1,
        _ => 0,
    };
    if directive.kind == ConversionKind::Hex && directive.alternate_form {
        let rest = &work[offset..];
        if rest.starts_with("0x") || rest.starts_with("0X") {
            offset += 2;
        }
    }
    offset
}

fn string_form(directive: &Directive, value: &Value) -> String {
    let text = value.text_form();
    match directive.precision {
        Some(precision) if text.chars().count() > precision => {
            text.chars().take(precision).collect()
        }
        _ => text,
    }
}

fn bool_form(value: &Value) -> Result<String, FormatError> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("nil".to_string()),
        other => Err(mismatch(ConversionKind::Bool, other)),
    }
}

fn char_form(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        other => match other.text_form().chars().next() {
            Some(ch) => ch.to_string(),
            None => " ".to_string(),
        },
    }
}

/// Stable identity token: FNV-1a 64 over the variant tag and content,
/// rendered as hex. Deterministic, but not portable across versions.
fn hash_form(value: &Value) -> Result<String, FormatError> {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    fn feed(mut hash: u64, bytes: &[u8]) -> u64 {
        const PRIME: u64 = 0x1000_0000_01b3;
        for &byte in bytes {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(PRIME);
        }
        hash
    }

    let hash = match value {
        Value::Int(n) => feed(feed(OFFSET_BASIS, b"i"), &n.to_be_bytes()),
        Value::Float(f) => feed(feed(OFFSET_BASIS, b"f"), &f.to_bits().to_be_bytes()),
        Value::Text(s) => feed(feed(OFFSET_BASIS, b"s"), s.as_bytes()),
        Value::Bool(b) => feed(feed(OFFSET_BASIS, b"b"), &[u8::from(*b)]),
        Value::Timestamp(ts) => feed(
            feed(feed(OFFSET_BASIS, b"t"), &ts.timestamp().to_be_bytes()),
            &ts.timestamp_subsec_nanos().to_be_bytes(),
        ),
        other @ Value::Null => return Err(mismatch(ConversionKind::Hash, other)),
    };
    Ok(format!("{hash:x}"))
}

fn decimal_form(directive: &Directive, value: &Value) -> Result<(String, bool), FormatError> {
    let n: i64 = match value {
        Value::Int(n) => *n,
        // Floats truncate toward zero.
        Value::Float(f) if f.is_finite() => *f as i64,
        Value::Null => return Ok(("nil".to_string(), false)),
        other => return Err(mismatch(ConversionKind::Decimal, other)),
    };

    let mut body = n.unsigned_abs().to_string();
    if directive.grouping_separators {
        body = group_thousands(&body);
    }

    let work = if n < 0 {
        if directive.negative_parentheses {
            format!("({body})")
        } else {
            format!("-{body}")
        }
    } else {
        signed_non_negative(directive, body)
    };
    Ok((work, true))
}

fn radix_form(directive: &Directive, value: &Value, hex: bool) -> Result<String, FormatError> {
    let kind = if hex {
        ConversionKind::Hex
    } else {
        ConversionKind::Octal
    };
    let n = match value {
        // Negative integers render as their two's-complement bit pattern.
        Value::Int(n) => *n as u64,
        other => return Err(mismatch(kind, other)),
    };
    let body = if hex {
        format!("{n:x}")
    } else {
        format!("{n:o}")
    };
    Ok(if directive.alternate_form {
        if hex {
            format!("0x{body}")
        } else {
            format!("0{body}")
        }
    } else {
        body
    })
}

#[derive(Clone, Copy)]
enum FloatStyle {
    Fixed,
    Scientific,
    General,
}

fn float_form(
    directive: &Directive,
    value: &Value,
    style: FloatStyle,
) -> Result<(String, bool), FormatError> {
    let kind = match style {
        FloatStyle::Fixed => ConversionKind::Float,
        FloatStyle::Scientific => ConversionKind::Exp,
        FloatStyle::General => ConversionKind::GeneralFloat,
    };
    let f = match value {
        Value::Float(f) => *f,
        Value::Int(n) => *n as f64,
        other => return Err(mismatch(kind, other)),
    };

    if f.is_nan() {
        return Ok(("NaN".to_string(), false));
    }
    if f.is_infinite() {
        let token = if f < 0.0 { "-Infinity" } else { "Infinity" };
        return Ok((token.to_string(), false));
    }

    let body = match style {
        FloatStyle::Fixed => fixed(f.abs(), directive.precision.unwrap_or(6)),
        FloatStyle::Scientific => scientific(f.abs(), directive.precision.unwrap_or(6)),
        FloatStyle::General => general(f.abs(), directive.precision.unwrap_or(6)),
    };
    let work = if f.is_sign_negative() {
        format!("-{body}")
    } else {
        signed_non_negative(directive, body)
    };
    Ok((work, true))
}

fn time_form(directive: &Directive, value: &Value) -> Result<String, FormatError> {
    match value {
        Value::Timestamp(ts) => {
            // The parser attaches a field to every time directive.
            let field = directive.time_field.unwrap_or(TimeField::Full);
            Ok(time::render_field(field, ts))
        }
        other => Err(mismatch(ConversionKind::Time, other)),
    }
}

/// `+` and space apply to non-negative values of the signed numeric kinds,
/// with `+` taking precedence.
fn signed_non_negative(directive: &Directive, body: String) -> String {
    if directive.include_sign {
        format!("+{body}")
    } else if directive.leading_space {
        format!(" {body}")
    } else {
        body
    }
}

/// Inserts `,` every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Scientific notation with an explicit exponent sign and at least two
/// exponent digits, `3.140000e+00`.
fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            let magnitude = exp.unsigned_abs();
            format!("{mantissa}e{sign}{magnitude:02}")
        }
        None => raw,
    }
}

/// General form: `precision` total significant digits (0 reads as 1);
/// scientific when the rounded exponent is below -4 or at least the
/// precision, fixed otherwise.
fn general(value: f64, precision: usize) -> String {
    let significant = precision.max(1);
    let sci = scientific(value, significant - 1);
    let exp: i32 = match sci.rsplit_once('e') {
        Some((_, exponent)) => exponent.parse().unwrap_or(0),
        None => 0,
    };
    if exp < -4 || exp >= significant as i32 {
        sci
    } else {
        let decimals = (significant as i32 - 1 - exp).max(0) as usize;
        fixed(value, decimals)
    }
}

fn mismatch(kind: ConversionKind, value: &Value) -> FormatError {
    FormatError::TypeMismatch {
        conversion: kind_label(kind),
        value_type: value.type_name(),
    }
}

fn kind_label(kind: ConversionKind) -> &'static str {
    match kind {
        ConversionKind::String => "text",
        ConversionKind::Percent => "a percent sign",
        ConversionKind::Bool => "a boolean",
        ConversionKind::Hash => "an identity hash",
        ConversionKind::Char => "a character",
        ConversionKind::Decimal => "a decimal integer",
        ConversionKind::Octal => "an octal integer",
        ConversionKind::Hex => "a hexadecimal integer",
        ConversionKind::Exp => "scientific notation",
        ConversionKind::Float => "a fixed-point number",
        ConversionKind::GeneralFloat => "a general floating-point number",
        ConversionKind::Time => "a date/time field",
    }
}
