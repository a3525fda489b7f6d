//! Printf-style format directive parser.
//!
//! This crate parses one `%...` directive out of a template string into a
//! [`Directive`] record: argument reference, flags, width, precision,
//! conversion kind, and (for `t`/`T`) a date/time field. The renderer that
//! consumes the record lives in the `imprint` crate; this crate knows nothing
//! about values or output.
//!
//! # Grammar
//!
//! ```text
//! directive   := "%" [argindex] [flags] [width] ["." precision] conv [timespec]
//! argindex    := digit+ "$" | "<"
//! flags       := *("-" / "#" / "+" / " " / "0" / "," / "(")
//! width       := digit+
//! precision   := digit+
//! conv        := one of "sSbBhHcCdoxXeEfgGtT%"
//! timespec    := one of "HIklMSLNpzZsQBbAaYyCjdeRTrDFc"   (only after t/T)
//! ```
//!
//! # Example
//!
//! ```rust
//! use imprint_directive::{ArgCursor, ConversionKind, Directive};
//!
//! let mut cursor = ArgCursor::new();
//! let (directive, next) = Directive::parse("%-8.3f", 0, &mut cursor).unwrap();
//!
//! assert_eq!(directive.kind, ConversionKind::Float);
//! assert!(directive.left_justified);
//! assert_eq!(directive.width, 8);
//! assert_eq!(directive.precision, Some(3));
//! assert_eq!(next, 6);
//! ```
//!
//! Parsing is a small state machine: `ArgIndex → Flags → Width → Precision →
//! Conversion → DateTime → Done`, one method per state. A leading `0` that is
//! not part of an explicit `n$` index is the zero-pad flag, the conventional
//! printf rule, so `%05d` parses as zero-padded with width 5.

use thiserror::Error;

/// Category of output a directive produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// `s`/`S` - text form of the argument.
    String,
    /// `%` - literal percent sign, consumes no argument.
    Percent,
    /// `b`/`B` - boolean.
    Bool,
    /// `h`/`H` - stable identity token.
    Hash,
    /// `c`/`C` - first character of the text form.
    Char,
    /// `d` - base-10 integer.
    Decimal,
    /// `o` - unsigned base-8 integer.
    Octal,
    /// `x`/`X` - unsigned base-16 integer.
    Hex,
    /// `e`/`E` - scientific notation.
    Exp,
    /// `f` - fixed-point.
    Float,
    /// `g`/`G` - fixed or scientific, chosen by magnitude.
    GeneralFloat,
    /// `t`/`T` - date/time field, refined by [`TimeField`].
    Time,
}

impl ConversionKind {
    /// Kinds rendered as numbers, eligible for zero padding.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ConversionKind::Decimal
                | ConversionKind::Octal
                | ConversionKind::Hex
                | ConversionKind::Exp
                | ConversionKind::Float
                | ConversionKind::GeneralFloat
        )
    }
}

/// Date/time field selected by the character after `t`/`T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// `H` - hour of day, 00-23.
    Hour024,
    /// `I` - hour on the 12-hour clock, 01-12.
    Hour012,
    /// `k` - hour of day, 0-23, no padding.
    Hour24,
    /// `l` - hour on the 12-hour clock, 1-12, no padding.
    Hour12,
    /// `M` - minute, 00-59.
    Minute,
    /// `S` - second, 00-59.
    Second,
    /// `L` - millisecond, 000-999.
    Millis,
    /// `N` - nanosecond, nine digits.
    Nanos,
    /// `p` - AM or PM.
    AmPm,
    /// `z` - numeric zone offset, ±HHMM.
    TzNumeric,
    /// `Z` - zone name.
    TzName,
    /// `s` - seconds since the Unix epoch.
    EpochSeconds,
    /// `Q` - milliseconds since the Unix epoch.
    EpochMillis,
    /// `B` - full month name.
    MonthLong,
    /// `b` - abbreviated month name.
    MonthShort,
    /// `A` - full weekday name.
    DayLong,
    /// `a` - abbreviated weekday name.
    DayShort,
    /// `Y` - four-digit year.
    YearLong,
    /// `y` - two-digit year.
    YearShort,
    /// `C` - century, two digits.
    Century,
    /// `j` - day of year, 001-366.
    DayOfYear,
    /// `d` - day of month, zero-padded.
    DayZero,
    /// `e` - day of month, space-padded.
    DaySpace,
    /// `R` - "HH:MM".
    HourMinute,
    /// `T` - "HH:MM:SS".
    HourMinuteSecond,
    /// `r` - "hh:mm:ss AM/PM".
    Clock12,
    /// `D` - "MM/DD/YY".
    DateUs,
    /// `F` - "YYYY-MM-DD".
    DateIso,
    /// `c` - full date and time.
    Full,
}

impl TimeField {
    /// Maps the character following `t`/`T` to a field, if valid.
    pub fn from_char(ch: char) -> Option<TimeField> {
        match ch {
            'H' => Some(TimeField::Hour024),
            'I' => Some(TimeField::Hour012),
            'k' => Some(TimeField::Hour24),
            'l' => Some(TimeField::Hour12),
            'M' => Some(TimeField::Minute),
            'S' => Some(TimeField::Second),
            'L' => Some(TimeField::Millis),
            'N' => Some(TimeField::Nanos),
            'p' => Some(TimeField::AmPm),
            'z' => Some(TimeField::TzNumeric),
            'Z' => Some(TimeField::TzName),
            's' => Some(TimeField::EpochSeconds),
            'Q' => Some(TimeField::EpochMillis),
            'B' => Some(TimeField::MonthLong),
            'b' => Some(TimeField::MonthShort),
            'A' => Some(TimeField::DayLong),
            'a' => Some(TimeField::DayShort),
            'Y' => Some(TimeField::YearLong),
            'y' => Some(TimeField::YearShort),
            'C' => Some(TimeField::Century),
            'j' => Some(TimeField::DayOfYear),
            'd' => Some(TimeField::DayZero),
            'e' => Some(TimeField::DaySpace),
            'R' => Some(TimeField::HourMinute),
            'T' => Some(TimeField::HourMinuteSecond),
            'r' => Some(TimeField::Clock12),
            'D' => Some(TimeField::DateUs),
            'F' => Some(TimeField::DateIso),
            'c' => Some(TimeField::Full),
            _ => None,
        }
    }
}

/// Per-call argument position tracker.
///
/// The cursor supplies the index for directives that carry no explicit
/// reference and remembers the most recently resolved index so `%<` can
/// re-reference it. Explicit (`n$`) and relative (`<`) references update the
/// remembered index without advancing the counter.
#[derive(Debug, Clone, Default)]
pub struct ArgCursor {
    next: usize,
    last: Option<usize>,
}

impl ArgCursor {
    /// Creates a cursor positioned at the first argument.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the next implicit index, advancing the counter.
    pub fn take_next(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        self.last = Some(index);
        index
    }

    /// Records an explicitly referenced index as the most recent one.
    pub fn mark(&mut self, index: usize) {
        self.last = Some(index);
    }

    /// The most recently resolved index, if any argument has been used.
    pub fn last(&self) -> Option<usize> {
        self.last
    }
}

/// Malformed directive errors.
///
/// Every variant carries the byte offset of the directive's `%` in the
/// template; most also carry the offending substring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The template ended before the directive was complete.
    #[error("unterminated format directive '{fragment}' at byte {offset}")]
    Unterminated { fragment: String, offset: usize },

    /// `%<` before any argument had been resolved.
    #[error("'%<' at byte {offset} refers to a previous argument, but none has been used yet")]
    NoPreviousArgument { offset: usize },

    /// Explicit argument indices are 1-based; `0$` is invalid.
    #[error("explicit argument index in '{fragment}' at byte {offset} must be 1 or greater")]
    ZeroArgumentIndex { fragment: String, offset: usize },

    /// A `.` with no digits after it.
    #[error("expected digits after '.' in '{fragment}' at byte {offset}")]
    MissingPrecision { fragment: String, offset: usize },

    /// A character that is not a conversion.
    #[error("unknown conversion '{found}' in '{fragment}' at byte {offset}")]
    UnknownConversion {
        found: char,
        fragment: String,
        offset: usize,
    },

    /// A character after `t`/`T` that is not a date/time field.
    #[error("unknown date/time field '{found}' in '{fragment}' at byte {offset}")]
    UnknownTimeField {
        found: char,
        fragment: String,
        offset: usize,
    },

    /// An index, width, or precision too large to represent.
    #[error("number in '{fragment}' at byte {offset} is too large")]
    Oversized { fragment: String, offset: usize },
}

/// Result type for directive parsing.
pub type Result<T> = std::result::Result<T, SyntaxError>;

/// One parsed `%...` format specifier.
///
/// Built per `%` occurrence and consumed immediately by the renderer.
/// `width == 0` means unset; `time_field` is `Some` exactly when `kind` is
/// [`ConversionKind::Time`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub argument_index: usize,
    pub left_justified: bool,
    pub alternate_form: bool,
    pub include_sign: bool,
    pub leading_space: bool,
    pub zero_padded: bool,
    pub grouping_separators: bool,
    pub negative_parentheses: bool,
    pub upper_case: bool,
    pub width: usize,
    pub precision: Option<usize>,
    pub kind: ConversionKind,
    pub time_field: Option<TimeField>,
}

impl Directive {
    fn empty() -> Self {
        Self {
            argument_index: 0,
            left_justified: false,
            alternate_form: false,
            include_sign: false,
            leading_space: false,
            zero_padded: false,
            grouping_separators: false,
            negative_parentheses: false,
            upper_case: false,
            width: 0,
            precision: None,
            kind: ConversionKind::Percent,
            time_field: None,
        }
    }

    /// Parses the directive whose `%` sits at byte `percent` in `template`.
    ///
    /// On success returns the directive and the byte offset where scanning
    /// should resume. The cursor supplies implicit argument indices and
    /// tracks the last resolved one; `%%` leaves it untouched.
    pub fn parse(
        template: &str,
        percent: usize,
        cursor: &mut ArgCursor,
    ) -> Result<(Directive, usize)> {
        let mut parser = Parser {
            template,
            percent,
            pos: percent + 1,
            indexed: false,
        };
        let mut directive = Directive::empty();
        let mut state = State::ArgIndex;

        while state != State::Done {
            state = match state {
                State::ArgIndex => parser.arg_index(&mut directive, cursor)?,
                State::Flags => parser.flags(&mut directive),
                State::Width => parser.width(&mut directive)?,
                State::Precision => parser.precision(&mut directive)?,
                State::Conversion => parser.conversion(&mut directive, cursor)?,
                State::DateTime => parser.date_time(&mut directive)?,
                State::Done => State::Done,
            };
        }

        Ok((directive, parser.pos))
    }
}

/// Parser states, visited in declaration order with fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ArgIndex,
    Flags,
    Width,
    Precision,
    Conversion,
    DateTime,
    Done,
}

struct Parser<'a> {
    template: &'a str,
    percent: usize,
    pos: usize,
    /// Whether an explicit or relative argument reference was consumed.
    indexed: bool,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.template[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// The directive text consumed so far, for error reporting.
    fn fragment(&self) -> String {
        self.template[self.percent..self.pos].to_string()
    }

    /// Consumes a run of ASCII digits, if one starts here.
    fn digit_run(&mut self) -> Result<Option<usize>> {
        let mut value: Option<usize> = None;
        while let Some(ch) = self.peek() {
            let Some(digit) = ch.to_digit(10) else { break };
            let accumulated = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit as usize));
            match accumulated {
                Some(v) => value = Some(v),
                None => {
                    return Err(SyntaxError::Oversized {
                        fragment: self.fragment(),
                        offset: self.percent,
                    })
                }
            }
            self.bump();
        }
        Ok(value)
    }

    /// `<` reuses the last resolved index; `digits$` is an explicit 1-based
    /// index. A bare digit run is left in place for the flag/width states.
    fn arg_index(&mut self, directive: &mut Directive, cursor: &mut ArgCursor) -> Result<State> {
        match self.peek() {
            Some('<') => {
                let last = cursor.last().ok_or(SyntaxError::NoPreviousArgument {
                    offset: self.percent,
                })?;
                self.bump();
                directive.argument_index = last;
                self.indexed = true;
            }
            Some(ch) if ch.is_ascii_digit() => {
                let rest = &self.template[self.pos..];
                let digits = rest
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(rest.len());
                if rest[digits..].starts_with('$') {
                    let value = self.digit_run()?.unwrap_or(0);
                    self.bump();
                    if value == 0 {
                        return Err(SyntaxError::ZeroArgumentIndex {
                            fragment: self.fragment(),
                            offset: self.percent,
                        });
                    }
                    directive.argument_index = value - 1;
                    cursor.mark(value - 1);
                    self.indexed = true;
                }
            }
            _ => {}
        }
        Ok(State::Flags)
    }

    fn flags(&mut self, directive: &mut Directive) -> State {
        while let Some(ch) = self.peek() {
            match ch {
                '-' => directive.left_justified = true,
                '#' => directive.alternate_form = true,
                '+' => directive.include_sign = true,
                ' ' => directive.leading_space = true,
                '0' => directive.zero_padded = true,
                ',' => directive.grouping_separators = true,
                '(' => directive.negative_parentheses = true,
                _ => return State::Width,
            }
            self.bump();
        }
        State::Width
    }

    fn width(&mut self, directive: &mut Directive) -> Result<State> {
        if let Some(width) = self.digit_run()? {
            directive.width = width;
        }
        Ok(State::Precision)
    }

    fn precision(&mut self, directive: &mut Directive) -> Result<State> {
        if self.peek() == Some('.') {
            self.bump();
            match self.digit_run()? {
                Some(precision) => directive.precision = Some(precision),
                None => {
                    return Err(SyntaxError::MissingPrecision {
                        fragment: self.fragment(),
                        offset: self.percent,
                    })
                }
            }
        }
        Ok(State::Conversion)
    }

    /// Consumes the conversion character and, unless the directive is `%%`
    /// or carried an explicit reference, claims the next implicit argument.
    fn conversion(&mut self, directive: &mut Directive, cursor: &mut ArgCursor) -> Result<State> {
        let Some(ch) = self.bump() else {
            return Err(SyntaxError::Unterminated {
                fragment: self.fragment(),
                offset: self.percent,
            });
        };
        directive.upper_case = ch.is_ascii_uppercase();
        directive.kind = match ch {
            's' | 'S' => ConversionKind::String,
            'b' | 'B' => ConversionKind::Bool,
            'h' | 'H' => ConversionKind::Hash,
            'c' | 'C' => ConversionKind::Char,
            'x' | 'X' => ConversionKind::Hex,
            'e' | 'E' => ConversionKind::Exp,
            'g' | 'G' => ConversionKind::GeneralFloat,
            't' | 'T' => ConversionKind::Time,
            '%' => ConversionKind::Percent,
            'd' => ConversionKind::Decimal,
            'o' => ConversionKind::Octal,
            'f' => ConversionKind::Float,
            found => {
                return Err(SyntaxError::UnknownConversion {
                    found,
                    fragment: self.fragment(),
                    offset: self.percent,
                })
            }
        };
        if directive.kind != ConversionKind::Percent && !self.indexed {
            directive.argument_index = cursor.take_next();
        }
        Ok(if directive.kind == ConversionKind::Time {
            State::DateTime
        } else {
            State::Done
        })
    }

    fn date_time(&mut self, directive: &mut Directive) -> Result<State> {
        let Some(ch) = self.bump() else {
            return Err(SyntaxError::Unterminated {
                fragment: self.fragment(),
                offset: self.percent,
            });
        };
        match TimeField::from_char(ch) {
            Some(field) => {
                directive.time_field = Some(field);
                Ok(State::Done)
            }
            None => Err(SyntaxError::UnknownTimeField {
                found: ch,
                fragment: self.fragment(),
                offset: self.percent,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(template: &str) -> Directive {
        let mut cursor = ArgCursor::new();
        let (directive, _) = Directive::parse(template, 0, &mut cursor).unwrap();
        directive
    }

    fn parse_err(template: &str) -> SyntaxError {
        let mut cursor = ArgCursor::new();
        Directive::parse(template, 0, &mut cursor).unwrap_err()
    }

    mod cursor {
        use super::*;

        #[test]
        fn counts_up_from_zero() {
            let mut cursor = ArgCursor::new();
            assert_eq!(cursor.take_next(), 0);
            assert_eq!(cursor.take_next(), 1);
            assert_eq!(cursor.last(), Some(1));
        }

        #[test]
        fn starts_with_no_last() {
            assert_eq!(ArgCursor::new().last(), None);
        }

        #[test]
        fn mark_does_not_advance() {
            let mut cursor = ArgCursor::new();
            cursor.mark(7);
            assert_eq!(cursor.last(), Some(7));
            assert_eq!(cursor.take_next(), 0);
        }
    }

    mod arg_index {
        use super::*;

        #[test]
        fn implicit_indices_count_up() {
            let mut cursor = ArgCursor::new();
            let (first, _) = Directive::parse("%s", 0, &mut cursor).unwrap();
            let (second, _) = Directive::parse("%d", 0, &mut cursor).unwrap();
            assert_eq!(first.argument_index, 0);
            assert_eq!(second.argument_index, 1);
        }

        #[test]
        fn explicit_index_is_one_based() {
            assert_eq!(parse_one("%3$s").argument_index, 2);
        }

        #[test]
        fn explicit_index_does_not_advance_cursor() {
            let mut cursor = ArgCursor::new();
            Directive::parse("%2$s", 0, &mut cursor).unwrap();
            let (implicit, _) = Directive::parse("%s", 0, &mut cursor).unwrap();
            assert_eq!(implicit.argument_index, 0);
        }

        #[test]
        fn relative_reuses_last_index() {
            let mut cursor = ArgCursor::new();
            Directive::parse("%s", 0, &mut cursor).unwrap();
            let (relative, _) = Directive::parse("%<s", 0, &mut cursor).unwrap();
            assert_eq!(relative.argument_index, 0);
        }

        #[test]
        fn relative_after_explicit() {
            let mut cursor = ArgCursor::new();
            Directive::parse("%4$s", 0, &mut cursor).unwrap();
            let (relative, _) = Directive::parse("%<s", 0, &mut cursor).unwrap();
            assert_eq!(relative.argument_index, 3);
        }

        #[test]
        fn relative_without_prior_argument_fails() {
            assert!(matches!(
                parse_err("%<s"),
                SyntaxError::NoPreviousArgument { offset: 0 }
            ));
        }

        #[test]
        fn zero_explicit_index_fails() {
            assert!(matches!(
                parse_err("%0$s"),
                SyntaxError::ZeroArgumentIndex { .. }
            ));
        }
    }

    mod flags_and_width {
        use super::*;

        #[test]
        fn each_flag_sets_its_field() {
            let d = parse_one("%-#+ 0,(d");
            assert!(d.left_justified);
            assert!(d.alternate_form);
            assert!(d.include_sign);
            assert!(d.leading_space);
            assert!(d.zero_padded);
            assert!(d.grouping_separators);
            assert!(d.negative_parentheses);
        }

        #[test]
        fn width_parses() {
            assert_eq!(parse_one("%12d").width, 12);
        }

        #[test]
        fn leading_zero_is_flag_not_width() {
            let d = parse_one("%05d");
            assert!(d.zero_padded);
            assert_eq!(d.width, 5);
        }

        #[test]
        fn zero_alone_is_flag_with_no_width() {
            let d = parse_one("%0d");
            assert!(d.zero_padded);
            assert_eq!(d.width, 0);
        }

        #[test]
        fn width_zero_means_unset() {
            assert_eq!(parse_one("%d").width, 0);
        }

        #[test]
        fn explicit_index_then_width() {
            let d = parse_one("%2$10s");
            assert_eq!(d.argument_index, 1);
            assert_eq!(d.width, 10);
        }

        #[test]
        fn oversized_width_fails() {
            assert!(matches!(
                parse_err("%99999999999999999999999d"),
                SyntaxError::Oversized { .. }
            ));
        }
    }

    mod precision {
        use super::*;

        #[test]
        fn parses_after_dot() {
            assert_eq!(parse_one("%.2f").precision, Some(2));
        }

        #[test]
        fn width_and_precision() {
            let d = parse_one("%8.3f");
            assert_eq!(d.width, 8);
            assert_eq!(d.precision, Some(3));
        }

        #[test]
        fn zero_precision_is_present() {
            assert_eq!(parse_one("%.0f").precision, Some(0));
        }

        #[test]
        fn absent_precision_is_none() {
            assert_eq!(parse_one("%f").precision, None);
        }

        #[test]
        fn dot_without_digits_fails() {
            assert!(matches!(
                parse_err("%.f"),
                SyntaxError::MissingPrecision { .. }
            ));
        }

        #[test]
        fn dot_at_end_fails() {
            assert!(matches!(
                parse_err("%."),
                SyntaxError::MissingPrecision { .. }
            ));
        }
    }

    mod conversion {
        use super::*;

        #[test]
        fn lower_and_upper_variants() {
            let lower = parse_one("%x");
            let upper = parse_one("%X");
            assert_eq!(lower.kind, ConversionKind::Hex);
            assert_eq!(upper.kind, ConversionKind::Hex);
            assert!(!lower.upper_case);
            assert!(upper.upper_case);
        }

        #[test]
        fn all_kinds_map() {
            for (template, kind) in [
                ("%s", ConversionKind::String),
                ("%%", ConversionKind::Percent),
                ("%b", ConversionKind::Bool),
                ("%h", ConversionKind::Hash),
                ("%c", ConversionKind::Char),
                ("%d", ConversionKind::Decimal),
                ("%o", ConversionKind::Octal),
                ("%x", ConversionKind::Hex),
                ("%e", ConversionKind::Exp),
                ("%f", ConversionKind::Float),
                ("%g", ConversionKind::GeneralFloat),
                ("%tH", ConversionKind::Time),
            ] {
                assert_eq!(parse_one(template).kind, kind, "{template}");
            }
        }

        #[test]
        fn upper_only_variants_of_d_o_f_are_errors() {
            for template in ["%D", "%O", "%F"] {
                assert!(
                    matches!(parse_err(template), SyntaxError::UnknownConversion { .. }),
                    "{template}"
                );
            }
        }

        #[test]
        fn unknown_conversion_reports_char_and_fragment() {
            match parse_err("%5q") {
                SyntaxError::UnknownConversion {
                    found,
                    fragment,
                    offset,
                } => {
                    assert_eq!(found, 'q');
                    assert_eq!(fragment, "%5q");
                    assert_eq!(offset, 0);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn percent_consumes_no_argument() {
            let mut cursor = ArgCursor::new();
            let (d, next) = Directive::parse("%%", 0, &mut cursor).unwrap();
            assert_eq!(d.kind, ConversionKind::Percent);
            assert_eq!(next, 2);
            assert_eq!(cursor.last(), None);
            assert_eq!(cursor.take_next(), 0);
        }

        #[test]
        fn dangling_percent_fails() {
            assert!(matches!(parse_err("%"), SyntaxError::Unterminated { .. }));
            assert!(matches!(parse_err("%-5"), SyntaxError::Unterminated { .. }));
        }

        #[test]
        fn reports_offset_of_percent() {
            let mut cursor = ArgCursor::new();
            let err = Directive::parse("abc %q", 4, &mut cursor).unwrap_err();
            assert!(matches!(
                err,
                SyntaxError::UnknownConversion { offset: 4, .. }
            ));
        }
    }

    mod date_time {
        use super::*;

        #[test]
        fn time_field_attaches() {
            let d = parse_one("%tY");
            assert_eq!(d.kind, ConversionKind::Time);
            assert_eq!(d.time_field, Some(TimeField::YearLong));
        }

        #[test]
        fn upper_case_time_records_case() {
            let d = parse_one("%TH");
            assert!(d.upper_case);
            assert_eq!(d.time_field, Some(TimeField::Hour024));
        }

        #[test]
        fn every_documented_field_maps() {
            let table = [
                ('H', TimeField::Hour024),
                ('I', TimeField::Hour012),
                ('k', TimeField::Hour24),
                ('l', TimeField::Hour12),
                ('M', TimeField::Minute),
                ('S', TimeField::Second),
                ('L', TimeField::Millis),
                ('N', TimeField::Nanos),
                ('p', TimeField::AmPm),
                ('z', TimeField::TzNumeric),
                ('Z', TimeField::TzName),
                ('s', TimeField::EpochSeconds),
                ('Q', TimeField::EpochMillis),
                ('B', TimeField::MonthLong),
                ('b', TimeField::MonthShort),
                ('A', TimeField::DayLong),
                ('a', TimeField::DayShort),
                ('Y', TimeField::YearLong),
                ('y', TimeField::YearShort),
                ('C', TimeField::Century),
                ('j', TimeField::DayOfYear),
                ('d', TimeField::DayZero),
                ('e', TimeField::DaySpace),
                ('R', TimeField::HourMinute),
                ('T', TimeField::HourMinuteSecond),
                ('r', TimeField::Clock12),
                ('D', TimeField::DateUs),
                ('F', TimeField::DateIso),
                ('c', TimeField::Full),
            ];
            for (ch, field) in table {
                assert_eq!(TimeField::from_char(ch), Some(field), "{ch}");
            }
        }

        #[test]
        fn unknown_time_field_fails() {
            assert!(matches!(
                parse_err("%tq"),
                SyntaxError::UnknownTimeField { found: 'q', .. }
            ));
        }

        #[test]
        fn truncated_time_directive_fails() {
            assert!(matches!(parse_err("%t"), SyntaxError::Unterminated { .. }));
        }

        #[test]
        fn time_field_only_for_time_kind() {
            assert_eq!(parse_one("%d").time_field, None);
        }
    }

    mod resume_position {
        use super::*;

        #[test]
        fn points_past_the_directive() {
            let mut cursor = ArgCursor::new();
            let (_, next) = Directive::parse("x%5dy", 1, &mut cursor).unwrap();
            assert_eq!(next, 4);
            let (_, next) = Directive::parse("%tF!", 0, &mut cursor).unwrap();
            assert_eq!(next, 3);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn any_width_round_trips(width in 1usize..100_000) {
            let template = format!("%{width}d");
            let mut cursor = ArgCursor::new();
            let (d, next) = Directive::parse(&template, 0, &mut cursor).unwrap();
            prop_assert_eq!(d.width, width);
            prop_assert_eq!(next, template.len());
        }

        #[test]
        fn any_precision_round_trips(precision in 0usize..100_000) {
            let template = format!("%.{precision}f");
            let mut cursor = ArgCursor::new();
            let (d, _) = Directive::parse(&template, 0, &mut cursor).unwrap();
            prop_assert_eq!(d.precision, Some(precision));
        }

        #[test]
        fn junk_conversions_are_rejected(ch in any::<char>()) {
            prop_assume!(!"sSbBhHcCdoxXeEfgGtT%".contains(ch));
            prop_assume!(!ch.is_ascii_digit());
            prop_assume!(!"-#+ 0,(<.".contains(ch));
            let template = format!("%{ch}");
            let mut cursor = ArgCursor::new();
            prop_assert!(Directive::parse(&template, 0, &mut cursor).is_err());
        }

        #[test]
        fn parse_never_panics(suffix in "\\PC{0,12}") {
            let template = format!("%{suffix}");
            let mut cursor = ArgCursor::new();
            let _ = Directive::parse(&template, 0, &mut cursor);
        }
    }
}
