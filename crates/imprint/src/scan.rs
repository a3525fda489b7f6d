//! Template scanning.
//!
//! The scanner copies literal text between `%` occurrences and drives the
//! parse → resolve → render pipeline for each directive. The first error
//! aborts the call; there is no partial-output contract.

use imprint_directive::{ArgCursor, ConversionKind, Directive};

use crate::error::{FormatError, Result};
use crate::render;
use crate::value::Value;

/// Renders `template` against `args`.
///
/// Non-`%` characters are copied verbatim; each `%` introduces a directive
/// resolved against the argument list. See the crate docs for the directive
/// grammar.
///
/// # Example
///
/// ```
/// use imprint::Value;
///
/// let out = imprint::format("%d of %d", &[Value::Int(3), Value::Int(10)]).unwrap();
/// assert_eq!(out, "3 of 10");
/// ```
pub fn format(template: &str, args: &[Value]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut cursor = ArgCursor::new();
    let mut pos = 0;

    while let Some(found) = template[pos..].find('%') {
        let percent = pos + found;
        out.push_str(&template[pos..percent]);

        let (directive, next) = Directive::parse(template, percent, &mut cursor)?;
        if directive.kind == ConversionKind::Percent {
            out.push('%');
        } else {
            let value = resolve(args, &directive)?;
            out.push_str(&render::render(&directive, value)?);
        }
        pos = next;
    }
    out.push_str(&template[pos..]);

    Ok(out)
}

fn resolve<'a>(args: &'a [Value], directive: &Directive) -> Result<&'a Value> {
    args.get(directive.argument_index).ok_or(FormatError::Index {
        index: directive.argument_index,
        supplied: args.len(),
    })
}
