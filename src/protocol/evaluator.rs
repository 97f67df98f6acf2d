//! Task evaluation
//!
//! Computes a received task and renders the result line. This function
//! never fails: division edges, unknown operators, and non-numeric
//! operands all produce the `ERROR` result line, which is a normal
//! protocol message rather than a session error.

use super::task::{Domain, Task};

/// Result line for any business-level computation failure
pub const ERROR_RESULT: &str = "ERROR\n";

/// Float divisors smaller than this in magnitude are treated as zero
pub const FDIV_NEAR_ZERO: f64 = 0.0001;

/// Significant digits used for float-domain output
const FLOAT_PRECISION: i32 = 8;

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluate a parsed task into a newline-terminated result line.
///
/// Integer-domain arithmetic is carried out in f64 and truncated toward
/// zero for display, exactly like the float domain with a narrower output
/// format. Float-domain output uses 8 significant digits in general
/// format (fixed or scientific notation, whichever is shorter).
pub fn evaluate(task: &Task) -> String {
    let (lhs, rhs) = match task.domain {
        Domain::Float => (parse_float(&task.lhs), parse_float(&task.rhs)),
        Domain::Integer => (parse_integer(&task.lhs), parse_integer(&task.rhs)),
    };

    match task.operator.as_str() {
        "add" => render_integer(lhs + rhs),
        "sub" => render_integer(lhs - rhs),
        "mul" => render_integer(lhs * rhs),
        "div" => {
            if rhs == 0.0 {
                ERROR_RESULT.to_string()
            } else {
                render_integer(lhs / rhs)
            }
        }
        "fadd" => render_float(lhs + rhs),
        "fsub" => render_float(lhs - rhs),
        "fmul" => render_float(lhs * rhs),
        "fdiv" => {
            if rhs.abs() < FDIV_NEAR_ZERO {
                ERROR_RESULT.to_string()
            } else {
                render_float(lhs / rhs)
            }
        }
        _ => ERROR_RESULT.to_string(),
    }
}

/// Evaluate from raw operator and operand text.
pub fn evaluate_parts(operator: &str, lhs: &str, rhs: &str) -> String {
    evaluate(&Task {
        operator: operator.to_string(),
        domain: Domain::of_operator(operator),
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
    })
}

// =============================================================================
// Permissive Operand Parsing
// =============================================================================

/// Parse the longest leading integer prefix of `text` (optional sign plus
/// decimal digits), yielding 0.0 when no digits are present. `"3.7"`
/// parses to 3.
fn parse_integer(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Parse the longest leading float prefix of `text`, yielding 0.0 when no
/// prefix forms a valid number.
fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();

    for end in (1..=s.len()).rev() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = s[..end].parse() {
            return value;
        }
    }
    0.0
}

// =============================================================================
// Result Rendering
// =============================================================================

/// Render an integer-domain result: truncate toward zero, decimal digits,
/// trailing newline.
fn render_integer(value: f64) -> String {
    format!("{}\n", value.trunc() as i64)
}

/// Render a float-domain result with [`FLOAT_PRECISION`] significant
/// digits in general format, trailing newline.
fn render_float(value: f64) -> String {
    format!("{}\n", format_general(value, FLOAT_PRECISION))
}

/// Format a float with `precision` significant digits, choosing fixed or
/// scientific notation by the rounded decimal exponent and trimming
/// trailing fractional zeros, matching C's `%g` conversion.
fn format_general(value: f64, precision: i32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Exponent after rounding to `precision` significant digits, so that
    // e.g. 99999999.6 picks scientific notation as 1e+08.
    let sci = format!("{:.*e}", (precision - 1) as usize, value);
    let (mantissa, exp_text) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exp_text.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        trim_fraction(&fixed).to_string()
    }
}

/// Strip trailing zeros after the decimal point, and the point itself if
/// nothing follows it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
