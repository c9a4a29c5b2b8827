//! Safe printing of runtime values for error messages
//!
//! Both printers are total: any `RuntimeValue` renders to some string, no
//! matter how it was built. `print_safe` is used for server-side diagnostics,
//! `print_safe_json` for messages echoed back to the client.

use crate::RuntimeValue;
use std::fmt::Write;

const EMPTY_STRING: &str = "(empty string)";

/// Render a value for a diagnostic message.
///
/// Strings are double-quoted as-is, composites are summarized by their size.
pub fn print_safe(value: &RuntimeValue) -> String {
    match value {
        RuntimeValue::String(s) if s.is_empty() => EMPTY_STRING.to_string(),
        RuntimeValue::String(s) => format!("\"{}\"", s),
        RuntimeValue::Null => "null".to_string(),
        RuntimeValue::Boolean(b) => b.to_string(),
        RuntimeValue::Integer(i) => i.to_string(),
        RuntimeValue::Float(f) => format_float(*f),
        RuntimeValue::List(items) => format!("array({})", items.len()),
        RuntimeValue::Object(fields) => format!("object({})", fields.len()),
    }
}

/// Render a value as JSON text, so the client sees what it sent.
///
/// The empty string is spelled out instead of printed as `""`.
pub fn print_safe_json(value: &RuntimeValue) -> String {
    if value.is_empty_string() {
        return EMPTY_STRING.to_string();
    }
    let mut out = String::new();
    write_json(&mut out, value);
    out
}

/// Shortest round-trip form, spelled the way JavaScript prints numbers.
///
/// Magnitudes from `1e21` up and below `1e-6` use exponent form (`1e+100`,
/// `5e-324`); non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        let sign = if f > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }

    let magnitude = f.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let text = format!("{:e}", f);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        f.to_string()
    }
}

fn write_json(out: &mut String, value: &RuntimeValue) {
    match value {
        RuntimeValue::Null => out.push_str("null"),
        RuntimeValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        RuntimeValue::Integer(i) => {
            let _ = write!(out, "{}", i);
        }
        RuntimeValue::Float(f) => out.push_str(&format_float(*f)),
        RuntimeValue::String(s) => write_json_string(out, s),
        RuntimeValue::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json(out, item);
            }
            out.push(']');
        }
        RuntimeValue::Object(fields) => {
            out.push('{');
            for (i, (key, item)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json_string(out, key);
                out.push(':');
                write_json(out, item);
            }
            out.push('}');
        }
    }
}

fn write_json_string(out: &mut String, s: &str) {
    match serde_json::to_string(s) {
        Ok(quoted) => out.push_str(&quoted),
        Err(_) => {
            let _ = write!(out, "{:?}", s);
        }
    }
}
