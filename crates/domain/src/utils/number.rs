//! Lenient coercion of loosely-typed spreadsheet cells
//!
//! Upstream rows come from a spreadsheet, so a price may arrive as `12.5`,
//! `"12.5"`, `""` or `"n/a"`. These helpers never fail: anything that is not
//! a finite number becomes `0`.

use serde_json::Value;

/// Coerce a JSON value to a finite number.
///
/// Mirrors numeric conversion in the browser client: `null`, empty or
/// whitespace-only strings and `false` are `0`, `true` is `1`, numeric
/// strings (including exponent and `0x` hex forms) parse, and everything else,
/// including infinities, is `0`. Negative values pass through unchanged.
pub fn coerce_number(value: &Value) -> f64 {
    let number = match value {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => parse_numeric_text(text),
        Value::Array(_) | Value::Object(_) => 0.0,
    };

    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// Render a JSON value as display text; `null` becomes an empty string.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).map(|n| n as f64).unwrap_or(0.0);
    }

    // Rust accepts "inf"/"nan" spellings; those are filtered by the caller.
    trimmed.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(coerce_number(&json!(12.5)), 12.5);
        assert_eq!(coerce_number(&json!(-3)), -3.0);
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(coerce_number(&json!("42")), 42.0);
        assert_eq!(coerce_number(&json!("  7.25 ")), 7.25);
        assert_eq!(coerce_number(&json!("1e3")), 1000.0);
        assert_eq!(coerce_number(&json!("0x10")), 16.0);
    }

    #[test]
    fn garbage_becomes_zero() {
        assert_eq!(coerce_number(&json!("n/a")), 0.0);
        assert_eq!(coerce_number(&json!("1,000")), 0.0);
        assert_eq!(coerce_number(&json!("")), 0.0);
        assert_eq!(coerce_number(&json!(null)), 0.0);
        assert_eq!(coerce_number(&json!({"price": 1})), 0.0);
        assert_eq!(coerce_number(&json!("Infinity")), 0.0);
        assert_eq!(coerce_number(&json!("NaN")), 0.0);
    }

    #[test]
    fn booleans_follow_numeric_conversion() {
        assert_eq!(coerce_number(&json!(true)), 1.0);
        assert_eq!(coerce_number(&json!(false)), 0.0);
    }

    #[test]
    fn text_rendering() {
        assert_eq!(value_to_text(&json!(null)), "");
        assert_eq!(value_to_text(&json!("Ops")), "Ops");
        assert_eq!(value_to_text(&json!(1007)), "1007");
        assert_eq!(value_to_text(&json!(true)), "true");
    }
}
