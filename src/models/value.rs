//! Coercion helpers for loosely typed JSON payloads coming from the web
//! front end, where numbers frequently arrive as form strings.

use serde_json::Value;

/// Numeric view of a JSON value: numbers as-is, strings parsed after
/// trimming. Everything else (null, bools, arrays, objects) is `None`.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Text view of a scalar JSON value. Numbers render without quotes,
/// booleans become "yes"/"no".
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("yes".to_string()),
        Value::Bool(false) => Some("no".to_string()),
        _ => None,
    }
}

/// Shortest round-trip rendering that keeps a trailing `.0` on integral
/// values, so 4.0 prints as "4.0" rather than "4".
pub fn fmt_float(x: f64) -> String {
    format!("{x:?}")
}

/// Two-decimal rounding with exact ties going to the even cent
/// (0.125 -> 0.12). Ties are judged on `x * 100`, so a product that only
/// becomes a tie through float error can still differ from decimal rounding.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}
