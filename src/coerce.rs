// src/coerce.rs
//
// Loose value coercion for inbound setting payloads. Phone-side config
// pages are sloppy about types: booleans arrive as 0/1, "true", or real
// JSON booleans, and integers sometimes arrive quoted.

use serde_json::Value;

pub fn value_as_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "y" | "t" => Some(true),
            "0" | "false" | "no" | "n" | "f" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn value_as_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
