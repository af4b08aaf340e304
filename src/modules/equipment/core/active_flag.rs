use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Normalise the loosely typed utilization `type` column into a strict flag.
///
/// `true`, non-zero numbers and non-empty strings other than `"0"`/`"false"`
/// count as active. Null and anything else count as inactive.
pub fn parse_active_flag(raw: &Value) -> bool {
    match raw {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => {
            let text = text.trim();
            !(text.is_empty() || text == "0" || text.eq_ignore_ascii_case("false"))
        }
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(parse_active_flag(&Value::deserialize(deserializer)?))
}
