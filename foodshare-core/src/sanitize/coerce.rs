use serde_json::Value;

/// value substituted for a predicted surplus that is missing or not a number.
pub const SURPLUS_FILL_VALUE: f64 = 0.0;

/// parses numeric text such as `"12"`, `" 3.5 "` or `"1e2"`. non-finite results
/// (`"NaN"`, `"inf"`) are treated as invalid.
pub fn parse_numeric_str(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// reads a JSON property as a finite number. numbers and numeric strings are
/// accepted, everything else (null, booleans, arrays, objects) is invalid.
pub fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_numeric_str(s),
        _ => None,
    }
}

/// coerces a `predicted_surplus` property, filling invalid values with [`SURPLUS_FILL_VALUE`].
pub fn coerce_surplus(value: Option<&Value>) -> f64 {
    match coerce_f64(value) {
        Some(surplus) => surplus,
        None => {
            log::debug!("predicted surplus {value:?} is not numeric, using {SURPLUS_FILL_VALUE}");
            SURPLUS_FILL_VALUE
        }
    }
}

/// coerces a `distance_km` cell. invalid values stay absent.
pub fn coerce_distance(raw: &str) -> Option<f64> {
    parse_numeric_str(raw)
}
