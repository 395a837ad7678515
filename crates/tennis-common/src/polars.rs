//! Cell text for Polars values.

use polars::prelude::*;

/// Text of one cell as it appears in an exported CSV.
///
/// Source files are read as strings, so this mostly passes strings through;
/// numeric values can still appear in frames built by casts, and integral
/// floats print without a fractional part.
///
/// ```
/// use polars::prelude::AnyValue;
/// use tennis_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(19860603)), "19860603");
/// assert_eq!(any_to_string(AnyValue::String("ESP")), "ESP");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => other.to_string().trim_matches('"').to_string(),
    }
}

/// `185.0` prints as `185`, `72.50` as `72.5`.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_pass_through() {
        assert_eq!(any_to_string(AnyValue::String("Roland Garros")), "Roland Garros");
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn numbers_print_plainly() {
        assert_eq!(any_to_string(AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(AnyValue::UInt32(128)), "128");
        assert_eq!(any_to_string(AnyValue::Float64(185.0)), "185");
        assert_eq!(any_to_string(AnyValue::Float64(23.5)), "23.5");
    }

    #[test]
    fn format_numeric_trims_zeros() {
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(40.0), "40");
        assert_eq!(format_numeric(72.50), "72.5");
    }
}
