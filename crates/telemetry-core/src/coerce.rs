//! Typed coercion of [`FieldValue`]s.
//!
//! Every function here is total: a value that cannot be represented in the
//! requested type yields `None`, never an error.

use crate::FieldValue;

/// Coerce to a finite `f64`.
///
/// Numeric values are used directly; strings are parsed. Non-finite results
/// are rejected because they cannot be represented in a JSON document.
pub fn to_float(value: &FieldValue) -> Option<f64> {
    let parsed = match value {
        FieldValue::Float(x) => Some(*x),
        FieldValue::Integer(i) => Some(*i as f64),
        FieldValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|x| x.is_finite())
}

/// Coerce to an `i32`.
///
/// Floats are accepted only when integral and in range, matching what a
/// string round-trip of the value would parse to.
pub fn to_int(value: &FieldValue) -> Option<i32> {
    match value {
        FieldValue::Integer(i) => i32::try_from(*i).ok(),
        FieldValue::Float(x) => float_to_i32(*x),
        FieldValue::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// Coerce to a `bool`.
///
/// Native booleans pass through. Integers map to `true` only for exactly `1`.
/// Text is accepted as a case-insensitive `true`/`false`.
pub fn to_bool(value: &FieldValue) -> Option<bool> {
    match value {
        FieldValue::Boolean(b) => Some(*b),
        FieldValue::Integer(i) => Some(*i == 1),
        FieldValue::String(s) => parse_bool_text(s),
        _ => None,
    }
}

/// Default stringification; `Null` has none.
pub fn to_string(value: &FieldValue) -> Option<String> {
    if value.is_null() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Coerce an array-typed value to a list of floats.
///
/// The list is rejected as a whole if any element is not numeric.
pub fn to_float_list(value: &FieldValue) -> Option<Vec<f64>> {
    match value {
        FieldValue::List(items) => items.iter().map(to_float).collect(),
        _ => None,
    }
}

/// Coerce a duration to milliseconds.
///
/// Numbers are taken as milliseconds already. Text in .NET `TimeSpan` form
/// (`[-][d.]hh:mm:ss[.fffffff]`, as SimHub writes lap times) is converted;
/// any other text falls back to a plain numeric parse.
pub fn to_duration_ms(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::String(s) => parse_timespan_ms(s).or_else(|| to_float(value)),
        other => to_float(other),
    }
}

fn parse_timespan_ms(text: &str) -> Option<f64> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let mut parts = body.split(':');
    let (head, minutes, seconds) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let (days, hours) = match head.split_once('.') {
        Some((d, h)) => (d.parse::<u32>().ok()?, h.parse::<u32>().ok()?),
        None => (0, head.parse::<u32>().ok()?),
    };
    let minutes = minutes.parse::<u32>().ok()?;
    if !seconds.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let seconds = seconds.parse::<f64>().ok()?;
    if hours >= 24 || minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return None;
    }

    let total_s = (f64::from(days) * 24.0 + f64::from(hours)) * 3600.0
        + f64::from(minutes) * 60.0
        + seconds;
    let ms = total_s * 1000.0;
    Some(if negative { -ms } else { ms }).filter(|x| x.is_finite())
}

fn parse_bool_text(text: &str) -> Option<bool> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn float_to_i32(x: f64) -> Option<i32> {
    if !x.is_finite() || x.fract() != 0.0 {
        return None;
    }
    if x < f64::from(i32::MIN) || x > f64::from(i32::MAX) {
        return None;
    }
    Some(x as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_accepts_numbers_and_numeric_text() {
        assert_eq!(to_float(&FieldValue::Float(1.25)), Some(1.25));
        assert_eq!(to_float(&FieldValue::Integer(7)), Some(7.0));
        assert_eq!(to_float(&FieldValue::from(" 98.6 ")), Some(98.6));
    }

    #[test]
    fn float_rejects_non_numeric_and_non_finite() {
        assert_eq!(to_float(&FieldValue::from("fast")), None);
        assert_eq!(to_float(&FieldValue::Boolean(true)), None);
        assert_eq!(to_float(&FieldValue::Float(f64::NAN)), None);
        assert_eq!(to_float(&FieldValue::from("inf")), None);
        assert_eq!(to_float(&FieldValue::Null), None);
    }

    #[test]
    fn int_accepts_integral_values_only() {
        assert_eq!(to_int(&FieldValue::Integer(3)), Some(3));
        assert_eq!(to_int(&FieldValue::Float(3.0)), Some(3));
        assert_eq!(to_int(&FieldValue::Float(3.5)), None);
        assert_eq!(to_int(&FieldValue::from("12")), Some(12));
        assert_eq!(to_int(&FieldValue::from("12.0")), None);
    }

    #[test]
    fn int_rejects_out_of_range() {
        assert_eq!(to_int(&FieldValue::Integer(i64::from(i32::MAX) + 1)), None);
        assert_eq!(to_int(&FieldValue::Float(1e12)), None);
    }

    #[test]
    fn bool_treats_only_one_as_true() {
        assert_eq!(to_bool(&FieldValue::Integer(1)), Some(true));
        assert_eq!(to_bool(&FieldValue::Integer(0)), Some(false));
        assert_eq!(to_bool(&FieldValue::Integer(2)), Some(false));
        assert_eq!(to_bool(&FieldValue::Boolean(true)), Some(true));
    }

    #[test]
    fn bool_parses_text_case_insensitively() {
        assert_eq!(to_bool(&FieldValue::from("True")), Some(true));
        assert_eq!(to_bool(&FieldValue::from("false")), Some(false));
        assert_eq!(to_bool(&FieldValue::from("yes")), None);
        assert_eq!(to_bool(&FieldValue::Float(1.0)), None);
    }

    #[test]
    fn string_of_null_is_none() {
        assert_eq!(to_string(&FieldValue::Null), None);
        assert_eq!(to_string(&FieldValue::Integer(5)), Some("5".to_string()));
    }

    #[test]
    fn float_list_requires_every_element_numeric() {
        let good = FieldValue::from(vec![1.0_f64, 2.5, -3.0]);
        assert_eq!(to_float_list(&good), Some(vec![1.0, 2.5, -3.0]));

        let bad = FieldValue::List(vec![FieldValue::Float(1.0), FieldValue::from("x")]);
        assert_eq!(to_float_list(&bad), None);
        assert_eq!(to_float_list(&FieldValue::Float(1.0)), None);
    }

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-6)
    }

    #[test]
    fn duration_accepts_timespan_text() {
        assert!(close(to_duration_ms(&FieldValue::from("00:01:23.4560000")), 83_456.0));
        assert!(close(to_duration_ms(&FieldValue::from("1.00:00:01")), 86_401_000.0));
        assert!(close(to_duration_ms(&FieldValue::from("-00:00:02.5")), -2_500.0));
    }

    #[test]
    fn duration_passes_numbers_through_as_millis() {
        assert!(close(to_duration_ms(&FieldValue::Float(91_234.5)), 91_234.5));
        assert!(close(to_duration_ms(&FieldValue::from("1500")), 1_500.0));
    }

    #[test]
    fn duration_rejects_malformed_text() {
        assert_eq!(to_duration_ms(&FieldValue::from("00:61:00")), None);
        assert_eq!(to_duration_ms(&FieldValue::from("1:2:3:4")), None);
        assert_eq!(to_duration_ms(&FieldValue::from("lap")), None);
    }
}
