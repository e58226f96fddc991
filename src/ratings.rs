use serde_json::Value;

use crate::errors::AppError;

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

/// Coerce one untrusted rating value to a number on the 1-5 scale.
/// JSON numbers pass through, numeric strings are parsed after trimming.
/// Anything else, and anything off the scale, is discarded.
pub fn coerce_rating(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&number) {
        return None;
    }

    Some(number)
}

/// Mean of the coercible dimension values, rounded to one decimal place.
/// Fails when no value survives coercion instead of averaging an empty set.
pub fn overall_rating(dimensions: &[&Value]) -> Result<f32, AppError> {
    let parsed: Vec<f64> = dimensions.iter().filter_map(|v| coerce_rating(v)).collect();

    if parsed.is_empty() {
        return Err(AppError::InvalidRatingInput);
    }

    let mean = parsed.iter().sum::<f64>() / parsed.len() as f64;
    Ok(((mean * 10.0).round() / 10.0) as f32)
}
