use loo_finder_be::errors::AppError;
use loo_finder_be::ratings::{coerce_rating, overall_rating};
use serde_json::{Value, json};

fn aggregate(values: &[Value]) -> Result<f32, AppError> {
    let refs: Vec<&Value> = values.iter().collect();
    overall_rating(&refs)
}

#[test]
fn test_worked_example() {
    // cleanliness 5, lighting 3, supplies 4, safety 5, accessibility 3
    let result = aggregate(&[json!(5), json!(3), json!(4), json!(5), json!(3)]).unwrap();
    assert_eq!(result, 4.0);
}

#[test]
fn test_mean_rounds_to_one_decimal() {
    assert_eq!(aggregate(&[json!(5), json!(4), json!(4)]).unwrap(), 4.3);
    assert_eq!(aggregate(&[json!(3), json!(3), json!(4)]).unwrap(), 3.3);
    assert_eq!(aggregate(&[json!(1), json!(2)]).unwrap(), 1.5);
    assert_eq!(aggregate(&[json!(5)]).unwrap(), 5.0);
}

#[test]
fn test_numeric_strings_are_coerced() {
    let result = aggregate(&[json!("4"), json!(5), json!(" 3 ")]).unwrap();
    assert_eq!(result, 4.0);
}

#[test]
fn test_unparseable_values_are_discarded() {
    // Only the 4 survives
    let result = aggregate(&[
        json!("garbage"),
        json!(""),
        Value::Null,
        json!(4),
        json!(true),
    ])
    .unwrap();
    assert_eq!(result, 4.0);
}

#[test]
fn test_all_invalid_fails_instead_of_nan() {
    let result = aggregate(&[json!("x"), json!(""), Value::Null, json!([]), json!({})]);
    assert!(matches!(result, Err(AppError::InvalidRatingInput)));

    let result = aggregate(&[]);
    assert!(matches!(result, Err(AppError::InvalidRatingInput)));
}

#[test]
fn test_output_stays_on_scale() {
    for a in 1..=5 {
        for b in 1..=5 {
            let result = aggregate(&[json!(a), json!(b)]).unwrap();
            assert!((1.0..=5.0).contains(&result), "got {}", result);
        }
    }
}

#[test]
fn test_off_scale_values_are_discarded() {
    assert_eq!(aggregate(&[json!(0), json!(6), json!("900"), json!(3)]).unwrap(), 3.0);

    let result = aggregate(&[json!(0), json!(-1), json!(42)]);
    assert!(matches!(result, Err(AppError::InvalidRatingInput)));
}

#[test]
fn test_coerce_rating() {
    // Valid cases
    assert_eq!(coerce_rating(&json!(3)), Some(3.0));
    assert_eq!(coerce_rating(&json!(4.5)), Some(4.5));
    assert_eq!(coerce_rating(&json!("2")), Some(2.0));
    assert_eq!(coerce_rating(&json!("  5  ")), Some(5.0));

    // Invalid cases
    assert_eq!(coerce_rating(&json!("")), None);
    assert_eq!(coerce_rating(&json!("four")), None);
    assert_eq!(coerce_rating(&Value::Null), None);
    assert_eq!(coerce_rating(&json!(false)), None);
    assert_eq!(coerce_rating(&json!("NaN")), None);
    assert_eq!(coerce_rating(&json!("inf")), None);
    assert_eq!(coerce_rating(&json!(0)), None);
    assert_eq!(coerce_rating(&json!(5.1)), None);
}
