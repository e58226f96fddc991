use loo_finder_be::models::review::{MAX_REVIEW_PHOTOS, PhotoUpload, RatingInput};
use serde_json::json;

#[test]
fn test_photo_ceiling_is_three() {
    assert_eq!(MAX_REVIEW_PHOTOS, 3);
}

#[test]
fn test_rating_input_from_wire_json() {
    let input: RatingInput = serde_json::from_value(json!({
        "cleanliness": 5,
        "lighting": "3",
        "supplies": 4,
        "safety": 5,
        "accessibility": 3
    }))
    .unwrap();

    assert_eq!(
        input.dimensions(),
        [Some(5), Some(3), Some(4), Some(5), Some(3)]
    );
}

#[test]
fn test_missing_and_garbage_dimensions_store_null() {
    let input: RatingInput = serde_json::from_value(json!({
        "cleanliness": "spotless",
        "lighting": "",
        "safety": 4
    }))
    .unwrap();

    assert_eq!(input.dimensions(), [None, None, None, Some(4), None]);
}

#[test]
fn test_fractional_string_rounds_for_storage() {
    let input: RatingInput = serde_json::from_value(json!({ "cleanliness": "4.6" })).unwrap();

    let [cleanliness, rest @ ..] = input.dimensions();
    assert_eq!(cleanliness, Some(5));
    assert_eq!(rest, [None; 4]);
}

#[test]
fn test_photo_upload_wire_form() {
    let photo: PhotoUpload = serde_json::from_value(json!({
        "url": "/uploads/abc123.jpg",
        "originalFilename": "stall.jpg"
    }))
    .unwrap();

    assert_eq!(photo.url, "/uploads/abc123.jpg");
    assert_eq!(photo.original_filename, "stall.jpg");
}

#[test]
fn test_empty_rating_input_has_no_dimensions() {
    let input: RatingInput = serde_json::from_value(json!({})).unwrap();
    assert_eq!(input.dimensions(), [None; 5]);

    let values = input.values();
    assert!(values.iter().all(|v| v.is_null()));
}
