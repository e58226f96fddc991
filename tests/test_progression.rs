use loo_finder_be::progression::{
    ContributionKind, POINTS_PER_LEVEL, RESTROOM_ADDED_POINTS, REVIEW_SUBMITTED_POINTS,
    level_for_points,
};

#[test]
fn test_point_values_per_kind() {
    assert_eq!(ContributionKind::ReviewSubmitted.points(), 10);
    assert_eq!(ContributionKind::RestroomAdded.points(), 15);
    assert_eq!(REVIEW_SUBMITTED_POINTS, 10);
    assert_eq!(RESTROOM_ADDED_POINTS, 15);
}

#[test]
fn test_kind_names() {
    assert_eq!(ContributionKind::ReviewSubmitted.as_str(), "review_submitted");
    assert_eq!(ContributionKind::RestroomAdded.as_str(), "restroom_added");
}

#[test]
fn test_level_thresholds() {
    assert_eq!(level_for_points(0), 1);
    assert_eq!(level_for_points(10), 1);
    assert_eq!(level_for_points(95), 1);
    assert_eq!(level_for_points(99), 1);
    assert_eq!(level_for_points(100), 2);
    assert_eq!(level_for_points(105), 2);
    assert_eq!(level_for_points(199), 2);
    assert_eq!(level_for_points(200), 3);
    assert_eq!(level_for_points(1000), 11);
}

#[test]
fn test_first_review_leaves_level_one() {
    // fresh user, one review submitted
    let points = ContributionKind::ReviewSubmitted.points();
    assert_eq!(points, 10);
    assert_eq!(level_for_points(points), 1);
}

#[test]
fn test_level_up_at_hundred_points() {
    // 95 points, one more review crosses the threshold
    let points = 95 + ContributionKind::ReviewSubmitted.points();
    assert_eq!(points, 105);
    assert_eq!(level_for_points(points), 2);
}

#[test]
fn test_level_never_decreases_as_points_grow() {
    assert_eq!(POINTS_PER_LEVEL, 100);

    let mut previous = level_for_points(0);
    for points in 0..1000 {
        let level = level_for_points(points);
        assert!(level >= previous);
        previous = level;
    }
}
