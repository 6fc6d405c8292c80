use perennial_core::{
    review_endpoint, srs_endpoint, CoreError, Rating, ReviewSubmission, SrsConfig,
};
use serde_json::json;
use uuid::Uuid;

#[test]
fn validate_accepts_practical_ranges() {
    assert!(SrsConfig::default().validate().is_ok());
    assert!(SrsConfig::new(3, 1.3, 0.5).validate().is_ok());
    assert!(SrsConfig::new(3, 4.0, 2.0).validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range() {
    assert_eq!(
        SrsConfig::new(0, 2.5, 1.0).validate(),
        Err(CoreError::Invalid("base interval must be at least one day"))
    );
    assert!(SrsConfig::new(1, 1.2, 1.0).validate().is_err());
    assert!(SrsConfig::new(1, f64::NAN, 1.0).validate().is_err());
    assert!(SrsConfig::new(1, 2.5, 0.0).validate().is_err());
    assert!(SrsConfig::new(1, 2.5, f64::INFINITY).validate().is_err());
}

#[test]
fn clamped_forces_ranges() {
    let c = SrsConfig::new(0, 9.0, 0.1).clamped();
    assert_eq!(c, SrsConfig::new(1, 4.0, 0.5));
    assert!(c.validate().is_ok());

    let c = SrsConfig::new(2, f64::NAN, f64::INFINITY).clamped();
    assert_eq!(c, SrsConfig::new(2, 2.5, 1.0));
}

#[test]
fn srs_config_wire_shape() {
    let cfg = SrsConfig::new(2, 2.5, 1.25);
    assert_eq!(
        serde_json::to_value(&cfg).unwrap(),
        json!({ "base_interval_days": 2, "ease_multiplier": 2.5, "interval_modifier": 1.25 })
    );

    let partial: SrsConfig = serde_json::from_value(json!({ "base_interval_days": 4 })).unwrap();
    assert_eq!(partial, SrsConfig::new(4, 2.5, 1.0));
}

#[test]
fn review_submission_wire_shape() {
    let profile = Uuid::new_v4();
    let body = ReviewSubmission::new(Rating::Again, profile);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "rating": "again", "profile_id": profile.to_string() })
    );
}

#[test]
fn endpoint_paths() {
    let id = Uuid::nil();
    assert_eq!(
        review_endpoint(id),
        "/facts/00000000-0000-0000-0000-000000000000/review"
    );
    assert_eq!(
        srs_endpoint(id),
        "/profiles/00000000-0000-0000-0000-000000000000/srs"
    );
}

#[test]
fn rating_parsing() {
    assert_eq!(Rating::parse("Good"), Some(Rating::Good));
    assert_eq!(Rating::parse(" e "), Some(Rating::Easy));
    assert_eq!(Rating::parse("1"), Some(Rating::Again));
    assert_eq!(Rating::parse("2"), Some(Rating::Hard));
    assert_eq!(Rating::parse("meh"), None);
    assert_eq!("hard".parse::<Rating>(), Ok(Rating::Hard));
    assert_eq!("x".parse::<Rating>(), Err(CoreError::Invalid("unknown rating")));
    for r in Rating::ALL {
        assert_eq!(Rating::parse(&r.to_string()), Some(r));
    }
}
