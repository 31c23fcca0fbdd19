//! Request DTOs: null and out-of-range payload fields reach the domain rules
//! instead of failing in deserialization.

use assert_matches::assert_matches;
use registry_core::error::CoreError;
use registry_db::models::appearance::{Appearance, CreateAppearance, UpdateAppearance};
use registry_db::models::camper::{Camper, CreateCamper, UpdateCamper};
use registry_db::models::signup::CreateSignup;
use serde_json::json;

fn stored_camper() -> Camper {
    Camper {
        id: 1,
        name: "Alex".to_string(),
        age: 12,
    }
}

fn validation_message(err: CoreError) -> String {
    match err {
        CoreError::Validation(msg) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn create_camper_with_null_name_fails_the_name_rule() {
    let input: CreateCamper = serde_json::from_value(json!({"name": null, "age": 12})).unwrap();

    let err = input.validate().unwrap_err();
    assert_eq!(validation_message(err), "Name cannot be empty");
}

#[test]
fn create_camper_with_age_beyond_i32_fails_the_age_rule() {
    let input: CreateCamper =
        serde_json::from_value(json!({"name": "Alex", "age": 10_000_000_000_i64})).unwrap();

    let err = input.validate().unwrap_err();
    assert_eq!(validation_message(err), "Age must be between 8 and 18");
}

#[test]
fn update_camper_tells_null_from_absent() {
    let absent: UpdateCamper = serde_json::from_value(json!({})).unwrap();
    assert_eq!(absent.name, None);
    assert_eq!(absent.age, None);

    let null: UpdateCamper = serde_json::from_value(json!({"name": null, "age": null})).unwrap();
    assert_eq!(null.name, Some(None));
    assert_eq!(null.age, Some(None));
}

#[test]
fn update_camper_with_null_name_is_rejected() {
    let changes: UpdateCamper = serde_json::from_value(json!({"name": null})).unwrap();

    let err = stored_camper().apply(changes).unwrap_err();
    assert_eq!(validation_message(err), "Name cannot be empty");
}

#[test]
fn update_camper_with_null_age_is_rejected() {
    let changes: UpdateCamper = serde_json::from_value(json!({"age": null})).unwrap();

    let err = stored_camper().apply(changes).unwrap_err();
    assert_eq!(validation_message(err), "Age must be between 8 and 18");
}

#[test]
fn update_camper_without_fields_keeps_stored_values() {
    let merged = stored_camper().apply(UpdateCamper::default()).unwrap();
    assert_eq!(merged.name(), "Alex");
    assert_eq!(merged.age(), 12);
}

#[test]
fn create_signup_with_time_beyond_i32_fails_the_time_rule() {
    let input: CreateSignup = serde_json::from_value(json!({
        "time": 4_294_967_296_i64,
        "camper_id": 1,
        "activity_id": 2,
    }))
    .unwrap();

    assert_matches!(
        input.validate(),
        Err(CoreError::Validation(msg)) if msg == "Time must be between 0 and 23"
    );
}

#[test]
fn create_appearance_with_rating_beyond_i32_fails_the_rating_rule() {
    let input: CreateAppearance = serde_json::from_value(json!({
        "rating": 4_294_967_296_i64,
        "episode_id": 1,
        "guest_id": 2,
    }))
    .unwrap();

    assert_matches!(
        input.validate(),
        Err(CoreError::Validation(msg)) if msg == "Rating must be between 1 and 5"
    );
}

#[test]
fn update_appearance_with_null_rating_is_rejected() {
    let appearance = Appearance {
        id: 1,
        rating: 4,
        episode_id: 2,
        guest_id: 3,
    };
    let changes: UpdateAppearance = serde_json::from_value(json!({"rating": null})).unwrap();

    assert_matches!(
        appearance.apply(changes),
        Err(CoreError::Validation(msg)) if msg == "Rating must be between 1 and 5"
    );
    assert_eq!(
        appearance.apply(UpdateAppearance::default()).unwrap().get(),
        4
    );
}
