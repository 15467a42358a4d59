#![allow(clippy::unwrap_used, clippy::expect_used)]

use actix_web::http::StatusCode;
use serde_json::{Value, json};

use crate::tests::test_utils::{self, tmp_sqlite};

#[tokio::test]
async fn test_patient_crud_round_trip() {
    let (_dir, sqlite_path) = tmp_sqlite();
    let app = test_utils::test_app(&sqlite_path).await;

    let (status, created) = test_utils::post_json(
        &app,
        "/patients",
        &json!({
            "name": "John Doe",
            "age": 30,
            "birth_date": "1993-05-20",
            "oncological": true,
            "cancer_type": "Lung"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["cancer_type"], "Lung");
    assert_eq!(created["hospital_id"], Value::Null);

    let (status, fetched) = test_utils::get_json(&app, &format!("/patients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // partial update: only the age changes
    let (status, updated) =
        test_utils::put_json(&app, &format!("/patients/{id}"), &json!({ "age": 31 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["age"], 31);
    assert_eq!(updated["name"], "John Doe");
    assert_eq!(updated["cancer_type"], "Lung");

    let (status, body) = test_utils::delete_json(&app, &format!("/patients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Patient deleted successfully");

    let (status, _) = test_utils::get_json(&app, &format!("/patients/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = test_utils::delete_json(&app, &format!("/patients/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_oncology_consistency_on_create() {
    let (_dir, sqlite_path) = tmp_sqlite();
    let app = test_utils::test_app(&sqlite_path).await;

    // a cancer type without the flag
    let (status, body) = test_utils::post_json(
        &app,
        "/patients",
        &json!({
            "name": "A",
            "age": 30,
            "birth_date": "1993-05-20",
            "oncological": false,
            "cancer_type": "Breast"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("must be null"));

    // the flag without a cancer type
    let (status, body) = test_utils::post_json(
        &app,
        "/patients",
        &json!({
            "name": "B",
            "age": 30,
            "birth_date": "1993-05-20",
            "oncological": true,
            "cancer_type": null
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("must be set"));

    // neither attempt persisted anything
    let (_, all) = test_utils::get_json(&app, "/patients").await;
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_oncology_consistency_on_merged_partial_update() {
    let (_dir, sqlite_path) = tmp_sqlite();
    let app = test_utils::test_app(&sqlite_path).await;

    let (_, created) = test_utils::post_json(
        &app,
        "/patients",
        &json!({
            "name": "John Doe",
            "age": 30,
            "birth_date": "1993-05-20",
            "oncological": true,
            "cancer_type": "Lung"
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // flipping the flag alone leaves the merged record inconsistent
    let (status, _) = test_utils::put_json(
        &app,
        &format!("/patients/{id}"),
        &json!({ "oncological": false }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // clearing the cancer type alone is just as inconsistent
    let (status, _) = test_utils::put_json(
        &app,
        &format!("/patients/{id}"),
        &json!({ "cancer_type": null }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // both rejected updates left the stored record untouched
    let (_, stored) = test_utils::get_json(&app, &format!("/patients/{id}")).await;
    assert_eq!(stored["oncological"], true);
    assert_eq!(stored["cancer_type"], "Lung");

    // updating both sides in the same payload is consistent
    let (status, updated) = test_utils::put_json(
        &app,
        &format!("/patients/{id}"),
        &json!({ "oncological": false, "cancer_type": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["oncological"], false);
    assert_eq!(updated["cancer_type"], Value::Null);
}

#[tokio::test]
async fn test_patient_name_must_not_be_emptied() {
    let (_dir, sqlite_path) = tmp_sqlite();
    let app = test_utils::test_app(&sqlite_path).await;

    let (status, _) = test_utils::post_json(
        &app,
        "/patients",
        &json!({
            "name": "   ",
            "age": 30,
            "birth_date": "1993-05-20",
            "oncological": false
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, created) = test_utils::post_json(
        &app,
        "/patients",
        &json!({
            "name": "John Doe",
            "age": 30,
            "birth_date": "1993-05-20",
            "oncological": false
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) =
        test_utils::put_json(&app, &format!("/patients/{id}"), &json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
