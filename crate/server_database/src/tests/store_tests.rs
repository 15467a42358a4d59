#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::{
    CancerType, DbError, Hospital, HospitalCreate, HospitalStore, PatientCreate, PatientStore,
    SqlitePool,
};

async fn sqlite_store() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("cannot create a temporary directory");
    let store = SqlitePool::instantiate(&dir.path().join("medbase.sqlite"), false)
        .await
        .expect("cannot instantiate the SQLite store");
    (store, dir)
}

fn hospital(name: &str, capacity: i64) -> HospitalCreate {
    HospitalCreate {
        name: name.to_owned(),
        address: "1 Main St".to_owned(),
        capacity,
    }
}

fn patient(name: &str) -> PatientCreate {
    PatientCreate {
        name: name.to_owned(),
        age: 30,
        birth_date: NaiveDate::from_ymd_opt(1993, 5, 20).unwrap(),
        oncological: false,
        cancer_type: None,
    }
}

#[tokio::test]
async fn test_hospital_round_trip() {
    let (store, _dir) = sqlite_store().await;

    let created = store.insert_hospital(&hospital("General", 100)).await.unwrap();
    assert_eq!(created.current_patients, 0);

    let fetched = store.hospital_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let all = store.list_hospitals().await.unwrap();
    assert_eq!(all, vec![created.clone()]);

    let updated = Hospital {
        name: "General (renamed)".to_owned(),
        capacity: 150,
        ..created.clone()
    };
    store.update_hospital(&updated).await.unwrap();
    let fetched = store.hospital_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "General (renamed)");
    assert_eq!(fetched.capacity, 150);

    assert!(store.delete_hospital(created.id).await.unwrap());
    assert!(store.hospital_by_id(created.id).await.unwrap().is_none());
    // a second delete finds no row
    assert!(!store.delete_hospital(created.id).await.unwrap());
}

#[tokio::test]
async fn test_patient_round_trip() {
    let (store, _dir) = sqlite_store().await;

    let created = store.insert_patient(&patient("John Doe"), None).await.unwrap();
    assert_eq!(created.hospital_id, None);

    let mut stored = store.patient_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);

    stored.oncological = true;
    stored.cancer_type = Some(CancerType::Lung);
    store.update_patient(&stored).await.unwrap();
    let fetched = store.patient_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.cancer_type, Some(CancerType::Lung));
    assert!(fetched.oncological);

    assert!(store.delete_patient(created.id).await.unwrap());
    assert!(store.patient_by_id(created.id).await.unwrap().is_none());
    assert!(!store.delete_patient(created.id).await.unwrap());
}

#[tokio::test]
async fn test_patients_by_hospital_and_derived_count() {
    let (store, _dir) = sqlite_store().await;

    let general = store.insert_hospital(&hospital("General", 10)).await.unwrap();
    let a = store.insert_patient(&patient("A"), None).await.unwrap();
    let b = store.insert_patient(&patient("B"), None).await.unwrap();
    // a third patient stays unassigned
    store.insert_patient(&patient("C"), None).await.unwrap();

    store.set_patient_hospital(a.id, Some(general.id)).await.unwrap();
    store.set_patient_hospital(b.id, Some(general.id)).await.unwrap();

    assert_eq!(store.patient_count(general.id).await.unwrap(), 2);

    let assigned = store.patients_by_hospital(general.id).await.unwrap();
    assert_eq!(
        assigned.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![a.id, b.id]
    );

    let fetched = store.hospital_by_id(general.id).await.unwrap().unwrap();
    assert_eq!(fetched.current_patients, 2);
}

#[tokio::test]
async fn test_oncology_check_constraint_is_a_backstop() {
    let (store, _dir) = sqlite_store().await;

    // writing an inconsistent row directly must be rejected by the schema,
    // even though the business layer normally catches this first
    let inconsistent = PatientCreate {
        cancer_type: Some(CancerType::Breast),
        ..patient("X")
    };
    let err = store.insert_patient(&inconsistent, None).await.unwrap_err();
    assert!(
        matches!(err, DbError::IntegrityViolation(_)),
        "unexpected error: {err:?}"
    );
    assert!(store.list_patients().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_hospital_orphans_its_patients() {
    let (store, _dir) = sqlite_store().await;

    let general = store.insert_hospital(&hospital("General", 10)).await.unwrap();
    let p = store.insert_patient(&patient("A"), Some(general.id)).await.unwrap();
    assert_eq!(p.hospital_id, Some(general.id));

    assert!(store.delete_hospital(general.id).await.unwrap());

    let orphan = store.patient_by_id(p.id).await.unwrap().unwrap();
    assert_eq!(orphan.hospital_id, None);
}

#[tokio::test]
async fn test_store_does_not_enforce_capacity() {
    let (store, _dir) = sqlite_store().await;

    // two writers that both passed the business-layer capacity check can
    // overrun a capacity-1 hospital: the storage layer accepts both writes
    let small = store.insert_hospital(&hospital("Small", 1)).await.unwrap();
    let a = store.insert_patient(&patient("A"), None).await.unwrap();
    let b = store.insert_patient(&patient("B"), None).await.unwrap();

    store.set_patient_hospital(a.id, Some(small.id)).await.unwrap();
    store.set_patient_hospital(b.id, Some(small.id)).await.unwrap();

    assert_eq!(store.patient_count(small.id).await.unwrap(), 2);
}
