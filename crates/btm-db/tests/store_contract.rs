//! `ExerciseStore` behavior of the libSQL adapter, exercised through the trait.

use btm_core::{
    Exercise, ExerciseField, ExerciseFilter, ExerciseIdentity, ExerciseStore, StoreError,
};
use btm_db::ExerciseDb;
use pretty_assertions::assert_eq;

async fn store() -> ExerciseDb {
    ExerciseDb::open_local(":memory:").await.unwrap()
}

#[tokio::test]
async fn clean_batch_reports_inserted_count() {
    let db = store().await;
    let result = db
        .insert_many(&[
            Exercise::new("Squat", "Legs", "Body Weight"),
            Exercise::new("Plank", "Core", "Body Weight"),
        ])
        .await
        .unwrap();
    assert_eq!(result.inserted_count, 2);
}

#[tokio::test]
async fn rejected_records_surface_as_partial_write() {
    let db = store().await;
    db.insert_many(&[Exercise::new("Squat", "Legs", "Body Weight")])
        .await
        .unwrap();

    let err = db
        .insert_many(&[
            Exercise::new("Squat", "Legs", "Body Weight"),
            Exercise::new("Lunge", "Legs", "Body Weight"),
        ])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        StoreError::PartialWrite {
            inserted: 1,
            rejected: vec![ExerciseIdentity::new("Squat", "Legs", "Body Weight")],
        }
    );

    // The accepted record persisted despite the rejection.
    let lunges = db.find(&ExerciseFilter::by_name("Lunge")).await.unwrap();
    assert_eq!(lunges.len(), 1);
}

#[tokio::test]
async fn existing_identities_match_find() {
    let db = store().await;
    db.seed().await.unwrap();

    let mut via_find: Vec<_> = db
        .find(&ExerciseFilter::all())
        .await
        .unwrap()
        .iter()
        .map(Exercise::identity)
        .collect();
    let mut direct = db.existing_identities().await.unwrap();
    via_find.sort();
    direct.sort();
    assert_eq!(direct, via_find);
}

#[tokio::test]
async fn distinct_and_delete_through_the_trait() {
    let db = store().await;
    db.seed().await.unwrap();

    assert_eq!(
        db.distinct(ExerciseField::Equipment).await.unwrap(),
        vec!["Barbell", "Body Weight", "Dumbbell"]
    );

    let deleted = db.delete(&ExerciseFilter::by_name("Squat")).await.unwrap();
    assert_eq!(deleted.deleted_count, 1);
    assert!(
        db.find(&ExerciseFilter::by_name("Squat"))
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn sequences_and_optionals_survive_storage() {
    let db = store().await;
    let exercise = Exercise {
        media_url: Some("https://cdn.test/plank.gif".into()),
        secondary_muscles: vec!["Shoulders".into(), "Glutes".into()],
        description: Some("Isometric hold".into()),
        ..Exercise::new("Plank", "Core", "Body Weight")
    };
    db.insert_many(std::slice::from_ref(&exercise)).await.unwrap();

    let found = db.find(&ExerciseFilter::by_name("Plank")).await.unwrap();
    assert_eq!(found, vec![exercise]);
}
