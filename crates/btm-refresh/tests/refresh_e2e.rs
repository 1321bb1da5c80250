//! Refresh runs against the libSQL store.

use std::sync::Arc;

use btm_catalog::{CatalogSource, FetchError, SourceRecord};
use btm_core::{
    DeleteResult, Exercise, ExerciseField, ExerciseFilter, ExerciseIdentity, ExerciseStore,
    IdentityPolicy, InsertManyResult, StoreError,
};
use btm_db::ExerciseDb;
use btm_refresh::{RefreshEngine, RefreshResult};
use pretty_assertions::assert_eq;
use serde_json::json;

struct StaticCatalog(Vec<SourceRecord>);

impl CatalogSource for StaticCatalog {
    async fn fetch_all(&self) -> Result<Vec<SourceRecord>, FetchError> {
        Ok(self.0.clone())
    }
}

fn squat() -> SourceRecord {
    json!({
        "name": "Squat",
        "bodyPart": "Legs",
        "equipment": "Body Weight",
        "target": "Quadriceps",
        "instructions": ["Stand.", "Squat.", "Stand again."]
    })
    .as_object()
    .cloned()
    .unwrap()
}

fn numbered(n: usize) -> Vec<SourceRecord> {
    (0..n)
        .map(|i| {
            json!({"name": format!("Drill {i}"), "bodyPart": "Core", "equipment": "Cable"})
                .as_object()
                .cloned()
                .unwrap()
        })
        .collect()
}

async fn memory_db() -> Arc<ExerciseDb> {
    Arc::new(ExerciseDb::open_local(":memory:").await.unwrap())
}

/// Inserts `raced` straight into the database after the engine has read
/// existing identities, as a concurrent refresh would.
struct RacingStore {
    db: Arc<ExerciseDb>,
    raced: Vec<Exercise>,
}

impl ExerciseStore for RacingStore {
    async fn find(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
        self.db.find(filter).await
    }

    async fn distinct(&self, field: ExerciseField) -> Result<Vec<String>, StoreError> {
        self.db.distinct(field).await
    }

    async fn insert_many(&self, exercises: &[Exercise]) -> Result<InsertManyResult, StoreError> {
        self.db.insert_many(&self.raced).await?;
        self.db.insert_many(exercises).await
    }

    async fn delete(&self, filter: &ExerciseFilter) -> Result<DeleteResult, StoreError> {
        self.db.delete(filter).await
    }

    async fn existing_identities(&self) -> Result<Vec<ExerciseIdentity>, StoreError> {
        self.db.existing_identities().await
    }
}

#[tokio::test]
async fn squat_into_empty_store() {
    let db = memory_db().await;
    let engine = RefreshEngine::new(Arc::clone(&db), StaticCatalog(vec![squat()]));

    let result = engine.refresh().await.unwrap();
    assert_eq!(result.inserted_count, 1);

    let found = db.find(&ExerciseFilter::by_name("Squat")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].body_part, "Legs");
    assert_eq!(found[0].instructions.len(), 3);
}

#[tokio::test]
async fn existing_squat_plus_one_new_record() {
    let db = memory_db().await;
    db.insert_exercise(&Exercise::new("Squat", "Legs", "Body Weight"))
        .await
        .unwrap();

    let mut records = vec![squat()];
    records.extend(numbered(1));
    let engine = RefreshEngine::new(Arc::clone(&db), StaticCatalog(records));

    let result = engine.refresh().await.unwrap();
    assert_eq!(result.inserted_count, 1);
    assert_eq!(db.count_exercises().await.unwrap(), 2);
}

#[tokio::test]
async fn repeated_refreshes_never_duplicate() {
    let db = memory_db().await;
    let mut records = numbered(5);
    records.extend(numbered(5));
    let engine = RefreshEngine::new(Arc::clone(&db), StaticCatalog(records));

    let first = engine.refresh().await.unwrap();
    assert_eq!(first.inserted_count, 5);
    assert_eq!(first.skipped_in_batch, 5);

    for _ in 0..3 {
        let again = engine.refresh().await.unwrap();
        assert_eq!(again.inserted_count, 0);
    }

    let identities = db.existing_identities().await.unwrap();
    let unique: std::collections::HashSet<_> = identities.iter().collect();
    assert_eq!(identities.len(), 5);
    assert_eq!(unique.len(), 5);
}

#[tokio::test]
async fn records_raced_in_mid_refresh_are_absorbed() {
    let db = memory_db().await;
    let records = numbered(10);
    let raced = btm_catalog::map_records(&records[..3]);

    let store = RacingStore {
        db: Arc::clone(&db),
        raced,
    };
    let engine = RefreshEngine::new(store, StaticCatalog(records));

    let result = engine.refresh().await.unwrap();
    assert_eq!(result.inserted_count, 7);
    assert_eq!(result.rejected.len(), 3);
    assert_eq!(db.count_exercises().await.unwrap(), 10);
}

#[tokio::test]
async fn blank_identity_records_are_rejected_not_fatal() {
    let db = memory_db().await;
    let mut records = vec![json!({"bodyPart": "Legs", "equipment": "Body Weight"})
        .as_object()
        .cloned()
        .unwrap()];
    records.push(squat());
    let engine = RefreshEngine::new(Arc::clone(&db), StaticCatalog(records));

    let result = engine.refresh().await.unwrap();
    assert_eq!(
        result,
        RefreshResult {
            fetched_count: 2,
            inserted_count: 1,
            skipped_existing: 0,
            skipped_in_batch: 0,
            rejected: vec![ExerciseIdentity::new("", "Legs", "Body Weight")],
        }
    );
}

#[tokio::test]
async fn name_policy_skips_equipment_variants() {
    let db = memory_db().await;
    db.insert_exercise(&Exercise::new("Squat", "Legs", "Barbell"))
        .await
        .unwrap();

    let engine = RefreshEngine::new(Arc::clone(&db), StaticCatalog(vec![squat()]))
        .with_policy(IdentityPolicy::Name);

    let result = engine.refresh().await.unwrap();
    assert_eq!(result.inserted_count, 0);
    assert_eq!(result.skipped_existing, 1);
}
