use std::collections::HashSet;

use btm_catalog::{CatalogSource, map_records};
use btm_core::{Exercise, ExerciseIdentity, ExerciseStore, IdentityPolicy, StoreError};

use crate::error::RefreshError;
use crate::result::RefreshResult;

/// Candidates left after the duplicate check.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub fresh: Vec<Exercise>,
    pub skipped_existing: usize,
    pub skipped_in_batch: usize,
}

/// Drop candidates whose key is already stored or already seen earlier in
/// `candidates`. Order of the survivors follows `candidates`.
#[must_use]
pub fn select_new(
    candidates: Vec<Exercise>,
    existing: &[ExerciseIdentity],
    policy: IdentityPolicy,
) -> Selection {
    let stored: HashSet<_> = existing.iter().map(|id| policy.key_of(id)).collect();
    let mut seen = HashSet::with_capacity(candidates.len());
    let mut selection = Selection::default();

    for candidate in candidates {
        let key = policy.key_of(&candidate.identity());
        if stored.contains(&key) {
            selection.skipped_existing += 1;
        } else if !seen.insert(key) {
            selection.skipped_in_batch += 1;
        } else {
            selection.fresh.push(candidate);
        }
    }
    selection
}

/// Reconciles a catalog into a store.
///
/// Holds no state between calls; running it again after a failure is safe.
pub struct RefreshEngine<S, C> {
    store: S,
    catalog: C,
    policy: IdentityPolicy,
}

impl<S: ExerciseStore, C: CatalogSource> RefreshEngine<S, C> {
    pub const fn new(store: S, catalog: C) -> Self {
        Self {
            store,
            catalog,
            policy: IdentityPolicy::Composite,
        }
    }

    /// Key used for the duplicate check.
    #[must_use]
    pub const fn with_policy(mut self, policy: IdentityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn policy(&self) -> IdentityPolicy {
        self.policy
    }

    /// Fetch, map, de-duplicate, and insert.
    ///
    /// # Errors
    ///
    /// [`RefreshError::FetchFailed`] before any storage access when the
    /// catalog fetch fails; [`RefreshError::StorageUnavailable`] when the
    /// identity read or the insert fails as a whole. Per-record rejections
    /// from the store are absorbed into [`RefreshResult::rejected`].
    #[tracing::instrument(level = "debug", skip(self), fields(policy = self.policy.as_str()))]
    pub async fn refresh(&self) -> Result<RefreshResult, RefreshError> {
        let records = self.catalog.fetch_all().await?;
        let fetched_count = records.len();
        let candidates = map_records(&records);
        drop(records);

        let existing = self
            .store
            .existing_identities()
            .await
            .map_err(unavailable)?;
        let selection = select_new(candidates, &existing, self.policy);

        let mut result = RefreshResult {
            fetched_count,
            skipped_existing: selection.skipped_existing,
            skipped_in_batch: selection.skipped_in_batch,
            ..RefreshResult::default()
        };

        if selection.fresh.is_empty() {
            tracing::info!(fetched = fetched_count, "catalog refresh found nothing new");
            return Ok(result);
        }

        match self.store.insert_many(&selection.fresh).await {
            Ok(inserted) => result.inserted_count = inserted.inserted_count,
            Err(StoreError::PartialWrite { inserted, rejected }) => {
                tracing::warn!(
                    inserted,
                    rejected = rejected.len(),
                    first = %rejected.first().map(ToString::to_string).unwrap_or_default(),
                    "store rejected some catalog records"
                );
                for identity in &rejected {
                    tracing::debug!(%identity, "rejected");
                }
                result.inserted_count = inserted;
                result.rejected = rejected;
            }
            Err(e) => return Err(unavailable(e)),
        }

        tracing::info!(
            fetched = result.fetched_count,
            inserted = result.inserted_count,
            skipped_existing = result.skipped_existing,
            skipped_in_batch = result.skipped_in_batch,
            rejected = result.rejected.len(),
            "catalog refresh complete"
        );
        Ok(result)
    }
}

fn unavailable(err: StoreError) -> RefreshError {
    match err {
        StoreError::Unavailable(msg) => RefreshError::StorageUnavailable(msg),
        other => RefreshError::StorageUnavailable(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use btm_catalog::{FetchError, SourceRecord};
    use btm_core::{DeleteResult, ExerciseField, ExerciseFilter, InsertManyResult};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn source(name: &str, body_part: &str, equipment: &str) -> SourceRecord {
        json!({"name": name, "bodyPart": body_part, "equipment": equipment})
            .as_object()
            .cloned()
            .unwrap()
    }

    enum FakeCatalog {
        Records(Vec<SourceRecord>),
        Status(u16),
    }

    impl CatalogSource for FakeCatalog {
        async fn fetch_all(&self) -> Result<Vec<SourceRecord>, FetchError> {
            match self {
                Self::Records(records) => Ok(records.clone()),
                Self::Status(status) => Err(FetchError::HttpStatus {
                    status: *status,
                    message: String::new(),
                }),
            }
        }
    }

    /// In-memory store that enforces the identity triple and counts calls.
    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<Vec<Exercise>>,
        calls: AtomicUsize,
        down: bool,
    }

    impl MemoryStore {
        fn with(rows: Vec<Exercise>) -> Self {
            Self {
                rows: Mutex::new(rows),
                ..Self::default()
            }
        }

        fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        fn touch(&self) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.down {
                Err(StoreError::Unavailable("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    impl ExerciseStore for MemoryStore {
        async fn find(&self, _filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
            self.touch()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn distinct(&self, _field: ExerciseField) -> Result<Vec<String>, StoreError> {
            self.touch()?;
            Ok(Vec::new())
        }

        async fn insert_many(&self, exercises: &[Exercise]) -> Result<InsertManyResult, StoreError> {
            self.touch()?;
            let mut rows = self.rows.lock().unwrap();
            let mut inserted = 0;
            let mut rejected = Vec::new();
            for exercise in exercises {
                if rows.iter().any(|r| r.identity() == exercise.identity()) {
                    rejected.push(exercise.identity());
                } else {
                    rows.push(exercise.clone());
                    inserted += 1;
                }
            }
            if rejected.is_empty() {
                Ok(InsertManyResult {
                    inserted_count: inserted,
                })
            } else {
                Err(StoreError::PartialWrite { inserted, rejected })
            }
        }

        async fn delete(&self, _filter: &ExerciseFilter) -> Result<DeleteResult, StoreError> {
            self.touch()?;
            Ok(DeleteResult { deleted_count: 0 })
        }
    }

    #[test]
    fn select_new_drops_stored_and_repeated_keys() {
        let candidates = vec![
            Exercise::new("Squat", "Legs", "Body Weight"),
            Exercise::new("Lunge", "Legs", "Body Weight"),
            Exercise::new("Lunge", "Legs", "Body Weight"),
            Exercise::new("Squat", "Legs", "Barbell"),
        ];
        let existing = vec![ExerciseIdentity::new("Squat", "Legs", "Body Weight")];

        let selection = select_new(candidates, &existing, IdentityPolicy::Composite);
        assert_eq!(selection.skipped_existing, 1);
        assert_eq!(selection.skipped_in_batch, 1);
        assert_eq!(
            selection.fresh,
            vec![
                Exercise::new("Lunge", "Legs", "Body Weight"),
                Exercise::new("Squat", "Legs", "Barbell"),
            ]
        );
    }

    #[test]
    fn name_policy_treats_equipment_variants_as_known() {
        let candidates = vec![Exercise::new("Squat", "Legs", "Barbell")];
        let existing = vec![ExerciseIdentity::new("Squat", "Legs", "Body Weight")];

        let selection = select_new(candidates, &existing, IdentityPolicy::Name);
        assert!(selection.fresh.is_empty());
        assert_eq!(selection.skipped_existing, 1);
    }

    #[tokio::test]
    async fn second_refresh_inserts_nothing() {
        let engine = RefreshEngine::new(
            MemoryStore::default(),
            FakeCatalog::Records(vec![
                source("Squat", "Legs", "Body Weight"),
                source("Plank", "Core", "Body Weight"),
            ]),
        );

        let first = engine.refresh().await.unwrap();
        assert_eq!(first.inserted_count, 2);

        let second = engine.refresh().await.unwrap();
        assert_eq!(second.inserted_count, 0);
        assert_eq!(second.skipped_existing, 2);
        assert_eq!(engine.store().len(), 2);
    }

    #[tokio::test]
    async fn fetch_failure_touches_no_storage() {
        let engine = RefreshEngine::new(MemoryStore::default(), FakeCatalog::Status(401));

        let err = engine.refresh().await.unwrap_err();
        assert!(matches!(
            err,
            RefreshError::FetchFailed(FetchError::HttpStatus { status: 401, .. })
        ));
        assert_eq!(engine.store().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unavailable_store_is_reported() {
        let store = MemoryStore {
            down: true,
            ..MemoryStore::default()
        };
        let engine = RefreshEngine::new(
            store,
            FakeCatalog::Records(vec![source("Squat", "Legs", "Body Weight")]),
        );

        let err = engine.refresh().await.unwrap_err();
        assert!(matches!(err, RefreshError::StorageUnavailable(msg) if msg == "connection refused"));
    }

    #[tokio::test]
    async fn empty_catalog_skips_the_insert() {
        let engine = RefreshEngine::new(MemoryStore::default(), FakeCatalog::Records(Vec::new()));

        let result = engine.refresh().await.unwrap();
        assert_eq!(result, RefreshResult::default());
        // Only the identity read.
        assert_eq!(engine.store().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn existing_record_is_not_reinserted() {
        let engine = RefreshEngine::new(
            MemoryStore::with(vec![Exercise::new("Squat", "Legs", "Body Weight")]),
            FakeCatalog::Records(vec![
                source("Squat", "Legs", "Body Weight"),
                source("Push-up", "Chest", "Body Weight"),
            ]),
        );

        let result = engine.refresh().await.unwrap();
        assert_eq!(result.fetched_count, 2);
        assert_eq!(result.inserted_count, 1);
        assert_eq!(result.skipped_existing, 1);
        assert_eq!(engine.store().len(), 2);
    }
}
