//! [`ExerciseStore`] over libSQL.

use btm_core::{
    DeleteResult, Exercise, ExerciseField, ExerciseFilter, ExerciseIdentity, ExerciseStore,
    InsertManyResult, StoreError,
};

use crate::ExerciseDb;

impl ExerciseStore for ExerciseDb {
    async fn find(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, StoreError> {
        Ok(self.find_exercises(filter).await?)
    }

    async fn distinct(&self, field: ExerciseField) -> Result<Vec<String>, StoreError> {
        Ok(self.distinct_values(field).await?)
    }

    async fn insert_many(&self, exercises: &[Exercise]) -> Result<InsertManyResult, StoreError> {
        let outcome = self.insert_exercises(exercises).await?;
        if outcome.rejected.is_empty() {
            Ok(InsertManyResult {
                inserted_count: outcome.inserted,
            })
        } else {
            Err(StoreError::PartialWrite {
                inserted: outcome.inserted,
                rejected: outcome.rejected,
            })
        }
    }

    async fn delete(&self, filter: &ExerciseFilter) -> Result<DeleteResult, StoreError> {
        Ok(DeleteResult {
            deleted_count: self.delete_exercises(filter).await?,
        })
    }

    async fn existing_identities(&self) -> Result<Vec<ExerciseIdentity>, StoreError> {
        Ok(self.exercise_identities().await?)
    }
}
