//! Exercise repository: filtered reads, distinct values, single and bulk
//! inserts, delete by filter.

use btm_core::{Exercise, ExerciseField, ExerciseFilter, ExerciseIdentity};
use libsql::TransactionBehavior;

use crate::ExerciseDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_string_list, to_json_list, where_clause};

const EXERCISE_COLUMNS: &str = "name, body_part, equipment, target, media_url, \
     secondary_muscles, instructions, description, difficulty";

const INSERT_OR_IGNORE: &str = "INSERT OR IGNORE INTO exercises \
     (name, body_part, equipment, target, media_url, secondary_muscles, instructions, description, difficulty) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

/// Per-record outcome of an unordered bulk insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkInsertOutcome {
    pub inserted: u64,
    /// Identities the store refused (existing triple, blank identity field,
    /// or a repeat within the same batch).
    pub rejected: Vec<ExerciseIdentity>,
}

fn row_to_exercise(row: &libsql::Row) -> Result<Exercise, DatabaseError> {
    Ok(Exercise {
        name: row.get::<String>(0)?,
        body_part: row.get::<String>(1)?,
        equipment: row.get::<String>(2)?,
        target: get_opt_string(row, 3)?,
        media_url: get_opt_string(row, 4)?,
        secondary_muscles: parse_string_list(get_opt_string(row, 5)?.as_deref())?,
        instructions: parse_string_list(get_opt_string(row, 6)?.as_deref())?,
        description: get_opt_string(row, 7)?,
        difficulty: get_opt_string(row, 8)?,
    })
}

/// `INSERT OR IGNORE` one exercise; returns rows changed (0 when refused).
async fn insert_or_ignore(
    conn: &libsql::Connection,
    exercise: &Exercise,
) -> Result<u64, DatabaseError> {
    let changed = conn
        .execute(
            INSERT_OR_IGNORE,
            libsql::params![
                exercise.name.as_str(),
                exercise.body_part.as_str(),
                exercise.equipment.as_str(),
                exercise.target.as_deref(),
                exercise.media_url.as_deref(),
                to_json_list(&exercise.secondary_muscles)?,
                to_json_list(&exercise.instructions)?,
                exercise.description.as_deref(),
                exercise.difficulty.as_deref()
            ],
        )
        .await?;
    Ok(changed)
}

fn count_to_u64(n: i64) -> Result<u64, DatabaseError> {
    u64::try_from(n).map_err(|_| DatabaseError::Query(format!("negative count: {n}")))
}

impl ExerciseDb {
    /// All exercises matching `filter`, in insertion order.
    pub async fn find_exercises(
        &self,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, DatabaseError> {
        let (clause, params) = where_clause(filter);
        let sql = format!("SELECT {EXERCISE_COLUMNS} FROM exercises{clause} ORDER BY id");
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut exercises = Vec::new();
        while let Some(row) = rows.next().await? {
            exercises.push(row_to_exercise(&row)?);
        }
        Ok(exercises)
    }

    /// First exercise stored under `name`, if any.
    pub async fn find_exercise_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Exercise>, DatabaseError> {
        let sql = format!("SELECT {EXERCISE_COLUMNS} FROM exercises WHERE name = ?1 ORDER BY id LIMIT 1");
        let mut rows = self.conn().query(&sql, [name]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_exercise(&row)?)),
            None => Ok(None),
        }
    }

    /// Up to `limit` exercises drawn at random, optionally restricted to a body part.
    pub async fn random_exercises(
        &self,
        body_part: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Exercise>, DatabaseError> {
        let mut rows = match body_part {
            Some(body_part) => {
                let sql = format!(
                    "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE body_part = ?1 ORDER BY random() LIMIT ?2"
                );
                self.conn()
                    .query(&sql, libsql::params![body_part, i64::from(limit)])
                    .await?
            }
            None => {
                let sql =
                    format!("SELECT {EXERCISE_COLUMNS} FROM exercises ORDER BY random() LIMIT ?1");
                self.conn().query(&sql, [i64::from(limit)]).await?
            }
        };

        let mut exercises = Vec::new();
        while let Some(row) = rows.next().await? {
            exercises.push(row_to_exercise(&row)?);
        }
        Ok(exercises)
    }

    /// Sorted distinct non-empty values of `field`.
    pub async fn distinct_values(&self, field: ExerciseField) -> Result<Vec<String>, DatabaseError> {
        let column = field.column();
        let sql = format!(
            "SELECT DISTINCT {column} FROM exercises \
             WHERE {column} IS NOT NULL AND {column} != '' ORDER BY {column}"
        );
        let mut rows = self.conn().query(&sql, ()).await?;

        let mut values = Vec::new();
        while let Some(row) = rows.next().await? {
            values.push(row.get::<String>(0)?);
        }
        Ok(values)
    }

    /// Identity triples of every stored exercise.
    pub async fn exercise_identities(&self) -> Result<Vec<ExerciseIdentity>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT name, body_part, equipment FROM exercises", ())
            .await?;

        let mut identities = Vec::new();
        while let Some(row) = rows.next().await? {
            identities.push(ExerciseIdentity {
                name: row.get::<String>(0)?,
                body_part: row.get::<String>(1)?,
                equipment: row.get::<String>(2)?,
            });
        }
        Ok(identities)
    }

    pub async fn count_exercises(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM exercises", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        count_to_u64(row.get::<i64>(0)?)
    }

    /// Insert a single exercise.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::InvalidInput`] when an identity field is blank
    /// and [`DatabaseError::Duplicate`] when the triple already exists.
    pub async fn insert_exercise(&self, exercise: &Exercise) -> Result<(), DatabaseError> {
        if !exercise.has_complete_identity() {
            return Err(DatabaseError::InvalidInput(
                "name, bodyPart and equipment are required".into(),
            ));
        }

        let _guard = self.write_lock.lock().await;
        if insert_or_ignore(self.conn(), exercise).await? == 0 {
            return Err(DatabaseError::Duplicate {
                entity: "exercise",
                key: exercise.identity().to_string(),
            });
        }
        Ok(())
    }

    /// Unordered bulk insert.
    ///
    /// Every record is attempted. Records the schema refuses are reported in
    /// [`BulkInsertOutcome::rejected`] and do not stop the rest of the batch.
    /// The batch runs in one immediate transaction; a failure that is not a
    /// per-record refusal rolls the whole batch back.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction cannot be started or
    /// committed, or a statement fails for a reason other than a constraint.
    pub async fn insert_exercises(
        &self,
        exercises: &[Exercise],
    ) -> Result<BulkInsertOutcome, DatabaseError> {
        let mut outcome = BulkInsertOutcome::default();
        if exercises.is_empty() {
            return Ok(outcome);
        }

        let _guard = self.write_lock.lock().await;
        let tx = self
            .conn()
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await?;

        for exercise in exercises {
            match insert_or_ignore(&tx, exercise).await {
                Ok(0) => outcome.rejected.push(exercise.identity()),
                Ok(_) => outcome.inserted += 1,
                Err(e) => {
                    if let Err(rollback) = tx.rollback().await {
                        tracing::warn!(error = %rollback, "rollback after failed bulk insert");
                    }
                    return Err(e);
                }
            }
        }

        tx.commit().await?;
        tracing::debug!(
            inserted = outcome.inserted,
            rejected = outcome.rejected.len(),
            "bulk insert committed"
        );
        Ok(outcome)
    }

    /// Delete every exercise matching `filter`. An empty filter deletes all.
    pub async fn delete_exercises(&self, filter: &ExerciseFilter) -> Result<u64, DatabaseError> {
        let (clause, params) = where_clause(filter);
        let sql = format!("DELETE FROM exercises{clause}");

        let _guard = self.write_lock.lock().await;
        let deleted = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        Ok(deleted)
    }

    /// Delete the oldest exercise stored under `name`. Returns whether a row went.
    pub async fn delete_exercise_by_name(&self, name: &str) -> Result<bool, DatabaseError> {
        let _guard = self.write_lock.lock().await;
        let deleted = self
            .conn()
            .execute(
                "DELETE FROM exercises WHERE id = \
                 (SELECT id FROM exercises WHERE name = ?1 ORDER BY id LIMIT 1)",
                [name],
            )
            .await?;
        Ok(deleted == 1)
    }
}
