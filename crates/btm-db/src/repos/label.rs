//! Body part and equipment label repository.
//!
//! Deleting a label cascades to every exercise that references it.

use btm_core::{ExerciseFilter, Label, LabelKind};

use crate::ExerciseDb;
use crate::error::DatabaseError;
use crate::helpers::where_clause;

/// Rows removed by a cascading label delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelDeletion {
    pub labels_deleted: u64,
    pub exercises_deleted: u64,
}

fn cascade_filter(kind: LabelKind, name: &str) -> ExerciseFilter {
    match kind {
        LabelKind::BodyPart => ExerciseFilter::by_body_part(name),
        LabelKind::Equipment => ExerciseFilter::by_equipment(name),
    }
}

impl ExerciseDb {
    /// Add a label.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::InvalidInput`] for a blank name and
    /// [`DatabaseError::Duplicate`] when the label already exists.
    pub async fn add_label(&self, kind: LabelKind, name: &str) -> Result<Label, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DatabaseError::InvalidInput(format!("{kind} name is required")));
        }

        let sql = format!("INSERT OR IGNORE INTO {} (name) VALUES (?1)", kind.table());
        let _guard = self.write_lock.lock().await;
        if self.conn().execute(&sql, [name]).await? == 0 {
            return Err(DatabaseError::Duplicate {
                entity: match kind {
                    LabelKind::BodyPart => "body part",
                    LabelKind::Equipment => "equipment",
                },
                key: name.to_string(),
            });
        }
        Ok(Label::new(name))
    }

    /// All labels of `kind`, sorted by name.
    pub async fn list_labels(&self, kind: LabelKind) -> Result<Vec<Label>, DatabaseError> {
        let sql = format!("SELECT name FROM {} ORDER BY name", kind.table());
        let mut rows = self.conn().query(&sql, ()).await?;

        let mut labels = Vec::new();
        while let Some(row) = rows.next().await? {
            labels.push(Label::new(row.get::<String>(0)?));
        }
        Ok(labels)
    }

    /// Delete a label and every exercise that references it.
    ///
    /// Exercises are only removed when the label itself existed.
    pub async fn delete_label(
        &self,
        kind: LabelKind,
        name: &str,
    ) -> Result<LabelDeletion, DatabaseError> {
        let name = name.trim();
        let label_sql = format!("DELETE FROM {} WHERE name = ?1", kind.table());
        let (clause, params) = where_clause(&cascade_filter(kind, name));
        let exercise_sql = format!("DELETE FROM exercises{clause}");

        let _guard = self.write_lock.lock().await;
        let tx = self.conn().transaction().await?;
        let labels_deleted = tx.execute(&label_sql, [name]).await?;
        if labels_deleted == 0 {
            tx.rollback().await?;
            return Ok(LabelDeletion::default());
        }
        let exercises_deleted = tx
            .execute(&exercise_sql, libsql::params_from_iter(params))
            .await?;
        tx.commit().await?;

        tracing::debug!(%kind, name, exercises_deleted, "label deleted");
        Ok(LabelDeletion {
            labels_deleted,
            exercises_deleted,
        })
    }

    /// Remove every label of `kind`.
    pub async fn clear_labels(&self, kind: LabelKind) -> Result<u64, DatabaseError> {
        let sql = format!("DELETE FROM {}", kind.table());
        let _guard = self.write_lock.lock().await;
        Ok(self.conn().execute(&sql, ()).await?)
    }
}
