//! Starter data for an empty catalog.
//!
//! Seeding replaces the label tables and the exercise collection wholesale.

use btm_core::{Exercise, ExerciseFilter, LabelKind};

use crate::ExerciseDb;
use crate::error::DatabaseError;

pub const BODY_PARTS: &[&str] = &["Chest", "Back", "Legs", "Shoulders", "Arms", "Core"];

pub const EQUIPMENT: &[&str] = &["Dumbbell", "Barbell", "Kettlebell", "Body Weight", "Cable"];

/// Rows written by [`ExerciseDb::seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub body_parts: usize,
    pub equipment: usize,
    pub exercises: u64,
}

/// The three starter exercises.
#[must_use]
pub fn starter_exercises() -> Vec<Exercise> {
    vec![
        Exercise::new("Barbell Bench Press", "Chest", "Barbell")
            .with_target("Pectorals")
            .with_difficulty("Intermediate")
            .with_instructions([
                "Lie on a flat bench with your feet flat on the floor.",
                "Grip the barbell slightly wider than shoulder-width apart.",
                "Lower the bar to your chest, then press it back up.",
            ]),
        Exercise::new("Dumbbell Curl", "Arms", "Dumbbell")
            .with_target("Biceps")
            .with_difficulty("Beginner")
            .with_instructions([
                "Stand holding a dumbbell in each hand, palms facing forward.",
                "Curl the weights toward your shoulders.",
                "Lower them back down with control.",
            ]),
        Exercise::new("Squat", "Legs", "Body Weight")
            .with_target("Quadriceps")
            .with_difficulty("Beginner")
            .with_instructions([
                "Stand with feet shoulder-width apart.",
                "Lower your hips back and down as if sitting in a chair.",
                "Push through your heels to return to standing.",
            ]),
    ]
}

impl ExerciseDb {
    /// Replace all labels and exercises with the starter set.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any write fails.
    pub async fn seed(&self) -> Result<SeedReport, DatabaseError> {
        for kind in [LabelKind::BodyPart, LabelKind::Equipment] {
            self.clear_labels(kind).await?;
        }
        self.delete_exercises(&ExerciseFilter::all()).await?;

        for name in BODY_PARTS {
            self.add_label(LabelKind::BodyPart, name).await?;
        }
        for name in EQUIPMENT {
            self.add_label(LabelKind::Equipment, name).await?;
        }
        let outcome = self.insert_exercises(&starter_exercises()).await?;

        let report = SeedReport {
            body_parts: BODY_PARTS.len(),
            equipment: EQUIPMENT.len(),
            exercises: outcome.inserted,
        };
        tracing::info!(?report, "catalog seeded");
        Ok(report)
    }
}
