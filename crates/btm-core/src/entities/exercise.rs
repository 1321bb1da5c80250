use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::ExerciseIdentity;

/// A workout exercise in the local schema.
///
/// The wire shape keeps the camelCase names the web client already speaks
/// (`bodyPart`, `gifUrl`, `secondaryMuscles`); snake_case spellings are
/// accepted on input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "bodyPart", alias = "body_part")]
    pub body_part: String,
    pub equipment: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default, rename = "gifUrl", alias = "media_url")]
    pub media_url: Option<String>,
    #[serde(default, rename = "secondaryMuscles", alias = "secondary_muscles")]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form label such as `Beginner` or `Intermediate`.
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl Exercise {
    /// Build an exercise from its identity triple with every optional field absent.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        body_part: impl Into<String>,
        equipment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            body_part: body_part.into(),
            equipment: equipment.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    #[must_use]
    pub fn with_instructions<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = steps.into_iter().map(Into::into).collect();
        self
    }

    /// The `(name, body_part, equipment)` triple of this record.
    #[must_use]
    pub fn identity(&self) -> ExerciseIdentity {
        ExerciseIdentity::new(&self.name, &self.body_part, &self.equipment)
    }

    /// Whether all three identity fields carry a non-blank value.
    #[must_use]
    pub fn has_complete_identity(&self) -> bool {
        [&self.name, &self.body_part, &self.equipment]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}
