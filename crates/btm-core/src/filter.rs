//! Query filters and distinct-able fields for exercise lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Equality filter over exercise fields. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseFilter {
    pub name: Option<String>,
    pub body_part: Option<String>,
    pub equipment: Option<String>,
    pub target: Option<String>,
    pub difficulty: Option<String>,
}

impl ExerciseFilter {
    /// A filter matching every exercise.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_body_part(body_part: impl Into<String>) -> Self {
        Self {
            body_part: Some(body_part.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn by_equipment(equipment: impl Into<String>) -> Self {
        Self {
            equipment: Some(equipment.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions().is_empty()
    }

    /// Set `(field, value)` pairs in a stable order.
    #[must_use]
    pub fn conditions(&self) -> Vec<(ExerciseField, &str)> {
        [
            (ExerciseField::Name, self.name.as_deref()),
            (ExerciseField::BodyPart, self.body_part.as_deref()),
            (ExerciseField::Equipment, self.equipment.as_deref()),
            (ExerciseField::Target, self.target.as_deref()),
            (ExerciseField::Difficulty, self.difficulty.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// ExerciseField
// ---------------------------------------------------------------------------

/// A scalar exercise field that can be filtered on or listed distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseField {
    Name,
    BodyPart,
    Equipment,
    Target,
    Difficulty,
}

impl ExerciseField {
    /// Column name in the `exercises` table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BodyPart => "body_part",
            Self::Equipment => "equipment",
            Self::Target => "target",
            Self::Difficulty => "difficulty",
        }
    }
}

impl fmt::Display for ExerciseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for ExerciseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "body_part" | "bodyPart" => Ok(Self::BodyPart),
            "equipment" => Ok(Self::Equipment),
            "target" => Ok(Self::Target),
            "difficulty" => Ok(Self::Difficulty),
            other => Err(format!("unknown exercise field '{other}'")),
        }
    }
}
