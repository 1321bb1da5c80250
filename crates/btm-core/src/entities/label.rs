use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::filter::ExerciseField;

/// A named body part or equipment entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord)]
pub struct Label {
    pub name: String,
}

impl Label {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Which label collection a [`Label`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    BodyPart,
    Equipment,
}

impl LabelKind {
    /// Table holding this kind of label.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::BodyPart => "body_parts",
            Self::Equipment => "equipment",
        }
    }

    /// Exercise field that references this kind of label.
    #[must_use]
    pub const fn exercise_field(self) -> ExerciseField {
        match self {
            Self::BodyPart => ExerciseField::BodyPart,
            Self::Equipment => ExerciseField::Equipment,
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BodyPart => f.write_str("body part"),
            Self::Equipment => f.write_str("equipment"),
        }
    }
}
