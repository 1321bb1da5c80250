//! Exercise identity and the duplicate-detection policy.
//!
//! The store always enforces uniqueness on the full `(name, body_part,
//! equipment)` triple. The refresh engine's pre-insert check is keyed by an
//! [`IdentityPolicy`], which defaults to the same triple but can be narrowed
//! to the name alone for parity with older catalogs.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The `(name, body_part, equipment)` triple that identifies an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct ExerciseIdentity {
    pub name: String,
    #[serde(rename = "bodyPart")]
    pub body_part: String,
    pub equipment: String,
}

impl ExerciseIdentity {
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
        }
    }
}

impl fmt::Display for ExerciseIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.name, self.body_part, self.equipment)
    }
}

// ---------------------------------------------------------------------------
// IdentityPolicy
// ---------------------------------------------------------------------------

/// Which fields decide that an incoming record already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Name, body part and equipment together.
    #[default]
    Composite,
    /// Name only.
    Name,
}

impl IdentityPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Composite => "composite",
            Self::Name => "name",
        }
    }

    /// Project an identity triple onto the key this policy compares by.
    #[must_use]
    pub fn key_of(self, identity: &ExerciseIdentity) -> IdentityKey {
        match self {
            Self::Composite => IdentityKey::Composite(identity.clone()),
            Self::Name => IdentityKey::Name(identity.name.clone()),
        }
    }
}

impl fmt::Display for IdentityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "composite" | "triple" => Ok(Self::Composite),
            "name" => Ok(Self::Name),
            other => Err(format!(
                "unknown identity policy '{other}' (expected 'composite' or 'name')"
            )),
        }
    }
}

/// Hashable dedup key produced by [`IdentityPolicy::key_of`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Composite(ExerciseIdentity),
    Name(String),
}
