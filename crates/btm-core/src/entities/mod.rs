//! Entity structs for the local schema.
//!
//! `Exercise` maps to the `exercises` table; `Label` is the row shape of the
//! `body_parts` and `equipment` lookup tables.

mod exercise;
mod label;

pub use exercise::Exercise;
pub use label::{Label, LabelKind};
