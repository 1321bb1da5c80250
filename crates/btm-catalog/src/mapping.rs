//! Translation from catalog source records to the local exercise schema.
//!
//! | source             | local               |
//! |--------------------|---------------------|
//! | `name`             | `name`              |
//! | `bodyPart`         | `body_part`         |
//! | `equipment`        | `equipment`         |
//! | `target`           | `target`            |
//! | `gifUrl`           | `media_url`         |
//! | `secondaryMuscles` | `secondary_muscles` |
//! | `instructions`     | `instructions`      |
//! | `description`      | `description`       |
//! | `difficulty`       | `difficulty`        |
//!
//! Mapping is total. Strings are copied as-is. Missing, wrong-typed or blank
//! values become absent: empty strings for the identity fields, `None` for
//! optional strings, empty lists for sequences. Unknown source fields are
//! dropped.

use btm_core::Exercise;

use crate::SourceRecord;

/// Map one source record.
#[must_use]
pub fn map_record(record: &SourceRecord) -> Exercise {
    Exercise {
        name: text(record, "name").unwrap_or_default(),
        body_part: text(record, "bodyPart").unwrap_or_default(),
        equipment: text(record, "equipment").unwrap_or_default(),
        target: text(record, "target"),
        media_url: text(record, "gifUrl"),
        secondary_muscles: text_list(record, "secondaryMuscles"),
        instructions: text_list(record, "instructions"),
        description: text(record, "description"),
        difficulty: text(record, "difficulty"),
    }
}

/// Map a batch, preserving order.
#[must_use]
pub fn map_records(records: &[SourceRecord]) -> Vec<Exercise> {
    records.iter().map(map_record).collect()
}

/// Non-blank string value of `key`, unchanged.
fn text(record: &SourceRecord, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

/// String items of the array at `key`; other items are skipped.
fn text_list(record: &SourceRecord, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(serde_json::Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
