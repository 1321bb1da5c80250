use btm_core::ExerciseIdentity;
use serde::Serialize;

/// Summary of one refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RefreshResult {
    /// Records returned by the catalog.
    pub fetched_count: usize,
    /// Records actually persisted by this refresh.
    pub inserted_count: u64,
    /// Candidates dropped because storage already held their key.
    pub skipped_existing: usize,
    /// Candidates dropped because an earlier record in the same fetch had their key.
    pub skipped_in_batch: usize,
    /// Candidates the store refused at insert time (lost a race, blank identity).
    pub rejected: Vec<ExerciseIdentity>,
}
