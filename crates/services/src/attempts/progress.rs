/// Aggregated view of attempt progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptProgress {
    pub total: usize,
    /// 1-based index of the question under the cursor.
    pub position: usize,
    pub answered: usize,
    pub is_complete: bool,
}
