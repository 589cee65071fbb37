use pc_core::UserRecord;

/// Result of a full read, with a count of lines that failed to decode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadReport {
    pub records: Vec<UserRecord>,
    /// Non-blank data lines with fewer than ten values
    pub dropped_lines: usize,
}
