use super::Record;

/// A pair of records drawn from two synchronized streams at the same ordinal
/// position
///
/// The two halves are expected to share an identifier; [`ids_match`] reports
/// whether they actually do.
///
/// [`ids_match`]: RecordPair::ids_match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPair {
    /// The record read from the first stream (read 1)
    pub r1: Record,

    /// The record read from the second stream (read 2)
    pub r2: Record,
}
impl RecordPair {
    #[must_use]
    pub fn new(r1: Record, r2: Record) -> Self {
        Self { r1, r2 }
    }

    /// The filtering identifier of the pair
    ///
    /// Taken from read 1; read 2 is not consulted even when desynced.
    #[must_use]
    pub fn id(&self) -> &str {
        self.r1.id()
    }

    /// Whether both halves carry the same identifier
    #[must_use]
    pub fn ids_match(&self) -> bool {
        self.r1.id() == self.r2.id()
    }
}
