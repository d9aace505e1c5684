use std::collections::HashSet;
use std::io::BufRead;

use crate::Result;

/// The set of identifiers records are filtered against
///
/// Loaded once before the pipeline starts and immutable afterwards, so it can
/// be shared across worker threads without synchronization. Membership lookups
/// are amortized O(1).
#[derive(Debug, Clone, Default)]
pub struct IdentifierSet {
    ids: HashSet<String>,
}
impl IdentifierSet {
    /// Load identifiers from a newline-delimited stream, one per line
    ///
    /// Line terminators are stripped; duplicate lines are harmless no-ops.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut ids = HashSet::new();
        for line in reader.lines() {
            ids.insert(line?);
        }
        Ok(Self { ids })
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<String> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
