use crate::{IdentifierSet, Record, RecordPair};

/// The outcome of evaluating one record or pair against the identifier set
///
/// `matched` records set membership regardless of polarity and feeds the run
/// summary; `keep` folds in the invert flag and determines what is written.
/// Derived once per unit and never re-derived downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Whether the unit is written to output
    pub keep: bool,

    /// Whether the identifier is present in the set
    pub matched: bool,
}

/// A desynced pair: the two halves carried different identifiers
///
/// A synchronization anomaly, not a fatal error. The pair is still evaluated
/// using read 1's identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMismatch {
    /// Identifier found in read 1
    pub id1: String,

    /// Identifier found in read 2
    pub id2: String,
}

/// The keep/drop predicate, with the identifier set and invert flag bound at
/// construction time
///
/// Pure and stateless beyond its immutable borrows, so a single value can be
/// shared across any number of worker threads.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<'a> {
    set: &'a IdentifierSet,
    invert: bool,
}
impl<'a> Predicate<'a> {
    #[must_use]
    pub fn new(set: &'a IdentifierSet, invert: bool) -> Self {
        Self { set, invert }
    }

    #[must_use]
    pub fn evaluate(&self, record: &Record) -> Decision {
        self.decide(record.id())
    }

    /// Evaluate a pair using read 1's identifier
    ///
    /// A differing read 2 identifier is reported alongside the decision so the
    /// consumer can surface it as an ordered diagnostic.
    #[must_use]
    pub fn evaluate_pair(&self, pair: &RecordPair) -> (Decision, Option<PairMismatch>) {
        let mismatch = if pair.ids_match() {
            None
        } else {
            Some(PairMismatch {
                id1: pair.r1.id().to_string(),
                id2: pair.r2.id().to_string(),
            })
        };
        (self.decide(pair.id()), mismatch)
    }

    fn decide(&self, id: &str) -> Decision {
        let matched = self.set.contains(id);
        Decision {
            keep: matched != self.invert,
            matched,
        }
    }
}
