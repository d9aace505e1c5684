use std::io::Write;

use crate::{RecordPair, Result};

use super::SingleWriter;

/// Writes kept record pairs to two output streams
///
/// Both halves of a pair are written in the same call, so the two streams
/// always hold equal record counts and position `i` in stream 1 corresponds to
/// position `i` in stream 2. Dropped pairs are written nowhere.
pub struct PairedWriter<W1: Write, W2: Write> {
    /// Writer for the first output stream (read 1)
    out1: SingleWriter<W1>,

    /// Writer for the second output stream (read 2)
    out2: SingleWriter<W2>,
}
impl<W1: Write, W2: Write> PairedWriter<W1, W2> {
    pub fn new(inner1: W1, inner2: W2) -> Self {
        Self {
            out1: SingleWriter::new(inner1),
            out2: SingleWriter::new(inner2),
        }
    }

    /// Append read 1 to stream 1 and read 2 to stream 2
    pub fn write_pair(&mut self, pair: &RecordPair) -> Result<()> {
        self.out1.write_record(&pair.r1)?;
        self.out2.write_record(&pair.r2)?;
        Ok(())
    }

    /// Number of pairs written (equal for both streams)
    #[must_use]
    pub fn pairs_written(&self) -> usize {
        self.out1.records_written()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out1.flush()?;
        self.out2.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (W1, W2) {
        (self.out1.into_inner(), self.out2.into_inner())
    }
}
