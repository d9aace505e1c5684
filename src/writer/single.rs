use std::io::Write;

use crate::{Record, Result};

/// Writes kept records to a single output stream
///
/// Lines are emitted exactly as stored, original terminators included, so the
/// output is byte-identical to the kept subsequence of the input. Records are
/// written in the order received; the writer never reorders.
pub struct SingleWriter<W: Write> {
    /// Inner writer
    inner: W,

    /// Number of records written
    records_written: usize,
}
impl<W: Write> SingleWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            records_written: 0,
        }
    }

    /// Append the record's four lines verbatim
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        for line in record.lines() {
            self.inner.write_all(line.as_bytes())?;
        }
        self.records_written += 1;
        Ok(())
    }

    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
