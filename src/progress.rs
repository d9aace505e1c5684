use std::io::{self, Write};

use crate::{Decision, PairMismatch, Result};

/// Records between periodic progress lines
pub const DEFAULT_REPORT_INTERVAL: u64 = 1_000_000;

/// Aggregate counters for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Units drained from the pipeline
    pub total: u64,

    /// Units whose identifier was present in the set, invert notwithstanding
    pub matched: u64,

    /// Units written to output
    pub kept: u64,

    /// Pairs whose halves carried different identifiers
    pub mismatched: u64,
}
impl FilterSummary {
    /// Matched units as a percentage of total, 0 when nothing was processed
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn matched_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 * 100.0 / self.total as f64
        }
    }
}

/// Periodic and final counters, written to a diagnostic sink
///
/// The sink is distinct from the record output streams (stderr by convention)
/// so diagnostics never mix with record data. Counters are updated once per
/// unit as the consumer drains it, so progress lines and desync warnings
/// appear in submission order.
pub struct ProgressReporter<W: Write> {
    /// Diagnostic sink
    sink: W,

    /// Records between progress lines
    report_interval: u64,

    total: u64,
    matched: u64,
    mismatched: u64,
}
impl ProgressReporter<io::Stderr> {
    /// A reporter writing to standard error
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}
impl<W: Write> ProgressReporter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            report_interval: DEFAULT_REPORT_INTERVAL,
            total: 0,
            matched: 0,
            mismatched: 0,
        }
    }

    /// Override the progress interval (clamped to at least 1)
    #[must_use]
    pub fn with_interval(mut self, report_interval: u64) -> Self {
        self.report_interval = report_interval.max(1);
        self
    }

    /// Announce how many identifiers were loaded before the pipeline starts
    pub fn identifiers_loaded(&mut self, count: usize) -> Result<()> {
        writeln!(self.sink, "Read {count} identifiers to filter.")?;
        Ok(())
    }

    /// Count one drained unit, emitting a progress line at each interval
    pub fn record(&mut self, decision: &Decision) -> Result<()> {
        self.total += 1;
        if decision.matched {
            self.matched += 1;
        }
        if self.total % self.report_interval == 0 {
            writeln!(self.sink, "Processed {} records.", self.total)?;
        }
        Ok(())
    }

    /// Warn about a desynced pair; non-fatal
    pub fn mismatch(&mut self, mismatch: &PairMismatch) -> Result<()> {
        self.mismatched += 1;
        writeln!(
            self.sink,
            "WARNING: out of sync pair detected with ids {} {}",
            mismatch.id1, mismatch.id2
        )?;
        Ok(())
    }

    /// Emit the final summary line and flush the sink
    pub fn finish(&mut self) -> Result<()> {
        let percent = self.summary(0).matched_percent();
        writeln!(
            self.sink,
            "Processed {} records, matched {} ({:.2}%).",
            self.total, self.matched, percent
        )?;
        self.sink.flush()?;
        Ok(())
    }

    /// Consume the reporter and return the diagnostic sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Snapshot the counters; `kept` is supplied by the writer
    #[must_use]
    pub fn summary(&self, kept: u64) -> FilterSummary {
        FilterSummary {
            total: self.total,
            matched: self.matched,
            kept,
            mismatched: self.mismatched,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn matched(&self) -> u64 {
        self.matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn decision(matched: bool) -> Decision {
        Decision {
            keep: matched,
            matched,
        }
    }

    #[test]
    fn counts_and_interval_lines() -> Result<()> {
        let mut reporter = ProgressReporter::new(Vec::new()).with_interval(2);
        for i in 0..5 {
            reporter.record(&decision(i % 2 == 0))?;
        }
        reporter.finish()?;

        assert_eq!(reporter.total(), 5);
        assert_eq!(reporter.matched(), 3);

        let out = String::from_utf8(reporter.sink.clone())?;
        assert!(out.contains("Processed 2 records.\n"));
        assert!(out.contains("Processed 4 records.\n"));
        assert!(out.contains("Processed 5 records, matched 3 (60.00%).\n"));
        Ok(())
    }

    #[test]
    fn zero_records_summary_is_defined() -> Result<()> {
        let mut reporter = ProgressReporter::new(Vec::new());
        reporter.finish()?;

        assert_eq!(reporter.summary(0).matched_percent(), 0.0);
        let out = String::from_utf8(reporter.sink.clone())?;
        assert!(out.contains("Processed 0 records, matched 0 (0.00%).\n"));
        Ok(())
    }

    #[test]
    fn mismatch_warning_is_logged() -> Result<()> {
        let mut reporter = ProgressReporter::new(Vec::new());
        reporter.mismatch(&PairMismatch {
            id1: "@a".to_string(),
            id2: "@b".to_string(),
        })?;

        let summary = reporter.summary(0);
        assert_eq!(summary.mismatched, 1);
        let out = String::from_utf8(reporter.sink.clone())?;
        assert!(out.contains("WARNING: out of sync pair detected with ids @a @b\n"));
        Ok(())
    }
}
