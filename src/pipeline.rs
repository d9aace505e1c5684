use std::io::Write;

use crate::{
    ordered_map, FastqRead, FilterSummary, IdentifierSet, PairedFastqRead, PairedWriter, Predicate,
    ProgressReporter, Result, SingleWriter,
};

/// Configuration the pipeline accepts from its caller
///
/// Mode selection is carried by which entry point is invoked; validation of
/// contradictory modes belongs to the caller.
#[derive(Debug, Clone, Copy)]
pub struct FilterConfig {
    /// Invert the membership test (exclude matching records)
    pub invert: bool,

    /// Number of predicate worker threads (at least 1)
    pub num_threads: usize,
}
impl FilterConfig {
    #[must_use]
    pub fn new(invert: bool, num_threads: usize) -> Self {
        Self {
            invert,
            num_threads: num_threads.max(1),
        }
    }
}
impl Default for FilterConfig {
    /// No inversion, one worker per available CPU
    fn default() -> Self {
        Self {
            invert: false,
            num_threads: num_cpus::get(),
        }
    }
}

/// Filter a single record stream, preserving input order in the output
///
/// Records flow reader -> ordered worker pool -> writer; the predicate is
/// evaluated concurrently while the consumer drains decisions strictly in
/// submission order, counting every unit and writing the kept ones.
pub fn filter_single<R, W, D>(
    mut reader: R,
    writer: &mut SingleWriter<W>,
    set: &IdentifierSet,
    config: FilterConfig,
    progress: &mut ProgressReporter<D>,
) -> Result<FilterSummary>
where
    R: FastqRead + Send,
    W: Write,
    D: Write,
{
    let predicate = Predicate::new(set, config.invert);
    let units = std::iter::from_fn(move || reader.next_record());

    ordered_map(
        units,
        config.num_threads,
        |record| {
            let decision = predicate.evaluate(&record);
            Ok((record, decision))
        },
        |(record, decision)| {
            progress.record(&decision)?;
            if decision.keep {
                writer.write_record(&record)?;
            }
            Ok(())
        },
    )?;

    writer.flush()?;
    progress.finish()?;
    Ok(progress.summary(writer.records_written() as u64))
}

/// Filter two synchronized record streams, keeping or dropping whole pairs
///
/// Pair decisions come from read 1's identifier; desynced pairs are warned
/// about on the diagnostic sink, in order, and processing continues. Both
/// output streams always receive the same number of records.
pub fn filter_paired<R, W1, W2, D>(
    mut reader: R,
    writer: &mut PairedWriter<W1, W2>,
    set: &IdentifierSet,
    config: FilterConfig,
    progress: &mut ProgressReporter<D>,
) -> Result<FilterSummary>
where
    R: PairedFastqRead + Send,
    W1: Write,
    W2: Write,
    D: Write,
{
    let predicate = Predicate::new(set, config.invert);
    let units = std::iter::from_fn(move || reader.next_pair());

    ordered_map(
        units,
        config.num_threads,
        |pair| {
            let (decision, mismatch) = predicate.evaluate_pair(&pair);
            Ok((pair, decision, mismatch))
        },
        |(pair, decision, mismatch)| {
            if let Some(mismatch) = &mismatch {
                progress.mismatch(mismatch)?;
            }
            progress.record(&decision)?;
            if decision.keep {
                writer.write_pair(&pair)?;
            }
            Ok(())
        },
    )?;

    writer.flush()?;
    progress.finish()?;
    Ok(progress.summary(writer.pairs_written() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_available_parallelism() {
        let config = FilterConfig::default();
        assert!(!config.invert);
        assert!(config.num_threads >= 1);
    }

    #[test]
    fn worker_count_is_clamped() {
        let config = FilterConfig::new(true, 0);
        assert_eq!(config.num_threads, 1);
        assert!(config.invert);
    }
}
