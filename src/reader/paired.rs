use std::io::BufRead;

use crate::{RecordPair, Result};

use super::{FastqRead, PairedFastqRead, SingleReader};

/// Frames two byte streams into record pairs, advancing both in lockstep
///
/// One record is taken from each stream per step. When either stream reaches
/// end-of-stream the pair sequence terminates and the longer stream is not
/// read further, keeping the emitted pairs aligned by ordinal position.
#[derive(Debug)]
pub struct PairedReader<R1: BufRead, R2: BufRead> {
    /// Reader for the first stream (read 1)
    r1: SingleReader<R1>,

    /// Reader for the second stream (read 2)
    r2: SingleReader<R2>,

    /// Number of pairs framed so far
    n_processed: usize,

    /// Finished reading either stream
    finished: bool,
}
impl<R1: BufRead, R2: BufRead> PairedReader<R1, R2> {
    pub fn new(inner1: R1, inner2: R2) -> Self {
        Self {
            r1: SingleReader::new(inner1),
            r2: SingleReader::new(inner2),
            n_processed: 0,
            finished: false,
        }
    }

    fn frame_pair(&mut self) -> Option<Result<RecordPair>> {
        let rec1 = match self.r1.next_record() {
            Some(Ok(rec)) => rec,
            Some(Err(e)) => return Some(Err(e)),
            None => {
                self.finished = true;
                return None;
            }
        };
        let rec2 = match self.r2.next_record() {
            Some(Ok(rec)) => rec,
            Some(Err(e)) => return Some(Err(e)),
            None => {
                // Stream 2 is shorter; rec1 is unmatched and dropped here
                self.finished = true;
                return None;
            }
        };
        self.n_processed += 1;

        Some(Ok(RecordPair::new(rec1, rec2)))
    }
}

impl<R1: BufRead, R2: BufRead> PairedFastqRead for PairedReader<R1, R2> {
    fn next_pair(&mut self) -> Option<Result<RecordPair>> {
        if self.finished {
            return None;
        }
        self.frame_pair()
    }

    fn n_processed(&self) -> usize {
        self.n_processed
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Cursor;

    fn fastq(ids: &[&str]) -> String {
        ids.iter()
            .map(|id| format!("{id}\nACGT\n+\nIIII\n"))
            .collect()
    }

    #[test]
    fn frames_pairs_in_lockstep() -> Result<()> {
        let in1 = fastq(&["@a 1", "@b 1"]);
        let in2 = fastq(&["@a 2", "@b 2"]);
        let mut reader = PairedReader::new(Cursor::new(in1), Cursor::new(in2));

        let pair = reader.next_pair().unwrap()?;
        assert_eq!(pair.id(), "@a");
        assert!(pair.ids_match());

        let pair = reader.next_pair().unwrap()?;
        assert_eq!(pair.id(), "@b");

        assert!(reader.next_pair().is_none());
        assert_eq!(reader.n_processed(), 2);
        Ok(())
    }

    #[test]
    fn stops_at_shorter_first_stream() -> Result<()> {
        let in1 = fastq(&["@a"]);
        let in2 = fastq(&["@a", "@b", "@c"]);
        let mut reader = PairedReader::new(Cursor::new(in1), Cursor::new(in2));

        assert!(reader.next_pair().unwrap().is_ok());
        assert!(reader.next_pair().is_none());
        assert!(reader.is_finished());
        assert_eq!(reader.n_processed(), 1);
        Ok(())
    }

    #[test]
    fn stops_at_shorter_second_stream() -> Result<()> {
        let in1 = fastq(&["@a", "@b", "@c"]);
        let in2 = fastq(&["@a"]);
        let mut reader = PairedReader::new(Cursor::new(in1), Cursor::new(in2));

        assert!(reader.next_pair().unwrap().is_ok());
        assert!(reader.next_pair().is_none());
        assert_eq!(reader.n_processed(), 1);
        Ok(())
    }

    #[test]
    fn truncation_in_either_stream_propagates() {
        let in1 = fastq(&["@a"]);
        let in2 = "@a\nACGT\n";
        let mut reader = PairedReader::new(Cursor::new(in1), Cursor::new(in2));
        assert!(reader.next_pair().unwrap().is_err());
    }
}
