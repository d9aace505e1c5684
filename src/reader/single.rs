use std::io::BufRead;

use crate::{ReadError, Record, Result};

use super::FastqRead;

/// Frames a byte stream into FASTQ records, four lines at a time
///
/// Lines are kept verbatim (terminators included). The reader yields a finite,
/// non-restartable sequence of records and distinguishes a clean end-of-stream
/// from a truncated final record.
#[derive(Debug)]
pub struct SingleReader<R: BufRead> {
    /// Inner stream
    inner: R,

    /// Number of records framed so far
    n_processed: usize,

    /// Finished reading the stream
    finished: bool,
}
impl<R: BufRead> SingleReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            n_processed: 0,
            finished: false,
        }
    }

    /// Read one raw line, terminator retained
    ///
    /// Returns `None` at end-of-stream.
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }

    /// Read a line inside a record body, where end-of-stream is a framing error
    fn body_line(&mut self, lines_seen: usize) -> Result<String> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => {
                self.finished = true;
                Err(ReadError::TruncatedRecord(self.n_processed, lines_seen).into())
            }
        }
    }

    fn frame_record(&mut self) -> Result<Option<Record>> {
        let Some(head) = self.next_line()? else {
            self.finished = true;
            return Ok(None);
        };
        let seq = self.body_line(1)?;
        let sep = self.body_line(2)?;
        let qual = self.body_line(3)?;
        self.n_processed += 1;

        Ok(Some(Record::new(head, seq, sep, qual)))
    }
}

impl<R: BufRead> FastqRead for SingleReader<R> {
    fn next_record(&mut self) -> Option<Result<Record>> {
        if self.finished {
            return None;
        }
        self.frame_record().transpose()
    }

    fn n_processed(&self) -> usize {
        self.n_processed
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
