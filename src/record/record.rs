/// An owned FASTQ record of four lines
///
/// Each line is stored verbatim, line terminator included, so that a kept
/// record can be written back byte-for-byte identical to its input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The header line (`@`-prefixed by convention)
    pub head: String,

    /// The nucleotide sequence line
    pub seq: String,

    /// The separator line (`+`-prefixed by convention)
    pub sep: String,

    /// The quality score line
    pub qual: String,
}
impl Record {
    #[must_use]
    pub fn new(head: String, seq: String, sep: String, qual: String) -> Self {
        Self {
            head,
            seq,
            sep,
            qual,
        }
    }

    /// The filtering identifier: the first whitespace-delimited token of the
    /// header line, compared verbatim (no case folding, no symbol stripping).
    ///
    /// Empty when the header line holds no token at all.
    #[must_use]
    pub fn id(&self) -> &str {
        self.head.split_whitespace().next().unwrap_or("")
    }

    /// The four lines in input order
    #[must_use]
    pub fn lines(&self) -> [&str; 4] {
        [&self.head, &self.seq, &self.sep, &self.qual]
    }
}
