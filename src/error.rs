/// Custom Result type for fqsieve operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fqsieve library, encompassing all possible error
/// cases that can occur while filtering record streams.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors that occur while framing records from an input stream
    ReadError(#[from] ReadError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
}

/// Errors that can occur while framing FASTQ records
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The stream ended partway through a record
    ///
    /// # Arguments
    /// * First `usize` - The index of the incomplete record
    /// * Second `usize` - The number of lines read before the stream ended (1-3)
    #[error("Record {0} is incomplete: stream ended after {1} of 4 lines")]
    TruncatedRecord(usize, usize),
}
