//! # fqsieve
//!
//! Order-preserving parallel identifier filtering for FASTQ records.
//!
//! Records (or record pairs) are framed from already-open byte streams, a pure
//! keep/drop predicate is evaluated against an immutable identifier set across
//! a pool of worker threads, and kept records are written back out byte-exact,
//! strictly in input order. Stream opening, compression, and CLI concerns
//! belong to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use fqsieve::{
//!     filter_single, FilterConfig, IdentifierSet, ProgressReporter, SingleReader, SingleWriter,
//! };
//!
//! let ids = IdentifierSet::from_reader(Cursor::new("@r2\n")).unwrap();
//! let reader = SingleReader::new(Cursor::new("@r1\nACGT\n+\nIIII\n@r2\nTGCA\n+\nJJJJ\n"));
//! let mut writer = SingleWriter::new(Vec::new());
//! let mut progress = ProgressReporter::new(Vec::new());
//!
//! let summary = filter_single(
//!     reader,
//!     &mut writer,
//!     &ids,
//!     FilterConfig::default(),
//!     &mut progress,
//! )
//! .unwrap();
//!
//! assert_eq!(summary.total, 2);
//! assert_eq!(summary.kept, 1);
//! assert_eq!(writer.into_inner(), b"@r2\nTGCA\n+\nJJJJ\n");
//! ```

mod error;
mod filter;
mod pipeline;
mod pool;
mod progress;
mod reader;
mod record;
mod set;
mod writer;

pub use error::{Error, ReadError, Result};
pub use filter::{Decision, PairMismatch, Predicate};
pub use pipeline::{filter_paired, filter_single, FilterConfig};
pub use pool::{ordered_map, SLOTS_PER_WORKER};
pub use progress::{FilterSummary, ProgressReporter, DEFAULT_REPORT_INTERVAL};
pub use reader::{FastqRead, PairedFastqRead, PairedReader, SingleReader};
pub use record::{Record, RecordPair};
pub use set::IdentifierSet;
pub use writer::{PairedWriter, SingleWriter};
