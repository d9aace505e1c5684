mod paired;
mod read;
mod single;

pub use paired::PairedReader;
pub use read::{FastqRead, PairedFastqRead};
pub use single::SingleReader;
