//! File system side of the pipeline

pub mod delimited;
pub mod writer;

pub use delimited::{parse_records, read_records, serialize_records};
pub use writer::{ensure_dir, write_emission, write_file};
