//! Classification and partitioning core
//!
//! Pure functions only: records go in, partitions and job configurations
//! come out. Reading the export and writing artifacts happens in
//! [`crate::io`] and [`crate::pipeline`].

pub mod emit;
pub mod normalize;
pub mod partition;
pub mod paths;
pub mod record;
pub mod transform;

pub use emit::{build_job_config, emit_partition, plan_emissions, Emission, JobConfig, JobMeta};
pub use normalize::{decode_identifier, normalize_record, normalize_records, DecodedIdentifier};
pub use partition::{build_partitions, Partition, PartitionKey, PartitionSet};
pub use paths::{derive_paths, PartitionPaths};
pub use record::{Fields, NormalizedRecord, Record};
