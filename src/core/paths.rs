//! Output path derivation
//!
//! Downstream tooling finds partitions by name, so the layout is fixed:
//! `<dir>/split/<stem>_<group>_<event>_<question>.<ext>` for the records and
//! the same stem with `.json` for the job configuration.

use super::partition::PartitionKey;
use crate::error::{Result, SplitError};
use std::path::{Path, PathBuf};

pub const SPLIT_DIR: &str = "split";
pub const CONFIG_EXTENSION: &str = "json";

const UNSAFE_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Where one partition's artifacts go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPaths {
    pub split_dir: PathBuf,
    /// `<stem>_<group>_<event>_<question>`, referenced by the job config
    pub base_name: String,
    pub records: PathBuf,
    pub config: PathBuf,
}

/// Check that a key component can be embedded in a file name
pub fn is_path_safe(component: &str) -> bool {
    component != "."
        && component != ".."
        && !component
            .chars()
            .any(|c| c.is_control() || UNSAFE_CHARS.contains(&c))
}

/// The extension-stripped file name of the input
pub fn input_stem(input_file: &Path) -> Result<String> {
    input_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| {
            SplitError::io(
                input_file,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })
}

/// Derive the output paths of a partition.
///
/// `row` is the first member's row number, reported when a key component
/// cannot be used in a file name.
pub fn derive_paths(
    input_file: &Path,
    key: &PartitionKey,
    extension: &str,
    row: usize,
) -> Result<PartitionPaths> {
    for component in [&key.group_code, &key.event_code, &key.question_code] {
        if !is_path_safe(component) {
            return Err(SplitError::malformed_identifier(
                row,
                Some(component.as_str()),
                "code contains characters that cannot appear in a file name",
            ));
        }
    }

    let dir = input_file.parent().unwrap_or_else(|| Path::new(""));
    let split_dir = dir.join(SPLIT_DIR);
    let base_name = format!(
        "{}_{}_{}_{}",
        input_stem(input_file)?,
        key.group_code,
        key.event_code,
        key.question_code
    );

    Ok(PartitionPaths {
        records: split_dir.join(format!("{}.{}", base_name, extension)),
        config: split_dir.join(format!("{}.{}", base_name, CONFIG_EXTENSION)),
        split_dir,
        base_name,
    })
}
