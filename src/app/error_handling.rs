//! Error handling utilities

use crate::error::SplitError;
use tracing::error;

/// Print a fatal error and exit with its status code.
///
/// `SplitError`s anywhere in the chain pick the exit code and the user
/// message; the full context chain is shown with `-v`.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let exit_code = match error.chain().find_map(|e| e.downcast_ref::<SplitError>()) {
        Some(split_err) => {
            eprintln!("Error: {}", split_err.user_message());
            if verbose >= 1 {
                eprintln!("\nContext Chain:");
                for (i, cause) in error.chain().enumerate() {
                    eprintln!("  {}: {}", i, cause);
                }
                eprintln!("\n{}", split_err.developer_message());
            }
            split_err.exit_code()
        }
        None => {
            eprintln!("Error: {error}");
            if verbose >= 1 {
                eprintln!("\nError chain:");
                for (i, cause) in error.chain().enumerate() {
                    eprintln!("  {}: {}", i, cause);
                }
            }
            1
        }
    };

    std::process::exit(exit_code)
}
