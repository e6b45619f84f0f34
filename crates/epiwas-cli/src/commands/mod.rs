pub mod pie;
pub mod pipeline;
pub mod piwas;

use crate::utils::progress::CliProgressHandler;

/// The progress handler for a command, drawing nothing when logging is silenced.
pub fn progress_handler(quiet: bool) -> CliProgressHandler {
    if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    }
}
