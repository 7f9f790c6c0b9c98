//! CLI route: dispatches parsed commands to the library and formats output.

use super::parse::{Cli, Commands};
use crate::error::ExportError;
use crate::export::Exporter;

/// Execute the parsed command, returning the text to print on success
pub fn run(cli: &Cli) -> Result<String, ExportError> {
    match &cli.command {
        Commands::Export { dataset, output } => {
            if !dataset.is_dir() {
                return Err(ExportError::InfoNotFound(dataset.clone()));
            }
            let (_, summary) = Exporter::new(dataset, output).run()?;
            Ok(format!(
                "Exported {} objects and {} assets from {} clients ({} transactions) to {}",
                summary.objects,
                summary.assets,
                summary.clients,
                summary.transactions,
                output.display()
            ))
        }
    }
}

/// Map a run error to a user-facing diagnostic
pub fn map_error(error: &ExportError) -> String {
    match error {
        ExportError::InfoNotFound(path) => {
            format!(
                "error: no dataset found at {} (info.json missing)",
                path.display()
            )
        }
        ExportError::FrameInvalid { client, index, .. } => {
            format!(
                "error: transaction {index} from client {client:?} failed integrity checks; \
                 aborting, the dataset may be corrupt ({error})"
            )
        }
        other => format!("error: {other}"),
    }
}
