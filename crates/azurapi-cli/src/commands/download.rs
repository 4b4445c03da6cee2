//! Download command handler for fetching and caching the dataset.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use azurapi_lib::AzurApi;

use azurapi_cli::output::OutputFormat;

/// Handle the download subcommand.
///
/// Fetches all five documents from the configured source, caches them in
/// `data_dir`, and reports the cached version.
pub fn handle_download(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let api = AzurApi::fetch(data_dir).with_context(|| {
        format!(
            "failed to download the AzurAPI dataset into {}",
            data_dir.display()
        )
    })?;

    format.render_download(&mut io::stdout().lock(), api.folder(), api.version())
}
