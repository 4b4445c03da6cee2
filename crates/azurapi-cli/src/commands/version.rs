//! Version report and update handlers.

use std::io;

use anyhow::{Context, Result};

use azurapi_lib::AzurApi;

use azurapi_cli::output::OutputFormat;

pub fn handle_version(api: &AzurApi, format: OutputFormat) -> Result<()> {
    format.render_version(&mut io::stdout().lock(), api.version())
}

/// Compare the cached version info against the source and persist it when newer.
pub fn handle_update(api: &mut AzurApi, format: OutputFormat) -> Result<()> {
    let status = api
        .update()
        .with_context(|| format!("failed to check {} for a newer dataset", api.source()))?;

    format.render_update(&mut io::stdout().lock(), status, api.version())
}
