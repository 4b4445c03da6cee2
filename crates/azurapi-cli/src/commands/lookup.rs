//! Chapter and memory lookup handlers.

use std::io;

use anyhow::Result;

use azurapi_lib::AzurApi;

use azurapi_cli::output::OutputFormat;

pub fn handle_chapter(
    api: &AzurApi,
    spec: &str,
    difficulty: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let record = api.chapter(spec, difficulty)?;
    let title = match difficulty {
        Some(difficulty) => format!("Chapter {} ({})", spec, difficulty),
        None => format!("Chapter {}", spec),
    };
    format.render_record(&mut io::stdout().lock(), &title, record)
}

pub fn handle_memory(api: &AzurApi, name: &str, format: OutputFormat) -> Result<()> {
    let record = api.memory(name)?;
    format.render_record(&mut io::stdout().lock(), &format!("Memory {}", name), record)
}
