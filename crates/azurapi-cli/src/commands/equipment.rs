//! Equipment lookup handler.

use std::io;

use anyhow::Result;

use azurapi_lib::{AzurApi, Language};

use azurapi_cli::output::OutputFormat;

/// List equipment in `language`, or search it when `name` is given.
pub fn handle_equipment(
    api: &AzurApi,
    name: Option<&str>,
    language: &str,
    format: OutputFormat,
) -> Result<()> {
    let language: Language = language.parse()?;
    let items = match name {
        Some(name) => api.equipment_by_language(name, language),
        None => api.equipments_by_language(language),
    };

    format.render_equipments(&mut io::stdout().lock(), &items)
}
