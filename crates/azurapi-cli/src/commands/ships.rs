//! Ship lookup and listing handlers.

use std::io;

use anyhow::{Context, Result};

use azurapi_lib::{AzurApi, Language};

use azurapi_cli::output::OutputFormat;

/// Resolve a single ship by name or id, optionally scoped to a language.
pub fn handle_ship(
    api: &AzurApi,
    identifier: &str,
    language: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let ship = match language {
        Some(code) => {
            let language: Language = code.parse()?;
            api.ship_by_language(identifier, language)?
        }
        None => api
            .ship(identifier)
            .with_context(|| format!("no ship matches '{}'", identifier))?,
    };

    format.render_ship(&mut io::stdout().lock(), ship)
}

/// List ships, filtered by language and/or faction.
pub fn handle_list_ships(
    api: &AzurApi,
    language: Option<&str>,
    faction: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let mut ships = match faction {
        Some(faction) => api.ships_by_faction(faction)?,
        None => api.ships().iter().collect(),
    };

    if let Some(code) = language {
        let language: Language = code.parse()?;
        ships.retain(|ship| ship.has_name_in(language));
    }

    format.render_ships(&mut io::stdout().lock(), &ships)
}
