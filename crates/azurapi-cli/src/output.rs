//! Output formatting for query results.
//!
//! Every renderer writes to a caller-supplied writer so subcommands can target
//! stdout while tests capture into a buffer.

use std::fmt;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

use azurapi_lib::{Equipment, Language, Ship, UpdateStatus, VersionInfo};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON records.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct DownloadOutput<'a> {
    data_dir: String,
    version: &'a VersionInfo,
}

#[derive(Debug, Serialize)]
struct UpdateOutput<'a> {
    #[serde(flatten)]
    status: UpdateStatus,
    version: &'a VersionInfo,
}

impl OutputFormat {
    pub fn render_ship<W: Write>(&self, out: &mut W, ship: &Ship) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(out, ship),
            OutputFormat::Text => {
                writeln!(out, "{} [{}]", ship.display_name(), ship.id)?;
                if let Some(nationality) = &ship.nationality {
                    writeln!(out, "  Nationality: {}", nationality)?;
                }
                for language in Language::ALL {
                    if let Some(name) = ship.names.get(language) {
                        let joined: Vec<&str> = name.iter().collect();
                        writeln!(out, "  {:<9} {}", format!("{}:", language), joined.join(" / "))?;
                    }
                }
                for key in ["hullType", "rarity"] {
                    if let Some(value) = ship.fields.get(key).and_then(Value::as_str) {
                        writeln!(out, "  {:<9} {}", format!("{}:", key), value)?;
                    }
                }
                Ok(())
            }
        }
    }

    pub fn render_ships<W: Write>(&self, out: &mut W, ships: &[&Ship]) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(out, ships),
            OutputFormat::Text => {
                if ships.is_empty() {
                    writeln!(out, "No ships matched.")?;
                    return Ok(());
                }

                writeln!(out, "Ships ({}):", ships.len())?;
                writeln!(out, "{:<10} {:<24} {}", "ID", "Name", "Nationality")?;
                for ship in ships {
                    writeln!(
                        out,
                        "{:<10} {:<24} {}",
                        ship.id,
                        ship.display_name(),
                        ship.nationality.as_deref().unwrap_or("-")
                    )?;
                }
                Ok(())
            }
        }
    }

    pub fn render_equipments<W: Write>(&self, out: &mut W, items: &[&Equipment]) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(out, items),
            OutputFormat::Text => {
                if items.is_empty() {
                    writeln!(out, "No equipment matched.")?;
                    return Ok(());
                }

                writeln!(out, "Equipment ({}):", items.len())?;
                for item in items {
                    let name = item.display_name().unwrap_or("<unnamed>");
                    match item.fields.get("category").and_then(Value::as_str) {
                        Some(category) => writeln!(out, "- {} [{}]", name, category)?,
                        None => writeln!(out, "- {}", name)?,
                    }
                }
                Ok(())
            }
        }
    }

    /// Chapter and memory records are opaque, so both formats print JSON;
    /// text adds a heading.
    pub fn render_record<W: Write>(&self, out: &mut W, title: &str, record: &Value) -> Result<()> {
        if *self == OutputFormat::Text {
            writeln!(out, "{}:", title)?;
        }
        write_json(out, record)
    }

    pub fn render_version<W: Write>(&self, out: &mut W, version: &VersionInfo) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(out, version),
            OutputFormat::Text => {
                writeln!(out, "{}", version)?;
                Ok(())
            }
        }
    }

    pub fn render_update<W: Write>(
        &self,
        out: &mut W,
        status: UpdateStatus,
        version: &VersionInfo,
    ) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(out, &UpdateOutput { status, version }),
            OutputFormat::Text => {
                match status {
                    UpdateStatus::UpToDate => writeln!(out, "Dataset is up to date.")?,
                    UpdateStatus::Outdated { ships, equipments } => {
                        let mut stale = Vec::new();
                        if ships {
                            stale.push("ships");
                        }
                        if equipments {
                            stale.push("equipments");
                        }
                        writeln!(
                            out,
                            "Newer {} available; version info updated. Run `download` to refresh the data.",
                            stale.join(" and ")
                        )?;
                    }
                }
                writeln!(out, "{}", version)?;
                Ok(())
            }
        }
    }

    pub fn render_download<W: Write>(
        &self,
        out: &mut W,
        data_dir: &Path,
        version: &VersionInfo,
    ) -> Result<()> {
        match self {
            OutputFormat::Json => write_json(
                out,
                &DownloadOutput {
                    data_dir: data_dir.display().to_string(),
                    version,
                },
            ),
            OutputFormat::Text => {
                writeln!(out, "Dataset available at {}", data_dir.display())?;
                writeln!(out, "{}", version)?;
                Ok(())
            }
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> Ship {
        serde_json::from_value(serde_json::json!({
            "id": "077",
            "names": { "en": "Houshou", "jp": "鳳翔", "kr": null },
            "nationality": "Sakura Empire",
            "hullType": "Light Aircraft Carrier"
        }))
        .unwrap()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn text_ship_lists_present_names() {
        let ship = ship();
        let text = render(|out| OutputFormat::Text.render_ship(out, &ship));

        assert!(text.starts_with("Houshou [077]\n"));
        assert!(text.contains("Nationality: Sakura Empire"));
        assert!(text.contains("jp:       鳳翔"));
        assert!(!text.contains("kr:"));
        assert!(text.contains("Light Aircraft Carrier"));
    }

    #[test]
    fn json_ships_round_trip_fields() {
        let ship = ship();
        let json = render(|out| OutputFormat::Json.render_ships(out, &[&ship]));
        let parsed: Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed[0]["hullType"], "Light Aircraft Carrier");
        assert_eq!(parsed[0]["names"]["en"], "Houshou");
    }

    #[test]
    fn empty_lists_say_so() {
        let text = render(|out| OutputFormat::Text.render_ships(out, &[]));
        assert_eq!(text, "No ships matched.\n");
    }
}
