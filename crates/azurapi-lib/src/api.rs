//! The dataset accessor.
//!
//! [`AzurApi`] owns the five collections for its whole lifetime. Lookups
//! borrow from it; only [`AzurApi::update`] mutates, and only the version info.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::dataset::{
    fetch_dataset, load_dataset, parse_document, write_version_info, Dataset, Document,
};
use crate::equipment::Equipment;
use crate::error::{Error, Result};
use crate::faction::resolve_faction;
use crate::language::Language;
use crate::ship::{normalize_ship_id, Ship};
use crate::source::DataSource;
use crate::version::{UpdateStatus, VersionInfo};

/// Minimum Jaro-Winkler similarity for a ship name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.85;
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone)]
pub struct AzurApi {
    dataset: Dataset,
    folder: PathBuf,
    source: DataSource,
}

impl AzurApi {
    /// Load from `folder` when `offline`, otherwise fetch from the configured
    /// source and cache the documents in `folder`.
    pub fn new(offline: bool, folder: &Path) -> Result<Self> {
        if offline {
            Self::open(folder)
        } else {
            Self::fetch(folder)
        }
    }

    /// Load the cached documents in `folder`.
    pub fn open(folder: &Path) -> Result<Self> {
        let dataset = load_dataset(folder)?;
        Ok(Self::from_parts(dataset, folder))
    }

    /// Fetch from the source named by `AZURAPI_DATASET_SOURCE` (or the
    /// published dataset) and cache it in `folder`.
    pub fn fetch(folder: &Path) -> Result<Self> {
        Self::fetch_from(folder, &DataSource::from_env())
    }

    /// Fetch from an explicit source and cache it in `folder`.
    pub fn fetch_from(folder: &Path, source: &DataSource) -> Result<Self> {
        let dataset = fetch_dataset(folder, source)?;
        Ok(Self::from_parts(dataset, folder).with_source(source.clone()))
    }

    pub fn from_parts(dataset: Dataset, folder: &Path) -> Self {
        Self {
            dataset,
            folder: folder.to_path_buf(),
            source: DataSource::from_env(),
        }
    }

    /// Replace the source used by [`AzurApi::update`].
    pub fn with_source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn version(&self) -> &VersionInfo {
        &self.dataset.version
    }

    /// `"Ships Version: N | Equipments Version: M"`.
    pub fn version_summary(&self) -> String {
        self.dataset.version.to_string()
    }

    /// Check the source for a newer version descriptor.
    ///
    /// When the remote ships or equipments version is strictly newer, the
    /// fetched descriptor replaces the loaded one and is written to
    /// `version-info.json`. Ship and equipment data are left as loaded; callers
    /// that want fresh data should fetch a new accessor.
    pub fn update(&mut self) -> Result<UpdateStatus> {
        let bytes = self.source.fetch(Document::VersionInfo)?;
        let remote: VersionInfo = parse_document(Document::VersionInfo, &bytes)?;

        let status = self.dataset.version.compare(&remote);
        match status {
            UpdateStatus::Outdated { ships, equipments } => {
                info!(
                    ships,
                    equipments,
                    current = %self.dataset.version,
                    remote = %remote,
                    "newer dataset version available"
                );
                write_version_info(&self.folder, &bytes)?;
                self.dataset.version = remote;
            }
            UpdateStatus::UpToDate => {
                debug!(current = %self.dataset.version, "dataset version is current");
            }
        }

        Ok(status)
    }

    // -------------------------------------------------------------------------
    // Ships
    // -------------------------------------------------------------------------

    pub fn ships(&self) -> &[Ship] {
        &self.dataset.ships
    }

    /// First ship with any localized name equal to `name`, ignoring case.
    pub fn ship_by_name(&self, name: &str) -> Result<&Ship> {
        self.find_ship_by_name(name)
            .ok_or_else(|| self.unknown_ship(name))
    }

    /// Ship with the given id; short ids are zero-padded (`"5"` -> `"005"`).
    pub fn ship_by_id(&self, id: &str) -> Result<&Ship> {
        self.find_ship_by_id(id).ok_or_else(|| Error::UnknownShip {
            name: normalize_ship_id(id),
            suggestions: Vec::new(),
        })
    }

    /// Resolve by name, falling back to id.
    pub fn ship(&self, identifier: &str) -> Result<&Ship> {
        self.find_ship_by_name(identifier)
            .or_else(|| self.find_ship_by_id(identifier))
            .ok_or_else(|| self.unknown_ship(identifier))
    }

    fn find_ship_by_name(&self, name: &str) -> Option<&Ship> {
        self.dataset
            .ships
            .iter()
            .find(|ship| ship.names.matches(name))
    }

    fn find_ship_by_id(&self, id: &str) -> Option<&Ship> {
        let id = normalize_ship_id(id);
        self.dataset.ships.iter().find(|ship| ship.id == id)
    }

    /// Ships that carry a name in `language`.
    pub fn ships_by_language(&self, language: Language) -> Vec<&Ship> {
        self.dataset
            .ships
            .iter()
            .filter(|ship| ship.has_name_in(language))
            .collect()
    }

    /// Name lookup restricted to ships that carry a name in `language`.
    ///
    /// The match itself still considers every localized name of those ships.
    pub fn ship_by_language(&self, name: &str, language: Language) -> Result<&Ship> {
        self.ships_by_language(language)
            .into_iter()
            .find(|ship| ship.names.matches(name))
            .ok_or_else(|| Error::UnknownShip {
                name: format!("{} ({})", name, language),
                suggestions: self.fuzzy_ship_matches(name, MAX_SUGGESTIONS),
            })
    }

    /// Ships belonging to the faction named by any of its aliases.
    pub fn ships_by_faction(&self, faction: &str) -> Result<Vec<&Ship>> {
        let canonical = resolve_faction(faction).ok_or_else(|| Error::UnknownFaction {
            faction: faction.to_string(),
        })?;
        debug!(faction, canonical, "resolved faction alias");

        Ok(self
            .dataset
            .ships
            .iter()
            .filter(|ship| ship.nationality.as_deref() == Some(canonical))
            .collect())
    }

    /// Ship names similar to `name`, best match first.
    pub fn fuzzy_ship_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .dataset
            .ships
            .iter()
            .flat_map(|ship| ship.names.values())
            .map(|candidate| {
                (
                    strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                    candidate,
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        let mut suggestions: Vec<String> = Vec::with_capacity(limit);
        for (_, candidate) in scored {
            if suggestions.len() == limit {
                break;
            }
            if !suggestions.iter().any(|s| s == candidate) {
                suggestions.push(candidate.to_string());
            }
        }
        suggestions
    }

    fn unknown_ship(&self, name: &str) -> Error {
        Error::UnknownShip {
            name: name.to_string(),
            suggestions: self.fuzzy_ship_matches(name, MAX_SUGGESTIONS),
        }
    }

    // -------------------------------------------------------------------------
    // Chapters and memories
    // -------------------------------------------------------------------------

    /// Stage record for `"<chapter>-<stage>"`, or one of its difficulties.
    pub fn chapter(&self, spec: &str, difficulty: Option<&str>) -> Result<&Value> {
        self.dataset.chapters.lookup(spec, difficulty)
    }

    /// Memory record by name, ignoring case.
    pub fn memory(&self, name: &str) -> Result<&Value> {
        self.dataset
            .memories
            .get(name)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::UnknownMemory {
                memory: name.to_string(),
            })
    }

    // -------------------------------------------------------------------------
    // Equipment
    // -------------------------------------------------------------------------

    pub fn equipments(&self) -> &[Equipment] {
        &self.dataset.equipments
    }

    /// Equipment carrying a name in `language`; `code` and `official` return everything.
    pub fn equipments_by_language(&self, language: Language) -> Vec<&Equipment> {
        self.dataset
            .equipments
            .iter()
            .filter(|item| !language.is_locale() || item.has_name_in(language))
            .collect()
    }

    /// Equipment whose `language` name contains `name`, ignoring case.
    ///
    /// For `code` and `official` the record's field names are searched instead.
    pub fn equipment_by_language(&self, name: &str, language: Language) -> Vec<&Equipment> {
        self.dataset
            .equipments
            .iter()
            .filter(|item| item.matches_in(name, language))
            .collect()
    }
}
