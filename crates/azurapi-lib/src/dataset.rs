use std::env;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::chapter::ChapterList;
use crate::equipment::Equipment;
use crate::error::{Error, Result};
use crate::memory::Memories;
use crate::ship::Ship;
use crate::source::{read_bytes, DataSource};
use crate::version::VersionInfo;

const DATA_DIR_ENV: &str = "AZURAPI_DATA_DIR";

/// The five documents that make up the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Ships,
    Chapters,
    Equipments,
    VersionInfo,
    Memories,
}

impl Document {
    pub const ALL: [Document; 5] = [
        Document::Ships,
        Document::Chapters,
        Document::Equipments,
        Document::VersionInfo,
        Document::Memories,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Document::Ships => "ships.json",
            Document::Chapters => "chapters.json",
            Document::Equipments => "equipments.json",
            Document::VersionInfo => "version-info.json",
            Document::Memories => "memories.json",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Fully loaded collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub ships: Vec<Ship>,
    pub chapters: ChapterList,
    pub equipments: Vec<Equipment>,
    pub version: VersionInfo,
    pub memories: Memories,
}

/// Absolute path to the checked-in fixture dataset, when available.
static PROTECTED_FIXTURE_DIR: Lazy<Option<PathBuf>> = Lazy::new(|| {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures");
    path.canonicalize().ok()
});

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "azurapi", "azurapi").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the directory the dataset is cached in.
///
/// Resolution order:
/// 1. Explicit `target` argument when provided.
/// 2. `AZURAPI_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(env_path));
    }

    default_data_dir()
}

/// Load every document from a local directory.
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    debug!(dir = %dir.display(), "loading dataset from local files");
    let read = |document: Document| read_bytes(&dir.join(document.file_name()));

    Ok(Dataset {
        ships: parse_document(Document::Ships, &read(Document::Ships)?)?,
        chapters: parse_document(Document::Chapters, &read(Document::Chapters)?)?,
        equipments: parse_document(Document::Equipments, &read(Document::Equipments)?)?,
        version: parse_document(Document::VersionInfo, &read(Document::VersionInfo)?)?,
        memories: parse_document(Document::Memories, &read(Document::Memories)?)?,
    })
}

/// Fetch every document from `source`, then cache the payloads in `dir`.
///
/// Nothing is written unless all five documents were fetched and parsed.
pub fn fetch_dataset(dir: &Path, source: &DataSource) -> Result<Dataset> {
    guard_protected_dir(dir)?;

    let ships = source.fetch(Document::Ships)?;
    let chapters = source.fetch(Document::Chapters)?;
    let equipments = source.fetch(Document::Equipments)?;
    let version = source.fetch(Document::VersionInfo)?;
    let memories = source.fetch(Document::Memories)?;

    let dataset = Dataset {
        ships: parse_document(Document::Ships, &ships)?,
        chapters: parse_document(Document::Chapters, &chapters)?,
        equipments: parse_document(Document::Equipments, &equipments)?,
        version: parse_document(Document::VersionInfo, &version)?,
        memories: parse_document(Document::Memories, &memories)?,
    };

    fs::create_dir_all(dir)?;
    write_document(dir, Document::Ships, &ships)?;
    write_document(dir, Document::Chapters, &chapters)?;
    write_document(dir, Document::Equipments, &equipments)?;
    write_document(dir, Document::VersionInfo, &version)?;
    write_document(dir, Document::Memories, &memories)?;
    info!(
        dir = %dir.display(),
        %source,
        ships = dataset.ships.len(),
        equipments = dataset.equipments.len(),
        "cached dataset"
    );

    Ok(dataset)
}

/// Cache a fetched `version-info.json` payload in `dir`, byte for byte.
pub(crate) fn write_version_info(dir: &Path, payload: &[u8]) -> Result<()> {
    guard_protected_dir(dir)?;
    write_document(dir, Document::VersionInfo, payload)
}

pub(crate) fn parse_document<T: DeserializeOwned>(document: Document, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| Error::InvalidDocument {
        document: document.to_string(),
        source,
    })
}

fn write_document(dir: &Path, document: Document, bytes: &[u8]) -> Result<()> {
    let destination = dir.join(document.file_name());
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    if destination.exists() {
        fs::remove_file(&destination)?;
    }
    tmp.persist(&destination).map_err(|err| err.error)?;
    debug!(path = %destination.display(), "wrote dataset document");
    Ok(())
}

fn guard_protected_dir(dir: &Path) -> Result<()> {
    let Some(fixture) = PROTECTED_FIXTURE_DIR.as_ref() else {
        return Ok(());
    };

    if is_same_path(dir, fixture) {
        return Err(Error::ProtectedFixturePath {
            path: fixture.clone(),
        });
    }

    Ok(())
}

fn is_same_path(candidate: &Path, protected: &Path) -> bool {
    if candidate == protected {
        return true;
    }

    match candidate.canonicalize() {
        Ok(resolved) => resolved == *protected,
        Err(_) => false,
    }
}
