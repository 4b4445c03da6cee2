//! Common test utilities and fixture helpers.
//!
//! Integration tests load the checked-in dataset under `docs/fixtures`, or a
//! scratch copy of it when a test needs to write.

use std::fs;
use std::path::{Path, PathBuf};

use azurapi_lib::{AzurApi, DataSource, Document};
use tempfile::TempDir;

/// Directory holding the five fixture documents.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Fixture directory with a newer `version-info.json` only.
#[allow(dead_code)]
pub fn newer_version_dir() -> PathBuf {
    fixtures_dir().join("newer")
}

/// Accessor over the fixture dataset, loaded offline.
#[allow(dead_code)]
pub fn fixture_api() -> AzurApi {
    AzurApi::open(&fixtures_dir()).expect("fixture dataset loads")
}

/// Scratch directory seeded with a copy of the fixture documents.
#[allow(dead_code)]
pub struct DatasetTestEnv {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl DatasetTestEnv {
    /// Create a scratch directory containing every fixture document.
    pub fn new() -> Self {
        let env = Self::empty();
        for document in Document::ALL {
            fs::copy(
                fixtures_dir().join(document.file_name()),
                env.data_dir.join(document.file_name()),
            )
            .expect("copy fixture document");
        }
        env
    }

    /// Create an empty scratch directory.
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let data_dir = temp_dir.path().join("data");
        fs::create_dir_all(&data_dir).expect("create data dir");
        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn path(&self, document: Document) -> PathBuf {
        self.data_dir.join(document.file_name())
    }

    pub fn remove(&self, document: Document) {
        fs::remove_file(self.path(document)).expect("remove fixture document");
    }

    /// Accessor fetched from the fixture directory as if it were the remote.
    pub fn fetch_from_fixtures(&self) -> AzurApi {
        AzurApi::fetch_from(&self.data_dir, &DataSource::local(fixtures_dir()))
            .expect("fetch from local fixture source")
    }

    pub fn root(&self) -> &Path {
        self._temp_dir.path()
    }
}

impl Default for DatasetTestEnv {
    fn default() -> Self {
        Self::new()
    }
}
