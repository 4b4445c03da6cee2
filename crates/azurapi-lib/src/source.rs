use std::env;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use crate::dataset::Document;
use crate::error::{Error, Result};

/// Raw GitHub location the published dataset is served from.
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/AzurAPI/azurapi-js-setup/master";
const DATASET_SOURCE_ENV: &str = "AZURAPI_DATASET_SOURCE";

/// Where online loads and version checks fetch documents from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// HTTP base URL; documents are fetched from `{base_url}/{file_name}`.
    Remote { base_url: String },
    /// Directory holding the five documents, used for mirrors and tests.
    Local(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::remote(DEFAULT_BASE_URL)
    }
}

impl DataSource {
    pub fn remote<T: Into<String>>(base_url: T) -> Self {
        DataSource::Remote {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn local<P: Into<PathBuf>>(dir: P) -> Self {
        DataSource::Local(dir.into())
    }

    /// Resolve the source, honoring the `AZURAPI_DATASET_SOURCE` override.
    ///
    /// An `http://` or `https://` value is used as a remote base URL; any other
    /// value is treated as a local directory.
    pub fn from_env() -> Self {
        match env::var(DATASET_SOURCE_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::parse(value.trim()),
            _ => DataSource::default(),
        }
    }

    fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::remote(value)
        } else {
            DataSource::local(value)
        }
    }

    /// Fetch the raw bytes of one document.
    pub fn fetch(&self, document: Document) -> Result<Vec<u8>> {
        match self {
            DataSource::Remote { base_url } => {
                let url = format!("{}/{}", base_url, document.file_name());
                info!(%document, %url, "fetching dataset document");
                let client = build_client()?;
                let response = client
                    .get(&url)
                    .header(ACCEPT, "application/json")
                    .send()?
                    .error_for_status()?;
                Ok(response.bytes()?.to_vec())
            }
            DataSource::Local(dir) => {
                let path = dir.join(document.file_name());
                debug!(%document, path = %path.display(), "reading dataset document from local source");
                read_bytes(&path)
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote { base_url } => write!(f, "{}", base_url),
            DataSource::Local(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Read a file, reporting a missing file as [`Error::DatasetNotFound`].
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::DatasetNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })
}

fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(user_agent())
        .build()
        .map_err(Error::Http)
}

fn user_agent() -> String {
    format!("azurapi-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}
