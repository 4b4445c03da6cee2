use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the AzurAPI library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A dataset document could not be located at the resolved path.
    #[error("dataset document not found at {path}; fetch the dataset or point at another directory")]
    DatasetNotFound { path: PathBuf },

    /// Raised when attempting to overwrite the checked-in dataset fixtures.
    #[error("refusing to overwrite protected fixture dataset at {path}")]
    ProtectedFixturePath { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset cache")]
    ProjectDirsUnavailable,

    /// A fetched or cached document did not match the expected shape.
    #[error("failed to parse {document}: {source}")]
    InvalidDocument {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when no ship matched the given name or id.
    #[error("unknown ship: {name}{}", format_suggestions(.suggestions))]
    UnknownShip {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised for language codes outside the supported set.
    #[error("unknown language: {code} (expected one of en, cn, jp, kr, code, official)")]
    UnknownLanguage { code: String },

    /// Raised when no faction alias group matched.
    #[error("unknown faction: {faction}")]
    UnknownFaction { faction: String },

    /// Raised when a chapter/stage pair is malformed or absent.
    #[error("unknown chapter: {chapter}")]
    UnknownChapter { chapter: String },

    /// Raised when the stage exists but not at the requested difficulty.
    #[error("unknown difficulty: {chapter} ({difficulty})")]
    UnknownDifficulty {
        chapter: String,
        difficulty: String,
    },

    /// Raised when no memory name matched.
    #[error("unknown memory: {memory}")]
    UnknownMemory { memory: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ship_lists_suggestions() {
        let err = Error::UnknownShip {
            name: "Enterprize".to_string(),
            suggestions: vec!["Enterprise".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown ship: Enterprize. Did you mean 'Enterprise'?"
        );

        let err = Error::UnknownShip {
            name: "x".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown ship: x");
    }
}
