use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::language::{Language, Names};

/// An equipment record. Everything besides `names` is kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Names>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Equipment {
    /// Field names present on the record, `names` included when the record has it.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.names
            .as_ref()
            .map(|_| "names")
            .into_iter()
            .chain(self.fields.keys().map(String::as_str))
    }

    pub fn display_name(&self) -> Option<&str> {
        self.names.as_ref().and_then(Names::display_name)
    }

    pub fn has_name_in(&self, language: Language) -> bool {
        self.names.as_ref().is_some_and(|names| names.has(language))
    }

    /// Case-insensitive substring match for a language-scoped query.
    ///
    /// Locales compare against `names[language]`; `code` and `official` compare
    /// against the record's field names.
    pub fn matches_in(&self, needle: &str, language: Language) -> bool {
        let needle = needle.to_lowercase();
        if language.is_locale() {
            self.names
                .as_ref()
                .and_then(|names| names.get(language))
                .map(|value| value.iter().any(|name| name.to_lowercase().contains(&needle)))
                .unwrap_or(false)
        } else {
            self.keys().any(|key| key.to_lowercase().contains(&needle))
        }
    }
}
