//! Language codes and localized name sets shared by ships and equipment.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Language codes accepted by language-scoped queries.
///
/// `Code` and `Official` are not real locales: ships carry them as name
/// variants, while equipment queries treat them as pass-through selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Cn,
    Jp,
    Kr,
    Code,
    Official,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Cn,
        Language::Jp,
        Language::Kr,
        Language::Code,
        Language::Official,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Cn => "cn",
            Language::Jp => "jp",
            Language::Kr => "kr",
            Language::Code => "code",
            Language::Official => "official",
        }
    }

    /// Whether this code selects a real localized name.
    pub fn is_locale(&self) -> bool {
        !matches!(self, Language::Code | Language::Official)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str() == normalized)
            .ok_or_else(|| Error::UnknownLanguage {
                code: s.to_string(),
            })
    }
}

/// A localized name: usually a single string, occasionally a list of variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameValue {
    Single(String),
    Many(Vec<String>),
}

impl NameValue {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            NameValue::Single(value) => std::slice::from_ref(value),
            NameValue::Many(values) => values,
        };
        values.iter().map(String::as_str)
    }

    /// First (or only) variant.
    pub fn primary(&self) -> Option<&str> {
        self.iter().next()
    }
}

/// Localized names of a record. `null` entries deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Names {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<NameValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cn: Option<NameValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jp: Option<NameValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kr: Option<NameValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<NameValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<NameValue>,
    /// Locale keys outside the supported set, kept so they still take part in matching.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl Names {
    pub fn get(&self, language: Language) -> Option<&NameValue> {
        match language {
            Language::En => self.en.as_ref(),
            Language::Cn => self.cn.as_ref(),
            Language::Jp => self.jp.as_ref(),
            Language::Kr => self.kr.as_ref(),
            Language::Code => self.code.as_ref(),
            Language::Official => self.official.as_ref(),
        }
    }

    pub fn has(&self, language: Language) -> bool {
        self.get(language).is_some()
    }

    /// Every non-null name across all languages.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let known = Language::ALL
            .into_iter()
            .filter_map(|lang| self.get(lang))
            .flat_map(NameValue::iter);
        let other = self.other.values().flat_map(string_values);
        known.chain(other)
    }

    /// Case-insensitive exact match against any name.
    pub fn matches(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.values().any(|value| value.to_lowercase() == needle)
    }

    /// Best display name: English first, then the other locales in order.
    pub fn display_name(&self) -> Option<&str> {
        Language::ALL
            .into_iter()
            .find_map(|lang| self.get(lang).and_then(NameValue::primary))
    }
}

fn string_values(value: &Value) -> Box<dyn Iterator<Item = &str> + '_> {
    match value {
        Value::String(s) => Box::new(std::iter::once(s.as_str())),
        Value::Array(items) => Box::new(items.iter().filter_map(Value::as_str)),
        _ => Box::new(std::iter::empty()),
    }
}
