use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Campaign chapters keyed by chapter number, then stage number, then
/// (optionally) difficulty. Stage descriptors are kept as raw JSON, in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterList(pub Map<String, Value>);

/// A parsed `<chapter><separator><stage>` address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageAddress {
    pub chapter: String,
    pub stage: String,
}

impl StageAddress {
    /// Split on the first run of non-digit characters, e.g. `"7-2"` or `"7 / 2"`.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        let split = spec.find(|c: char| !c.is_ascii_digit())?;
        let (chapter, rest) = spec.split_at(split);
        let stage = rest.trim_start_matches(|c: char| !c.is_ascii_digit());

        if chapter.is_empty() || stage.is_empty() || !stage.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            chapter: chapter.to_string(),
            stage: stage.to_string(),
        })
    }
}

impl std::fmt::Display for StageAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.chapter, self.stage)
    }
}

impl ChapterList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a stage, or one of its difficulties when `difficulty` is given.
    pub fn lookup(&self, spec: &str, difficulty: Option<&str>) -> Result<&Value> {
        let address = StageAddress::parse(spec).ok_or_else(|| Error::UnknownChapter {
            chapter: spec.to_string(),
        })?;

        let stage = self
            .0
            .get(&address.chapter)
            .and_then(|chapter| chapter.get(&address.stage))
            .filter(|value| is_truthy(value))
            .ok_or_else(|| Error::UnknownChapter {
                chapter: address.to_string(),
            })?;

        let Some(difficulty) = difficulty else {
            return Ok(stage);
        };

        stage
            .get(difficulty)
            .filter(|value| is_truthy(value))
            .ok_or_else(|| Error::UnknownDifficulty {
                chapter: address.to_string(),
                difficulty: difficulty.to_string(),
            })
    }
}

/// JSON truthiness: null, false, zero and empty containers count as missing.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
