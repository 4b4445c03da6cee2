use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::language::{Language, Names};

/// Width ship ids are zero-padded to.
pub const SHIP_ID_WIDTH: usize = 3;

/// A ship record. Stats and other fields pass through untouched in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: String,
    #[serde(default)]
    pub names: Names,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Ship {
    pub fn has_name_in(&self, language: Language) -> bool {
        self.names.has(language)
    }

    /// Name used when listing ships; falls back to the id.
    pub fn display_name(&self) -> &str {
        self.names.display_name().unwrap_or(&self.id)
    }
}

/// Left-pad a ship id with zeros so `"5"` and `"005"` compare equal.
pub fn normalize_ship_id(id: &str) -> String {
    format!("{:0>width$}", id.trim(), width = SHIP_ID_WIDTH)
}
