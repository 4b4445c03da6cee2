use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Memory descriptors keyed by memory name, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memories(pub Map<String, Value>);

impl Memories {
    /// Case-insensitive lookup by memory name; the first key in document
    /// order wins.
    pub fn get(&self, name: &str) -> Option<(&str, &Value)> {
        let needle = name.to_lowercase();
        self.0
            .iter()
            .find(|(key, _)| key.to_lowercase() == needle)
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
