use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A collection version number: any JSON number, or a dotted string such as
/// `"1.10.2"`.
///
/// Equality follows the ordering, so `2`, `"2"` and `"2.0"` are all equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionNumber {
    Number(Number),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Negative(i64),
    Numeric(u64),
    Text(String),
}

impl VersionNumber {
    fn segments(&self) -> Vec<Segment> {
        match self {
            VersionNumber::Number(n) => match (n.as_u64(), n.as_i64()) {
                (Some(n), _) => vec![Segment::Numeric(n)],
                (None, Some(n)) => vec![Segment::Negative(n)],
                // Floats compare as dotted versions, so 1.5 sits between 1.4 and 1.10.
                (None, None) => parse_segments(&n.to_string()),
            },
            VersionNumber::Text(text) => {
                parse_segments(text.trim().trim_start_matches(['v', 'V']))
            }
        }
    }
}

fn parse_segments(text: &str) -> Vec<Segment> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => (true, rest),
        _ => (false, text),
    };

    digits
        .split(['.', '-', '+'])
        .enumerate()
        .map(|(idx, part)| match part.parse::<u64>() {
            Ok(n) if negative && idx == 0 && n > 0 => match i64::try_from(n) {
                Ok(n) => Segment::Negative(-n),
                Err(_) => Segment::Negative(i64::MIN),
            },
            Ok(n) => Segment::Numeric(n),
            Err(_) => Segment::Text(part.to_string()),
        })
        .collect()
}

impl Ord for VersionNumber {
    /// Segment-wise comparison; missing trailing segments count as `0`.
    fn cmp(&self, other: &Self) -> Ordering {
        let (left, right) = (self.segments(), other.segments());
        let width = left.len().max(right.len());
        for idx in 0..width {
            let a = left.get(idx).cloned().unwrap_or(Segment::Numeric(0));
            let b = right.get(idx).cloned().unwrap_or(Segment::Numeric(0));
            match a.cmp(&b) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionNumber {}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionNumber::Number(n) => write!(f, "{}", n),
            VersionNumber::Text(text) => f.write_str(text),
        }
    }
}

/// Version metadata for one collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionVersion {
    #[serde(rename = "version-number")]
    pub version_number: VersionNumber,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Contents of `version-info.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub ships: CollectionVersion,
    pub equipments: CollectionVersion,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl VersionInfo {
    /// Compare against a newer descriptor, reporting which collections moved forward.
    pub fn compare(&self, remote: &VersionInfo) -> UpdateStatus {
        let ships = remote.ships.version_number > self.ships.version_number;
        let equipments = remote.equipments.version_number > self.equipments.version_number;
        if ships || equipments {
            UpdateStatus::Outdated { ships, equipments }
        } else {
            UpdateStatus::UpToDate
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ships Version: {} | Equipments Version: {}",
            self.ships.version_number, self.equipments.version_number
        )
    }
}

/// Outcome of a version check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateStatus {
    UpToDate,
    Outdated { ships: bool, equipments: bool },
}

impl UpdateStatus {
    pub fn is_outdated(&self) -> bool {
        matches!(self, UpdateStatus::Outdated { .. })
    }
}
