//! Faction alias table.
//!
//! Each group lists interchangeable short codes followed by the canonical
//! faction name used in ship `nationality` fields. Singleton groups use the
//! same string as alias and canonical name.

pub const FACTIONS: &[&[&str]] = &[
    &["USS", "Eagle Union"],
    &["HMS", "Royal Navy"],
    &["IJN", "Sakura Empire"],
    &["KMS", "Ironblood"],
    &["ROC", "Eastern Radiance"],
    &["SN", "North Union"],
    &["FFNF", "Iris Libre"],
    &["MNF", "Vichya Dominion"],
    &["RN", "Sardegna Empire"],
    &["HDN", "Neptunia"],
    &["Bilibili"],
    &["Utawarerumono"],
    &["KizunaAI"],
];

/// Resolve an alias or canonical name (case-insensitive) to the canonical name.
pub fn resolve_faction(alias: &str) -> Option<&'static str> {
    let needle = alias.to_lowercase();
    FACTIONS
        .iter()
        .find(|group| group.iter().any(|name| name.to_lowercase() == needle))
        .and_then(|group| group.last().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_codes_and_canonical_names() {
        assert_eq!(resolve_faction("USS"), Some("Eagle Union"));
        assert_eq!(resolve_faction("uss"), Some("Eagle Union"));
        assert_eq!(resolve_faction("eagle union"), Some("Eagle Union"));
        assert_eq!(resolve_faction("kizunaai"), Some("KizunaAI"));
    }

    #[test]
    fn unknown_alias_resolves_to_none() {
        assert_eq!(resolve_faction("Siren"), None);
        assert_eq!(resolve_faction(""), None);
        assert_eq!(resolve_faction(" USS "), None);
    }
}
