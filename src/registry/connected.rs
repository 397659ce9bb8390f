use tracing::debug;

use super::uri::{ParsedUri, UriParser};

/// Registries that are already connected, stored in normalized form.
///
/// Every entry goes through [`ParsedUri::normalized`] on insertion so that
/// lookups compare like with like, whatever casing the source used.
/// Entries keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectedRegistries {
    entries: Vec<String>,
}

impl ConnectedRegistries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored strings, re-parsing each one with `parser`.
    ///
    /// Strings the parser rejects are kept lower-cased so they still block
    /// an identical candidate.
    pub fn from_strings<S: AsRef<str>>(
        parser: &dyn UriParser,
        entries: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut registries = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            match parser.parse(entry) {
                Ok(parsed) => {
                    registries.add(&parsed);
                }
                Err(e) => {
                    debug!("Keeping unparseable registry entry verbatim: {}", e);
                    registries.insert_normalized(entry.to_lowercase());
                }
            }
        }
        registries
    }

    /// Add a registry. Returns false if it was already present.
    pub fn add(&mut self, uri: &ParsedUri) -> bool {
        self.insert_normalized(uri.normalized())
    }

    fn insert_normalized(&mut self, normalized: String) -> bool {
        if self.contains_normalized(&normalized) {
            return false;
        }
        self.entries.push(normalized);
        true
    }

    /// Remove a registry. Returns false if it was not present.
    pub fn remove(&mut self, uri: &ParsedUri) -> bool {
        let normalized = uri.normalized();
        let before = self.entries.len();
        self.entries.retain(|entry| *entry != normalized);
        self.entries.len() != before
    }

    pub fn contains(&self, uri: &ParsedUri) -> bool {
        self.contains_normalized(&uri.normalized())
    }

    pub fn contains_normalized(&self, normalized: &str) -> bool {
        self.entries.iter().any(|entry| entry == normalized)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StandardUriParser;

    #[test]
    fn test_from_strings_normalizes_entries() {
        let registries = ConnectedRegistries::from_strings(
            &StandardUriParser,
            ["HTTPS://A.com", "https://b.com/Org/"],
        );
        assert_eq!(
            registries.iter().collect::<Vec<_>>(),
            vec!["https://a.com/", "https://b.com/org/"]
        );
    }

    #[test]
    fn test_from_strings_keeps_unparseable_entries() {
        let registries = ConnectedRegistries::from_strings(&StandardUriParser, ["HTTPS://"]);
        assert!(registries.contains_normalized("https://"));
    }

    #[test]
    fn test_from_strings_drops_duplicates() {
        let registries = ConnectedRegistries::from_strings(
            &StandardUriParser,
            ["https://a.com/", "HTTPS://A.COM"],
        );
        assert_eq!(registries.len(), 1);
    }

    #[test]
    fn test_contains_ignores_case() {
        let registries = ConnectedRegistries::from_strings(&StandardUriParser, ["https://a.com/"]);
        let candidate = StandardUriParser.parse("https://A.com/").unwrap();
        assert!(registries.contains(&candidate));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut registries = ConnectedRegistries::from_strings(
            &StandardUriParser,
            ["https://zeta.example.com/", "https://alpha.example.com/"],
        );
        let middle = StandardUriParser.parse("https://mid.example.com").unwrap();
        registries.add(&middle);

        assert_eq!(
            registries.into_vec(),
            vec![
                "https://zeta.example.com/".to_string(),
                "https://alpha.example.com/".to_string(),
                "https://mid.example.com/".to_string(),
            ]
        );
    }

    #[test]
    fn test_add_and_remove() {
        let mut registries = ConnectedRegistries::new();
        let uri = StandardUriParser.parse("https://registry.example.com").unwrap();

        assert!(registries.add(&uri));
        assert!(!registries.add(&uri));
        assert_eq!(registries.len(), 1);

        assert!(registries.remove(&uri));
        assert!(!registries.remove(&uri));
        assert!(registries.is_empty());
    }
}
