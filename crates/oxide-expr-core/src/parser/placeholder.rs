//! Placeholder position assignment for a single parse.

use std::collections::HashMap;

/// Maps placeholder keys to positions in order of first appearance.
///
/// Named (`:name`) and numbered (`:3`) placeholders use their text as the
/// key. The n-th anonymous `?` uses the decimal string `n`, so every `?` is
/// distinct. All forms share one key space.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderMap {
    positions: HashMap<String, usize>,
    keys: Vec<String>,
    anonymous: usize,
}

impl PlaceholderMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the next anonymous `?` placeholder.
    pub fn anonymous(&mut self) -> usize {
        let key = self.anonymous.to_string();
        self.anonymous += 1;
        self.resolve(&key)
    }

    /// Resolves a named or numbered placeholder key, assigning the next free
    /// position on first sight.
    pub fn resolve(&mut self, key: &str) -> usize {
        if let Some(&position) = self.positions.get(key) {
            return position;
        }
        let position = self.keys.len();
        self.positions.insert(String::from(key), position);
        self.keys.push(String::from(key));
        position
    }

    /// Returns the position assigned to `key`, if it was seen.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Returns the number of positions in use.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no placeholder was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns how many `?` placeholders were consumed.
    #[must_use]
    pub const fn anonymous_count(&self) -> usize {
        self.anonymous
    }

    /// Iterates over `(key, position)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.keys
            .iter()
            .enumerate()
            .map(|(position, key)| (key.as_str(), position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_order() {
        let mut map = PlaceholderMap::new();
        assert_eq!(map.resolve("1"), 0);
        assert_eq!(map.resolve("3"), 1);
        assert_eq!(map.resolve("2"), 2);
        assert_eq!(map.resolve("2"), 2);
        assert_eq!(map.resolve("1"), 0);
        assert_eq!(map.len(), 3);
        assert_eq!(map.anonymous_count(), 0);
    }

    #[test]
    fn test_anonymous_are_distinct() {
        let mut map = PlaceholderMap::new();
        assert_eq!(map.anonymous(), 0);
        assert_eq!(map.anonymous(), 1);
        assert_eq!(map.anonymous(), 2);
        assert_eq!(map.position("2"), Some(2));
        assert_eq!(map.anonymous_count(), 3);
    }

    #[test]
    fn test_mixed_forms_share_keys() {
        let mut map = PlaceholderMap::new();
        assert_eq!(map.resolve("name"), 0);
        assert_eq!(map.anonymous(), 1);
        assert_eq!(map.resolve("0"), 1);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_iter_in_position_order() {
        let mut map = PlaceholderMap::new();
        assert!(map.is_empty());
        map.resolve("b");
        map.resolve("a");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("b", 0), ("a", 1)]);
        assert_eq!(map.position("c"), None);
    }
}
