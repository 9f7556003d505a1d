use std::collections::{HashMap, hash_map};

use crate::value::Value;

/// A parsed `KEY=value` entry from a config file or input buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    pub value: Value,
    pub line: u32,
}

/// An immutable snapshot of a fully loaded configuration.
///
/// Created fresh per load call and fully populated before it is returned.
/// Key lookup order is irrelevant; when a key appeared on several lines,
/// the last occurrence is the one retained.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    entries: HashMap<String, Value>,
}

impl Config {
    pub(crate) fn new(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a string value; `None` when absent or a different type.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key)?.as_str()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.entries.get(key)?.as_bool()
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.entries.get(key)?.as_int()
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.entries.get(key)?.as_float()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.entries
    }
}

impl FromIterator<Entry> for Config {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect();
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Entry};
    use crate::value::Value;

    fn entry(key: &str, value: Value) -> Entry {
        Entry {
            key: key.to_owned(),
            value,
            line: 1,
        }
    }

    #[test]
    fn typed_getters_match_exact_variant_only() {
        let config: Config = [
            entry("NAME", Value::Str("app".to_owned())),
            entry("COUNT", Value::Int(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(config.get_str("NAME"), Some("app"));
        assert_eq!(config.get_int("COUNT"), Some(3));
        assert_eq!(config.get_float("COUNT"), None);
        assert_eq!(config.get_bool("MISSING"), None);
    }

    #[test]
    fn collecting_entries_keeps_the_last_duplicate() {
        let config: Config = [entry("A", Value::Int(1)), entry("A", Value::Int(2))]
            .into_iter()
            .collect();

        assert_eq!(config.len(), 1);
        assert_eq!(config.get_int("A"), Some(2));
    }

    #[test]
    fn iterates_over_every_entry() {
        let config: Config = [entry("A", Value::Int(1)), entry("B", Value::Bool(true))]
            .into_iter()
            .collect();

        let mut keys: Vec<&str> = (&config).into_iter().map(|(key, _)| key.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["A", "B"]);
    }
}
