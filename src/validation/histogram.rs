/*!
 * Ordered frequency counts.
 *
 * Entries are sorted by count, highest first. Equal counts keep the order
 * in which their keys were first seen.
 */

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Frequency table ordered by descending count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    entries: Vec<(String, usize)>,
}

impl Histogram {
    /// Count occurrences of each key
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String> + AsRef<str>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for key in keys {
            match positions.get(key.as_ref()) {
                Some(&index) => entries[index].1 += 1,
                None => {
                    let key: String = key.into();
                    positions.insert(key.clone(), entries.len());
                    entries.push((key, 1));
                }
            }
        }

        // Stable: ties stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        Self { entries }
    }

    /// The `limit` most frequent entries
    pub fn top(&self, limit: usize) -> Self {
        Self {
            entries: self.entries.iter().take(limit).cloned().collect(),
        }
    }

    /// Only entries whose count satisfies `keep`
    pub fn filter_counts(&self, keep: impl Fn(usize) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, count)| keep(*count))
                .cloned()
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
