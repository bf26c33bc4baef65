// FrequencyTable — token counts in display order.
//
// Entries are ordered by descending count. Ties keep the order in which the
// tokens first appeared in the source sequence, so the same input always
// yields the same table.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry<T> {
    pub value: T,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable<T> {
    entries: Vec<FrequencyEntry<T>>,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    /// Count the tokens of an ordered sequence.
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        // Position of each distinct token in first-occurrence order
        let mut index: HashMap<&T, usize> = HashMap::new();
        let mut entries: Vec<FrequencyEntry<T>> = Vec::new();

        for token in tokens {
            match index.get(token) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(token, entries.len());
                    entries.push(FrequencyEntry {
                        value: token.clone(),
                        count: 1,
                    });
                }
            }
        }

        // sort_by is stable: equal counts keep first-occurrence order
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        Self { entries }
    }
}

impl<T> FrequencyTable<T> {
    pub fn entries(&self) -> &[FrequencyEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry<T>> {
        self.entries.iter()
    }

    /// The `n` most frequent entries.
    pub fn top(&self, n: usize) -> &[FrequencyEntry<T>] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the source sequence.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Count for a single token, zero if absent.
    pub fn count_of<Q>(&self, value: &Q) -> usize
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries
            .iter()
            .find(|e| e.value == *value)
            .map_or(0, |e| e.count)
    }
}

impl<T> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a FrequencyTable<T> {
    type Item = &'a FrequencyEntry<T>;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(tokens: &[&str]) -> FrequencyTable<String> {
        let owned: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        FrequencyTable::from_tokens(&owned)
    }

    fn values(t: &FrequencyTable<String>) -> Vec<(&str, usize)> {
        t.iter().map(|e| (e.value.as_str(), e.count)).collect()
    }

    #[test]
    fn test_descending_count() {
        let t = table(&["a", "b", "b", "c", "b", "c"]);
        assert_eq!(values(&t), vec![("b", 3), ("c", 2), ("a", 1)]);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let t = table(&["z", "y", "x", "y", "z", "x"]);
        assert_eq!(values(&t), vec![("z", 2), ("y", 2), ("x", 2)]);
    }

    #[test]
    fn test_total_matches_input_length() {
        let t = table(&["a", "b", "a", "a"]);
        assert_eq!(t.total(), 4);
        assert_eq!(t.len(), 2);
        assert_eq!(t.count_of("a"), 3);
        assert_eq!(t.count_of("missing"), 0);
    }

    #[test]
    fn test_top_is_clamped() {
        let t = table(&["a", "b"]);
        assert_eq!(t.top(5).len(), 2);
        assert_eq!(t.top(1)[0].value, "a");
        assert!(FrequencyTable::<String>::default().top(3).is_empty());
    }
}
