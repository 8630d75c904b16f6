//! Ordered multi-index: a hash map from a key to an insertion-ordered list of
//! `(value, label)` entries, allowing duplicates under one key.
//!
//! A [`DirectedGraph`](super::directed::DirectedGraph) keeps two of these, one
//! per traversal direction. Unlabeled graphs use `L = ()`.

use hashbrown::HashMap;
use std::hash::Hash;

/// Key -> ordered sequence of `(value, label)` entries.
///
/// Entries under a key keep their insertion order and are never resorted.
/// Matching is by value equality (and label equality when a label filter is
/// supplied). A key whose sequence becomes empty is dropped.
#[derive(Clone, Debug)]
pub struct OrderedMultiIndex<K, V, L = ()> {
    mapping: HashMap<K, Vec<(V, L)>>,
}

impl<K, V, L> Default for OrderedMultiIndex<K, V, L> {
    fn default() -> Self {
        Self {
            mapping: HashMap::new(),
        }
    }
}

#[inline]
fn matches<V: PartialEq, L: PartialEq>(
    entry: &(V, L),
    value: Option<&V>,
    label: Option<&L>,
) -> bool {
    value.is_none_or(|v| *v == entry.0) && label.is_none_or(|l| *l == entry.1)
}

impl<K, V, L> OrderedMultiIndex<K, V, L>
where
    K: Eq + Hash,
    V: PartialEq,
    L: PartialEq,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries stored under `key`, in insertion order. Empty if the key is unknown.
    ///
    /// # Example
    /// ```rust
    /// use hash_digraph::store::multi_index::OrderedMultiIndex;
    /// let mut idx = OrderedMultiIndex::<u32, u32, char>::new();
    /// idx.add(1, 2, 'a');
    /// idx.add(1, 2, 'b');
    /// assert_eq!(idx.get(&1), &[(2, 'a'), (2, 'b')]);
    /// assert!(idx.get(&7).is_empty());
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> &[(V, L)] {
        self.mapping.get(key).map_or(&[], Vec::as_slice)
    }

    /// Appends `(value, label)` under `key`, creating the sequence on first use.
    pub fn add(&mut self, key: K, value: V, label: L) {
        self.mapping.entry(key).or_default().push((value, label));
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.mapping.contains_key(key)
    }

    /// With no filters, reports whether `key` is present. Otherwise reports
    /// whether some entry under `key` matches every filter that is supplied.
    pub fn has(&self, key: &K, value: Option<&V>, label: Option<&L>) -> bool {
        if value.is_none() && label.is_none() {
            return self.contains_key(key);
        }
        self.get(key).iter().any(|e| matches(e, value, label))
    }

    /// Removes the first entry under `key` equal to `value` (and `label`, if
    /// given), returning it. `None` when nothing matched.
    pub fn delete_one(&mut self, key: &K, value: &V, label: Option<&L>) -> Option<(V, L)> {
        let entries = self.mapping.get_mut(key)?;
        let pos = entries.iter().position(|e| matches(e, Some(value), label))?;
        let removed = entries.remove(pos);
        if entries.is_empty() {
            self.mapping.remove(key);
        }
        Some(removed)
    }

    /// Removes the whole sequence stored under `key` and hands it back.
    pub fn delete_key(&mut self, key: &K) -> Vec<(V, L)> {
        self.mapping.remove(key).unwrap_or_default()
    }

    /// Deletes entries and returns how many were removed.
    ///
    /// - `value` given: at most one matching entry is removed.
    /// - `value` omitted, `label` omitted: every entry under `key` is removed.
    /// - `value` omitted, `label` given: every entry under `key` carrying that
    ///   label is removed.
    pub fn delete(&mut self, key: &K, value: Option<&V>, label: Option<&L>) -> usize {
        match (value, label) {
            (Some(v), _) => usize::from(self.delete_one(key, v, label).is_some()),
            (None, None) => self.delete_key(key).len(),
            (None, Some(_)) => {
                let Some(entries) = self.mapping.get_mut(key) else {
                    return 0;
                };
                let before = entries.len();
                entries.retain(|e| !matches(e, None, label));
                let removed = before - entries.len();
                if entries.is_empty() {
                    self.mapping.remove(key);
                }
                removed
            }
        }
    }

    /// Keys that currently hold at least one entry (hash order).
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.mapping.keys()
    }

    /// Every `(key, value, label)` triple (keys in hash order, entries in
    /// insertion order).
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V, &L)> + '_ {
        self.mapping
            .iter()
            .flat_map(|(k, entries)| entries.iter().map(move |(v, l)| (k, v, l)))
    }

    /// Total number of entries across all keys. O(number of keys).
    pub fn len(&self) -> usize {
        self.mapping.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
