//! Copy-on-write facet selection set.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Set of selected facet values.
///
/// The backing set is shared between clones and copied only when a shared
/// selection is modified, so a cloned criteria snapshot does not
/// observe later toggles.
///
/// An empty selection is a **wildcard**: [`Selection::admits`] accepts every value.
#[derive(Debug, Clone)]
pub struct Selection<T> {
    items: Arc<HashSet<T>>,
}

impl<T> Selection<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            items: Arc::new(HashSet::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.contains(value)
    }

    /// Wildcard-aware membership: empty selection admits everything.
    pub fn admits<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.is_empty() || self.items.contains(value)
    }

    /// Returns a new selection with `item` added if absent, removed if present.
    /// `self` is left untouched.
    pub fn toggled(&self, item: T) -> Self {
        let mut next = self.clone();
        next.toggle(item);
        next
    }

    /// In-place toggle. Applying it twice with the same item is the identity.
    pub fn toggle(&mut self, item: T) {
        let items = Arc::make_mut(&mut self.items);
        if !items.remove(&item) {
            items.insert(item);
        }
    }

    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items = Arc::new(HashSet::new());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> Default for Selection<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Selection<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> Eq for Selection<T> where T: Eq + Hash {}

impl<T> FromIterator<T> for Selection<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Arc::new(iter.into_iter().collect()),
        }
    }
}

// Serialized as a sorted list so snapshots are deterministic.
impl<T> Serialize for Selection<T>
where
    T: Serialize + Ord + Eq + Hash,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut sorted: Vec<&T> = self.items.iter().collect();
        sorted.sort();
        serializer.collect_seq(sorted)
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_admits_everything() {
        let selection: Selection<String> = Selection::new();
        assert!(selection.admits("Цемент"));
        assert!(selection.admits(""));
        assert!(!selection.contains("Цемент"));
    }

    #[test]
    fn non_empty_selection_admits_members_only() {
        let selection: Selection<String> = ["Цемент".to_string()].into_iter().collect();
        assert!(selection.admits("Цемент"));
        assert!(!selection.admits("Кирпич"));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection: Selection<String> = Selection::new();
        selection.toggle("Кирпич".to_string());
        assert!(selection.contains("Кирпич"));
        selection.toggle("Кирпич".to_string());
        assert!(selection.is_empty());
    }

    #[test]
    fn toggled_leaves_original_untouched() {
        let original: Selection<String> = ["Доски".to_string()].into_iter().collect();
        let next = original.toggled("Краски".to_string());

        assert_eq!(original.len(), 1);
        assert_eq!(next.len(), 2);
        assert!(!original.contains("Краски"));
    }

    #[test]
    fn toggling_a_shared_clone_does_not_alias() {
        let mut a: Selection<String> = Selection::new();
        let snapshot = a.clone();
        a.toggle("Метизы".to_string());

        assert!(snapshot.is_empty());
        assert!(a.contains("Метизы"));
    }

    #[test]
    fn serializes_sorted() {
        let selection: Selection<String> =
            ["b".to_string(), "c".to_string(), "a".to_string()].into_iter().collect();
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"["a","b","c"]"#);

        let back: Selection<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selection);
    }
}
