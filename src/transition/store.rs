use indexmap::IndexMap;

use crate::core::types::ElementId;

/// Last drawn state of each rendered element, keyed by element identity.
///
/// This is the only state carried from one update cycle to the next. Entries
/// of removed elements must be dropped with [`Self::set`]`(id, None)`,
/// [`Self::remove`] or [`Self::truncate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStateStore<V> {
    entries: IndexMap<ElementId, V>,
}

impl<V> Default for ElementStateStore<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> ElementStateStore<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, element: ElementId) -> Option<&V> {
        self.entries.get(&element)
    }

    /// Stores `value` for `element`, or forgets the element when `value` is
    /// `None`. Returns the state it replaced.
    pub fn set(&mut self, element: ElementId, value: Option<V>) -> Option<V> {
        match value {
            Some(value) => self.entries.insert(element, value),
            None => self.entries.shift_remove(&element),
        }
    }

    pub fn remove(&mut self, element: ElementId) -> Option<V> {
        self.entries.shift_remove(&element)
    }

    /// Forgets every element whose index is `len` or above.
    pub fn truncate(&mut self, len: usize) {
        self.entries.retain(|element, _| element.index() < len);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored element with the highest index.
    #[must_use]
    pub fn last(&self) -> Option<(ElementId, &V)> {
        self.entries
            .iter()
            .max_by_key(|(element, _)| **element)
            .map(|(element, value)| (*element, value))
    }

    /// Entries ordered by element index.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(ElementId, &V)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(element, value)| (*element, value))
            .collect();
        entries.sort_by_key(|(element, _)| *element);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(ElementId, V)> for ElementStateStore<V> {
    fn from_iter<I: IntoIterator<Item = (ElementId, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
