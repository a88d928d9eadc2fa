//! Selected-tag set for filtered listings.

use std::collections::BTreeSet;

/// Tags currently selected as listing filters.
///
/// Iteration is sorted so that the generated query string is stable for a
/// given selection. This order is only used for requests; the tag table
/// renders tags in the order the server lists them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagFilterSet {
    selected: BTreeSet<String>,
}

impl TagFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `tag` if absent, deselect it if present.
    ///
    /// Returns `true` if the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.selected.remove(tag) {
            false
        } else {
            self.selected.insert(tag.to_string());
            true
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for TagFilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selected: iter
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut tags = TagFilterSet::new();
        assert!(tags.toggle("rnaseq"));
        assert!(tags.is_selected("rnaseq"));
        assert!(!tags.toggle("rnaseq"));
        assert!(!tags.is_selected("rnaseq"));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let original: TagFilterSet = ["genome", "rnaseq"].into_iter().collect();
        for tag in ["rnaseq", "chipseq", ""] {
            let mut tags = original.clone();
            tags.toggle(tag);
            tags.toggle(tag);
            assert_eq!(tags, original);
        }
    }

    #[test]
    fn test_iteration_is_sorted_and_deduplicated() {
        let tags: TagFilterSet = ["b", "a", "b", ""].into_iter().collect();
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(tags.len(), 2);
    }
}
