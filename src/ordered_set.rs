use std::collections::HashSet;

/// Insertion-ordered set of strings with O(1) membership.
#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    items: Vec<String>,
    index: HashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the item was already present.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.index.contains(&item) {
            return false;
        }
        self.index.insert(item.clone());
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains(item)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_first_insertion_order() {
        let mut set = OrderedSet::new();
        assert!(set.insert("md"));
        assert!(set.insert("hover"));
        assert!(!set.insert("md"));
        assert!(set.contains("hover"));
        assert!(!set.contains("focus"));
        assert_eq!(set.into_vec(), vec!["md", "hover"]);
    }

    #[test]
    fn collects_from_iterator() {
        let set: OrderedSet = ["a", "b", "a", "c"].into_iter().collect();
        assert!(set.contains("b"));
        assert_eq!(set.into_vec(), vec!["a", "b", "c"]);
    }
}
