//! Pre-render normalization of the navigation tree.
//!
//! Sibling ordering and level propagation happen once when the tree is
//! built, so the render path only reads.

use super::NavEntry;

/// Normalize a forest of top-level entries.
pub fn normalize_tree(entries: &mut [NavEntry]) {
    entries.sort_by(|a, b| a.label.cmp(&b.label));
    for entry in entries.iter_mut() {
        normalize(entry);
    }
}

/// Sort children ascending by label and propagate `last_level`, recursively.
///
/// The sort is stable: entries with equal labels keep their input order.
/// Every direct child of a node with an expand control is marked
/// `last_level`, which indents it as the deepest tier.
pub fn normalize(entry: &mut NavEntry) {
    entry.items.sort_by(|a, b| a.label.cmp(&b.label));

    if entry.has_expand_button() {
        for child in &mut entry.items {
            child.last_level = true;
        }
    }

    for child in &mut entry.items {
        normalize(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(url: &str, label: &str) -> NavEntry {
        NavEntry {
            url: url.to_string(),
            title: Some(label.to_uppercase()),
            label: label.to_string(),
            ..Default::default()
        }
    }

    fn parent(label: &str, items: Vec<NavEntry>) -> NavEntry {
        NavEntry {
            url: format!("/docs/{label}"),
            title: Some(label.to_uppercase()),
            label: label.to_string(),
            items,
            ..Default::default()
        }
    }

    #[test]
    fn test_sorts_siblings_by_label() {
        let mut e = parent(
            "p",
            vec![child("/c", "c"), child("/a", "a"), child("/b", "b")],
        );
        normalize(&mut e);
        let labels: Vec<&str> = e.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn test_equal_labels_keep_input_order() {
        let mut e = parent(
            "p",
            vec![child("/first", "same"), child("/second", "same"), child("/a", "a")],
        );
        normalize(&mut e);
        let urls: Vec<&str> = e.items.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, ["/a", "/first", "/second"]);
    }

    #[test]
    fn test_expandable_parent_forces_last_level_on_children() {
        let mut e = parent("p", vec![child("/a", "a"), child("/b", "b")]);
        assert!(e.has_expand_button());
        normalize(&mut e);
        assert!(e.items.iter().all(|c| c.last_level));
    }

    #[test]
    fn test_top_level_parent_leaves_children_alone() {
        let mut e = parent("p", vec![child("/a", "a")]);
        e.top_level = true;
        normalize(&mut e);
        assert!(!e.items[0].last_level);
    }

    #[test]
    fn test_normalization_recurses() {
        let nested = parent("inner", vec![child("/z", "z"), child("/y", "y")]);
        let mut e = parent("outer", vec![nested]);
        e.top_level = true;
        normalize(&mut e);
        let inner = &e.items[0];
        let labels: Vec<&str> = inner.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["y", "z"]);
        assert!(inner.items.iter().all(|c| c.last_level));
    }

    #[test]
    fn test_forest_sorts_top_level_entries() {
        let mut forest = vec![parent("b", vec![]), parent("a", vec![])];
        normalize_tree(&mut forest);
        assert_eq!(forest[0].label, "a");
        assert_eq!(forest[1].label, "b");
    }
}
