use std::collections::HashMap;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Per-label collapse flags for the navigation tree.
///
/// Owned by the sidebar container and shared with every tree node through
/// context. Nodes only read flags and request toggles; they never hold their
/// own copy of the map.
#[derive(Clone, Copy)]
pub struct CollapseState {
    collapsed: Signal<HashMap<String, bool>>,
}

pub fn use_collapse_state() -> CollapseState {
    let collapsed = use_signal(HashMap::new);

    CollapseState { collapsed }
}

impl CollapseState {
    /// Whether the node with this label currently hides its children.
    /// Labels that were never toggled read as expanded.
    pub fn is_collapsed(&self, label: &str) -> bool {
        self.collapsed.read().get(label).copied().unwrap_or(false)
    }

    /// Flip the collapse flag for one label.
    pub fn toggle(&mut self, label: &str) {
        let mut collapsed = self.collapsed.write();
        let flag = collapsed.entry(label.to_string()).or_insert(false);
        *flag = !*flag;
        debug!(label, collapsed = *flag, "sidebar collapse toggled");
    }
}
