pub mod nav_link;
pub mod tree_node;

pub use nav_link::NavLink;
pub use tree_node::TreeNode;

use dioxus::prelude::*;

use crate::hooks::use_collapse_state;
use crate::nav::{normalize_tree, NavEntry, SidebarConfig};

/// Documentation sidebar: owns the collapse state, normalizes the entry tree
/// once per input, and renders the top-level navigation list.
#[component]
pub fn Sidebar(entries: Vec<NavEntry>, config: Option<SidebarConfig>) -> Element {
    let collapse_state = use_collapse_state();
    use_context_provider(|| collapse_state);
    use_context_provider(|| config.unwrap_or_default());

    let tree = use_memo(use_reactive!(|(entries,)| {
        let mut entries = entries.clone();
        normalize_tree(&mut entries);
        entries
    }));

    let tree_entries = tree();

    rsx! {
        aside { class: "sidebar",
            nav { class: "sidebar-nav", aria_label: "Documentation",
                ul { class: "sidebar-tree",
                    for (index, entry) in tree_entries.iter().enumerate() {
                        TreeNode { key: "{entry.url}-{index}", entry: entry.clone() }
                    }
                }
            }
        }
    }
}
