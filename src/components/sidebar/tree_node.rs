//! The recursive sidebar tree node.

use dioxus::prelude::*;

use crate::components::icons::{ArrowDown, ArrowRight};
use crate::hooks::CollapseState;
use crate::nav::{NavEntry, SidebarConfig};
use crate::url_generator;

use super::nav_link::NavLink;

/// Everything the markup needs for one node, decided up front from the entry
/// and the authoritative collapse flag. The component body is a thin layer
/// over this.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePresentation {
    /// Space-joined classes for the list item.
    pub class_list: String,
    /// Title text for the link region; empty when the region is suppressed.
    pub title: String,
    /// Whether the link region renders at all.
    pub shows_link: bool,
    /// Navigation target; `None` renders the title as a non-navigating label.
    pub link_target: Option<String>,
    /// Whether this node carries the expand/collapse control.
    pub has_expand_button: bool,
    /// Icon state class, `"open"` or `"close"`, derived from the collapse flag.
    pub icon_state: &'static str,
    /// Reading-time badge text, when present.
    pub duration_badge: Option<String>,
    /// Whether the fixed "Experimental" badge renders.
    pub experimental_badge: bool,
    /// Whether the nested child list renders.
    pub shows_children: bool,
}

impl NodePresentation {
    /// Compute the rendering decisions for one entry. Returns `None` for the
    /// `"/"` placeholder, which renders nothing at all, children included.
    pub fn of(entry: &NavEntry, is_collapsed: bool, config: &SidebarConfig) -> Option<Self> {
        if entry.url == "/" {
            return None;
        }

        let mut classes: Vec<&str> = Vec::new();
        if let Some(extra) = entry.class_name.as_deref() {
            if !extra.is_empty() {
                classes.push(extra);
            }
        }
        if entry.top_level {
            classes.push("top-level");
        }
        if entry.static_link {
            classes.push("static-link");
        }
        if entry.last_level {
            classes.push("last-level");
        }

        let shows_link = entry.has_title()
            && entry.label != "index"
            && !config.hidden_link_paths.iter().any(|path| path == &entry.url);

        // Paths with an `index` segment label a grouping page that has no
        // destination of its own.
        let link_target = if entry.url.split('/').any(|segment| segment == "index") {
            None
        } else {
            Some(url_generator::generate(&entry.url))
        };

        Some(Self {
            class_list: classes.join(" "),
            title: entry.title.clone().unwrap_or_default(),
            shows_link,
            link_target,
            has_expand_button: entry.has_expand_button(),
            icon_state: if is_collapsed { "close" } else { "open" },
            duration_badge: entry.duration.clone(),
            experimental_badge: entry.experimental,
            shows_children: !is_collapsed && !entry.items.is_empty(),
        })
    }
}

/// One navigation entry: a list item with an optional link region and, when
/// expanded, a nested list of child `TreeNode`s.
#[component]
pub fn TreeNode(entry: NavEntry) -> Element {
    let mut collapse_state = use_context::<CollapseState>();
    let config = use_context::<SidebarConfig>();

    let is_collapsed = collapse_state.is_collapsed(&entry.label);
    let Some(node) = NodePresentation::of(&entry, is_collapsed, &config) else {
        return rsx! {};
    };

    let label = entry.label.clone();
    let duration = node.duration_badge.clone().unwrap_or_default();

    rsx! {
        li { class: "{node.class_list}",
            if node.shows_link {
                NavLink { to: node.link_target.clone(),
                    if node.has_expand_button {
                        span {
                            class: "collapse-title",
                            onclick: move |_| collapse_state.toggle(&label),
                            button { class: "item-collapser", aria_label: "collapse",
                                ArrowRight { class: "right {node.icon_state}" }
                                ArrowDown { class: "down {node.icon_state}" }
                            }
                            "{node.title}"
                        }
                    } else {
                        span { "{node.title}" }
                    }
                    if !duration.is_empty() {
                        span { class: "tag", "{duration}" }
                    }
                    if node.experimental_badge {
                        span { class: "tag small", "Experimental" }
                    }
                }
            }
            if node.shows_children {
                ul { class: if node.has_expand_button { "has-border" } else { "" },
                    for (index, child) in entry.items.iter().enumerate() {
                        TreeNode { key: "{child.url}-{index}", entry: child.clone() }
                    }
                }
            }
        }
    }
}
