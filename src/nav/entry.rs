//! Navigation tree data model.

use serde::{Deserialize, Serialize};

/// One node of the navigation tree: a page, or a grouping with children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavEntry {
    /// Target page path. `"/"` marks a redirect/index placeholder that never
    /// renders in the tree.
    pub url: String,

    /// Display string; an absent or empty title suppresses the link region.
    pub title: Option<String>,

    /// Collapse-map key. Must be unique among siblings at minimum.
    pub label: String,

    /// Child entries; empty for leaves. Missing in the manifest reads as empty.
    pub items: Vec<NavEntry>,

    /// Reading-time badge text, e.g. "5 min".
    pub duration: Option<String>,

    /// Renders the fixed "Experimental" badge.
    pub experimental: bool,

    /// Styled as a top section heading.
    pub top_level: bool,

    /// Fixed link styled as an uppercase label instead of a collapsible
    /// section.
    pub static_link: bool,

    /// Deepest visually indented tier. Forced onto every direct child of a
    /// node that carries an expand control.
    pub last_level: bool,

    /// Extra class appended to the computed class list.
    pub class_name: Option<String>,
}

impl NavEntry {
    /// Whether this node carries its own expand/collapse control: it needs a
    /// title to attach the control to, children to hide, and must be neither
    /// a static link nor a top section heading.
    pub fn has_expand_button(&self) -> bool {
        self.has_title() && !self.items.is_empty() && !self.static_link && !self.top_level
    }

    /// Non-empty title check; empty strings count as absent.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|title| !title.is_empty())
    }
}

/// Sidebar-wide rendering configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarConfig {
    /// Paths whose entries render their children but never a link region.
    pub hidden_link_paths: Vec<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            hidden_link_paths: vec!["/01-getting-started/04-example".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: Option<&str>, children: usize) -> NavEntry {
        NavEntry {
            url: "/docs/a".to_string(),
            title: title.map(str::to_string),
            label: "a".to_string(),
            items: vec![NavEntry::default(); children],
            ..Default::default()
        }
    }

    #[test]
    fn test_expand_button_requires_title_and_children() {
        assert!(entry(Some("A"), 1).has_expand_button());
        assert!(!entry(Some("A"), 0).has_expand_button());
        assert!(!entry(None, 1).has_expand_button());
        assert!(!entry(Some(""), 1).has_expand_button());
    }

    #[test]
    fn test_expand_button_excludes_static_and_top_level() {
        let mut e = entry(Some("A"), 1);
        e.static_link = true;
        assert!(!e.has_expand_button());

        let mut e = entry(Some("A"), 1);
        e.top_level = true;
        assert!(!e.has_expand_button());
    }

    #[test]
    fn test_manifest_defaults() {
        let e: NavEntry = serde_json::from_str(r#"{"url": "/docs/a", "label": "a"}"#).unwrap();
        assert_eq!(e.url, "/docs/a");
        assert!(e.items.is_empty());
        assert!(e.title.is_none());
        assert!(!e.experimental);
        assert!(!e.last_level);
    }

    #[test]
    fn test_manifest_camel_case_fields() {
        let e: NavEntry = serde_json::from_str(
            r#"{"url": "/x", "label": "x", "topLevel": true, "staticLink": true, "className": "extra"}"#,
        )
        .unwrap();
        assert!(e.top_level);
        assert!(e.static_link);
        assert_eq!(e.class_name.as_deref(), Some("extra"));
    }
}
