//! Documentation sidebar navigation tree.
//!
//! A recursive, collapsible sidebar for a documentation site. Entries come
//! from an embedded navigation manifest, siblings render in label order, and
//! per-label collapse state is owned by the sidebar container and shared with
//! every tree node through context.

pub mod components;
pub mod hooks;
pub mod nav;
pub mod pages;
pub mod url_generator;
