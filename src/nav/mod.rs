pub mod entry;
pub mod manifest;
pub mod normalize;

pub use entry::{NavEntry, SidebarConfig};
pub use manifest::{from_json, NavError, NavResult};
pub use normalize::{normalize, normalize_tree};
