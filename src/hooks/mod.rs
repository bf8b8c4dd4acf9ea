pub mod use_collapse_state;

pub use use_collapse_state::{use_collapse_state, CollapseState};
