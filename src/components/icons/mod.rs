pub mod arrow_down;
pub mod arrow_right;

pub use arrow_down::ArrowDown;
pub use arrow_right::ArrowRight;
