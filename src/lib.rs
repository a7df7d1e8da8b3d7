pub mod config;
pub mod diff;
pub mod language;
pub mod logging;
pub mod render;
pub mod source;
pub mod theme;

pub use diff::{build_side_by_side_rows, compute_diff, compute_stats};
