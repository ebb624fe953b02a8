//! Command implementations for fixcase-cli

pub mod fix;
pub mod report;

pub use fix::{run_fix_filesystem, run_fix_index};
pub use report::run_report;
