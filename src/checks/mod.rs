//! Line-level checks that do not need per-character context rules.

pub mod blank;
pub mod periods;

pub use blank::{BlankFinding, BlankRun, check_blanks};
pub use periods::check_periods;
