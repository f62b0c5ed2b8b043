//! Graham scan in two stages: [`prepare`] selects the pivot and sorts the other
//! points around it, [`graham_scan`] walks the sorted points with a stack.
pub mod graham_scan;
pub mod prepare;

pub use graham_scan::{convex_hull, scan_hull, GrahamScan};
pub use prepare::{center_on_pivot, prepare_and_sort, select_pivot, sort_by_angle, Prepared};
