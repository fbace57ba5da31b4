mod generic_path;
pub use generic_path::*;

/// Accumulated weighted travel cost.
pub type Cost = f64;
