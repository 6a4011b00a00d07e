pub mod atom;
pub mod audit;
pub mod batch;
pub mod connectivity;
pub mod error;
pub mod format;
pub mod formats;
pub mod output;
pub mod params;
pub mod structure;
pub mod substitution;
pub mod unit_cell;

pub use output::{print_gro_structure, print_structure};
