pub mod catalog;
pub mod error;
pub mod render;
pub mod solver;
pub mod summary;
pub mod types;
pub mod units;

pub use catalog::Catalog;
pub use error::{CatalogError, InputError};
pub use solver::{Solver, validate_target};
pub use types::{Piece, Solution, SummaryEntry};
pub use units::UnitScale;
