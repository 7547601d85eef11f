mod cell;
mod error;
mod grid;
mod patterns;
mod rules;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use rules::apply_rule;
