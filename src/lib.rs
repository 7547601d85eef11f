// Domain layer - grid engine and rule
pub mod domain;

// Application layer - configuration and frame-paced simulation
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, presets, apply_rule};
pub use application::{LifeConfig, LifeError, Simulation};
