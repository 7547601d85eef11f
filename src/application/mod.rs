mod config;
mod error;
mod simulation;

pub use config::{
    LifeConfig, DEFAULT_CELL_SIZE, DEFAULT_FRAME_INTERVAL, DEFAULT_GRID_SIZE, DEFAULT_PROBABILITY,
};
pub use error::LifeError;
pub use simulation::Simulation;
