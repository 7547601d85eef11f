use std::time::Duration;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::domain::Grid;
use super::{LifeConfig, LifeError};

/// Simulation owns the current generation and decides when to advance it.
/// This is the application layer the window loop talks to once per frame.
pub struct Simulation {
    grid: Grid,
    generation: u64,
    update_timer: f32,
    frame_interval: Duration,
    parallel: bool,
}

impl Simulation {
    /// Build the initial random grid described by `config`
    pub fn from_config(config: &LifeConfig) -> Result<Self, LifeError> {
        config.validate()?;

        let empty = Grid::new(config.width, config.height)?;
        let grid = match config.seed {
            Some(seed) => empty.randomize(config.probability, &mut StdRng::seed_from_u64(seed))?,
            None => empty.randomize(config.probability, &mut rand::rng())?,
        };

        info!(
            "starting {}x{} grid with {} live cells (p = {}, seed = {:?})",
            config.width,
            config.height,
            grid.live_count(),
            config.probability,
            config.seed
        );

        Ok(Self::with_grid(grid, config.frame_interval).with_parallel(config.parallel))
    }

    /// Wrap an existing grid, starting at generation 0
    pub fn with_grid(grid: Grid, frame_interval: Duration) -> Self {
        Self {
            grid,
            generation: 0,
            update_timer: 0.0,
            frame_interval,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance exactly one generation, replacing the grid
    pub fn step(mut self) -> Self {
        self.grid = if self.parallel {
            self.grid.advance_parallel()
        } else {
            self.grid.advance()
        };
        self.generation += 1;
        debug!(
            "generation {}: {} live cells",
            self.generation,
            self.grid.live_count()
        );
        self
    }

    /// Update simulation by one frame.
    /// At most one generation is produced per call.
    pub fn tick(mut self, delta_time: f32) -> Self {
        self.update_timer += delta_time;

        if self.update_timer >= self.frame_interval.as_secs_f32() {
            self.update_timer = 0.0;
            return self.step();
        }

        self
    }
}
