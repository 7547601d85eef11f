use std::time::Duration;

use super::LifeError;

pub const DEFAULT_GRID_SIZE: usize = 45;
pub const DEFAULT_PROBABILITY: f64 = 0.3;
pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Startup configuration for a simulation run.
/// Fixed for the lifetime of the process.
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Chance that each cell starts alive
    pub probability: f64,
    /// Side of one rendered cell in pixels
    pub cell_size: f32,
    /// Time between generations
    pub frame_interval: Duration,
    /// Seed for reproducible initial grids; `None` draws from the thread RNG
    pub seed: Option<u64>,
    /// Advance generations with the row-parallel engine
    pub parallel: bool,
}

impl LifeConfig {
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the presentation settings. Grid dimensions and probability
    /// are validated by the grid engine itself.
    pub fn validate(&self) -> Result<(), LifeError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(LifeError::InvalidConfig("cell size must be positive"));
        }
        if self.frame_interval.is_zero() {
            return Err(LifeError::InvalidConfig("frame interval must be non-zero"));
        }
        Ok(())
    }

    /// Window size in pixels: exactly one cell square per grid cell
    pub fn window_size(&self) -> (i32, i32) {
        (
            (self.width as f32 * self.cell_size) as i32,
            (self.height as f32 * self.cell_size) as i32,
        )
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            probability: DEFAULT_PROBABILITY,
            cell_size: DEFAULT_CELL_SIZE,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            seed: None,
            parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LifeConfig::default();
        assert_eq!((config.width, config.height), (45, 45));
        assert_eq!(config.probability, 0.3);
        assert_eq!(config.frame_interval, Duration::from_millis(100));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_size() {
        let config = LifeConfig::default().with_dimensions(30, 10);
        assert_eq!(config.window_size(), (600, 200));
    }

    #[test]
    fn test_rejects_bad_presentation_values() {
        let mut config = LifeConfig::default();
        config.cell_size = 0.0;
        assert!(matches!(config.validate(), Err(LifeError::InvalidConfig(_))));

        let config = LifeConfig::default().with_frame_interval(Duration::ZERO);
        assert!(matches!(config.validate(), Err(LifeError::InvalidConfig(_))));
    }
}
