use std::time::Duration;

use crate::error::EngineError;

pub const MIN_SPEED: u32 = 5;
pub const MAX_SPEED: u32 = 104;
pub const DEFAULT_SPEED: u32 = 55;
pub const MAX_SIZE: usize = 1000;
pub const DEFAULT_SIZE: usize = 50;

/// Inclusive bounds of generated values.
pub const VALUE_MIN: i64 = 5;
pub const VALUE_MAX: i64 = 204;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub size: usize,
    pub speed: u32,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            speed: DEFAULT_SPEED,
        }
    }
}

impl SortConfig {
    pub fn new(size: usize, speed: u32) -> Self {
        Self { size, speed }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        validate_size(self.size)?;
        validate_speed(self.speed)
    }

    /// Pause taken at every suspension point. Higher speed, shorter pause.
    pub fn delay(&self) -> Duration {
        let millis = (MAX_SPEED + 1).saturating_sub(self.speed);
        Duration::from_millis(u64::from(millis))
    }
}

pub fn validate_size(size: usize) -> Result<(), EngineError> {
    if size == 0 || size > MAX_SIZE {
        return Err(EngineError::InvalidSize {
            size,
            max: MAX_SIZE,
        });
    }
    Ok(())
}

pub fn validate_speed(speed: u32) -> Result<(), EngineError> {
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(EngineError::InvalidSpeed {
            speed,
            min: MIN_SPEED,
            max: MAX_SPEED,
        });
    }
    Ok(())
}
