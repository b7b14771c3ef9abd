// config.rs - Front-end settings, loaded from environment variables

use std::str::FromStr;

use crate::error::ViewError;

/// Slowest run speed, in generations per second.
pub const MIN_STEPS_PER_SECOND: f32 = 0.5;
/// Fastest run speed, in generations per second.
pub const MAX_STEPS_PER_SECOND: f32 = 120.0;

/// Settings shared by the window and console front ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Logical world width in cells.
    pub width: usize,
    /// Logical world height in cells.
    pub height: usize,
    /// Cell types used by the random fill.
    pub types: u8,
    /// Generations per second while running.
    pub steps_per_second: f32,
    /// On-screen size of one cell in the window.
    pub cell_pixels: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            types: 2,
            steps_per_second: 30.0,
            cell_pixels: 3.0,
        }
    }
}

impl ViewConfig {
    /// Load settings from the process environment.
    ///
    /// Optional variables:
    /// - `LIFE_WIDTH` / `LIFE_HEIGHT` -- world size in cells (default 256)
    /// - `LIFE_TYPES` -- cell types for the random fill (default 2)
    /// - `LIFE_STEPS_PER_SECOND` -- generations per second while running,
    ///   0.5 to 120 (default 30)
    /// - `LIFE_CELL_PIXELS` -- on-screen cell size (default 3)
    pub fn from_env() -> Result<Self, ViewError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ViewError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            width: parse_or(&lookup, "LIFE_WIDTH", defaults.width)?,
            height: parse_or(&lookup, "LIFE_HEIGHT", defaults.height)?,
            types: parse_or(&lookup, "LIFE_TYPES", defaults.types)?,
            steps_per_second: parse_or(&lookup, "LIFE_STEPS_PER_SECOND", defaults.steps_per_second)?,
            cell_pixels: parse_or(&lookup, "LIFE_CELL_PIXELS", defaults.cell_pixels)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ViewError> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewError::Config(format!(
                "world size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.types == 0 {
            return Err(ViewError::Config("LIFE_TYPES must be at least 1".to_owned()));
        }
        if !(MIN_STEPS_PER_SECOND..=MAX_STEPS_PER_SECOND).contains(&self.steps_per_second) {
            return Err(ViewError::Config(format!(
                "LIFE_STEPS_PER_SECOND must be within {MIN_STEPS_PER_SECOND}..={MAX_STEPS_PER_SECOND}, got {}",
                self.steps_per_second
            )));
        }
        if !(self.cell_pixels >= 1.0) {
            return Err(ViewError::Config("LIFE_CELL_PIXELS must be at least 1".to_owned()));
        }
        Ok(())
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ViewError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ViewError::Config(format!("invalid {key}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ViewConfig, ViewError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        ViewConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), ViewConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[("LIFE_WIDTH", "64"), ("LIFE_HEIGHT", " 48 "), ("LIFE_TYPES", "3")]).unwrap();
        assert_eq!((config.width, config.height, config.types), (64, 48, 3));
    }

    #[test]
    fn rejects_malformed_and_degenerate_values() {
        assert!(matches!(load(&[("LIFE_WIDTH", "wide")]), Err(ViewError::Config(_))));
        assert!(matches!(load(&[("LIFE_HEIGHT", "0")]), Err(ViewError::Config(_))));
        assert!(matches!(load(&[("LIFE_TYPES", "0")]), Err(ViewError::Config(_))));
        assert!(matches!(load(&[("LIFE_STEPS_PER_SECOND", "-1")]), Err(ViewError::Config(_))));
    }

    #[test]
    fn step_rate_must_fit_the_speed_slider() {
        assert!(matches!(load(&[("LIFE_STEPS_PER_SECOND", "1e-39")]), Err(ViewError::Config(_))));
        assert!(matches!(load(&[("LIFE_STEPS_PER_SECOND", "0.1")]), Err(ViewError::Config(_))));
        assert!(matches!(load(&[("LIFE_STEPS_PER_SECOND", "200")]), Err(ViewError::Config(_))));
        assert!(matches!(load(&[("LIFE_STEPS_PER_SECOND", "NaN")]), Err(ViewError::Config(_))));

        let slowest = load(&[("LIFE_STEPS_PER_SECOND", "0.5")]).unwrap();
        assert_eq!(slowest.steps_per_second, MIN_STEPS_PER_SECOND);
        let fastest = load(&[("LIFE_STEPS_PER_SECOND", "120")]).unwrap();
        assert_eq!(fastest.steps_per_second, MAX_STEPS_PER_SECOND);
    }
}
