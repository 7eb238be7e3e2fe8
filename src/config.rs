//! Carousel configuration, loadable from TOML.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INTERVAL, DEFAULT_TIME_STEP};
use crate::error::{CarouselError, Result};

/// Edge of the carousel where the indicator is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DotPosition {
    Left,
    Right,
    Top,
    #[default]
    Bottom,
}

/// Animation family used for panel transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    #[default]
    Slide,
    Fade,
}

impl DotPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DotPosition::Left => "left",
            DotPosition::Right => "right",
            DotPosition::Top => "top",
            DotPosition::Bottom => "bottom",
        }
    }

    /// Markers run in a column along the left and right edges.
    pub fn is_vertical(&self) -> bool {
        matches!(self, DotPosition::Left | DotPosition::Right)
    }
}

impl EffectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::Slide => "slide",
            EffectType::Fade => "fade",
        }
    }
}

impl fmt::Display for DotPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accepted by [`crate::Carousel::new`].
///
/// Durations are stored in milliseconds so the TOML form stays flat:
///
/// ```toml
/// autoplay = true
/// effect = "fade"
/// dot_position = "right"
/// interval_ms = 3000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub dot_position: DotPosition,
    pub effect: EffectType,
    pub interval_ms: u64,
    pub time_step_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            dot_position: DotPosition::default(),
            effect: EffectType::default(),
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            time_step_ms: DEFAULT_TIME_STEP.as_millis() as u64,
        }
    }
}

impl CarouselConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CarouselError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Rejects timings that would make the autoplay timer degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(CarouselError::InvalidConfig("interval_ms must be greater than zero".into()));
        }
        if self.time_step_ms == 0 {
            return Err(CarouselError::InvalidConfig("time_step_ms must be greater than zero".into()));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn time_step(&self) -> Duration {
        Duration::from_millis(self.time_step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = CarouselConfig::from_toml_str("").unwrap();
        assert_eq!(config, CarouselConfig::default());
        assert!(!config.autoplay);
        assert_eq!(config.dot_position, DotPosition::Bottom);
        assert_eq!(config.effect, EffectType::Slide);
        assert_eq!(config.interval(), Duration::from_millis(5000));
        assert_eq!(config.time_step(), Duration::from_millis(10));
    }

    #[test]
    fn parses_every_option() {
        let config = CarouselConfig::from_toml_str(
            r#"
            autoplay = true
            dot_position = "left"
            effect = "fade"
            interval_ms = 3000
            time_step_ms = 20
            "#,
        )
        .unwrap();
        assert!(config.autoplay);
        assert_eq!(config.dot_position, DotPosition::Left);
        assert_eq!(config.effect, EffectType::Fade);
        assert_eq!(config.interval(), Duration::from_secs(3));
        assert_eq!(config.time_step(), Duration::from_millis(20));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = CarouselConfig::from_toml_str("interval_ms = 0").unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_effect() {
        let err = CarouselConfig::from_toml_str(r#"effect = "zoom""#).unwrap_err();
        assert!(matches!(err, CarouselError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CarouselConfig::load(Path::new("/nonexistent/carousel.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/carousel.toml"));
    }
}
