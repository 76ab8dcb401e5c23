//! Caller-supplied settings for sweeps and demonstrations.

use std::path::PathBuf;

use crate::cs::combinatorial::large_gap::builder::CodeBuilder;
use crate::cs::combinatorial::large_gap::params::ShapeParameters;
use crate::cs::combinatorial::large_gap::sweep::WidthRange;
use crate::cs::error::{Error, Result};

/// Widest code the canonical table covers.
pub const MAX_SUPPORTED_WIDTH: usize = 24;

/// Widest code any builder accepts. A 28-bit code alone occupies about 940 MB.
pub const WIDTH_CEILING: usize = 28;

/// Lower end of the default statistics sweep.
pub const DEFAULT_MIN_WIDTH: usize = 3;

/// Upper end of the default statistics sweep.
pub const DEFAULT_MAX_WIDTH: usize = 20;

/// Four ways to build a 16-bit code, from nearly balanced halves to a 2-bit high part.
pub const DEFAULT_PARAMETER_SETS: [ShapeParameters; 4] = [
    ShapeParameters::new(14, 2, 3, 1),
    ShapeParameters::new(8, 8, 129, 127),
    ShapeParameters::new(9, 7, 65, 63),
    ShapeParameters::new(11, 5, 21, 11),
];

/// Settings for a statistics report and the codes it prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LggcConfig {
    /// First width of the statistics sweep
    pub min_width: usize,
    /// Last width of the statistics sweep
    pub max_width: usize,
    /// Widest code builders may produce
    pub max_supported_width: usize,
    /// Tuples to build and measure
    pub parameter_sets: Vec<ShapeParameters>,
    /// Canonical width measured after the tuples, for comparison
    pub comparison_width: Option<usize>,
    /// Width of the code printed in full
    pub show_width: usize,
    /// Directory for rendered code files, nothing is written when unset
    pub output_dir: Option<PathBuf>,
}

impl Default for LggcConfig {
    fn default() -> Self {
        LggcConfig {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            max_supported_width: MAX_SUPPORTED_WIDTH,
            parameter_sets: DEFAULT_PARAMETER_SETS.to_vec(),
            comparison_width: Some(13),
            show_width: 7,
            output_dir: None,
        }
    }
}

impl LggcConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width_range(mut self, min_width: usize, max_width: usize) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    pub fn with_max_supported_width(mut self, max_supported_width: usize) -> Self {
        self.max_supported_width = max_supported_width;
        self
    }

    pub fn with_parameter_sets(mut self, parameter_sets: Vec<ShapeParameters>) -> Self {
        self.parameter_sets = parameter_sets;
        self
    }

    pub fn with_comparison_width(mut self, comparison_width: Option<usize>) -> Self {
        self.comparison_width = comparison_width;
        self
    }

    pub fn with_show_width(mut self, show_width: usize) -> Self {
        self.show_width = show_width;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// The sweep range, checked against the supported widths.
    pub fn width_range(&self) -> Result<WidthRange> {
        WidthRange::new(self.min_width, self.max_width, self.max_supported_width)
    }

    /// A builder limited to the configured maximum width.
    pub fn builder(&self) -> Result<CodeBuilder> {
        CodeBuilder::with_max_width(self.max_supported_width)
    }

    /// Checks every width and tuple in the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_supported_width == 0 || self.max_supported_width > WIDTH_CEILING {
            return Err(Error::unsupported_width(
                self.max_supported_width,
                WIDTH_CEILING,
            ));
        }
        self.width_range()?;
        for params in &self.parameter_sets {
            params.validate(self.max_supported_width)?;
        }
        for width in self.comparison_width.into_iter().chain([self.show_width]) {
            if width == 0 || width > self.max_supported_width {
                return Err(Error::unsupported_width(width, self.max_supported_width));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LggcConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width_range().unwrap().len(), 18);
        assert_eq!(config.parameter_sets.len(), 4);
        assert!(config.parameter_sets.iter().all(|p| p.width() == 16));
    }

    #[test]
    fn test_setters() {
        let config = LggcConfig::new()
            .with_width_range(4, 9)
            .with_parameter_sets(vec![ShapeParameters::new(3, 2, 3, 1)])
            .with_comparison_width(None)
            .with_show_width(5)
            .with_output_dir("out");
        assert_eq!((config.min_width, config.max_width), (4, 9));
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let config = LggcConfig::new().with_width_range(10, 4);
        assert!(matches!(config.validate(), Err(Error::InvalidRange { .. })));

        let config = LggcConfig::new().with_show_width(0);
        assert!(matches!(config.validate(), Err(Error::InvalidWidth { .. })));

        let config = LggcConfig::new().with_max_supported_width(12);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidWidth { .. }) | Err(Error::InvalidParameters { .. })
        ));

        let config = LggcConfig::new().with_max_supported_width(64);
        assert!(matches!(config.validate(), Err(Error::InvalidWidth { .. })));
    }
}
