//! Centralized configuration values shared across the Platonic solid pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance used when comparing vertex coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE <= 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-6;

/// Default uniform scale applied to a generated solid.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SCALE;
/// assert_eq!(DEFAULT_SCALE, 1.0);
/// ```
pub const DEFAULT_SCALE: f64 = 1.0;

/// Smallest uniform scale a wrapper layer should offer.
///
/// # Examples
/// ```
/// use config::constants::{SCALE_MIN, SCALE_MAX};
/// assert!(SCALE_MIN > 0.0 && SCALE_MIN < SCALE_MAX);
/// ```
pub const SCALE_MIN: f64 = 0.1;

/// Largest uniform scale a wrapper layer should offer.
///
/// # Examples
/// ```
/// use config::constants::SCALE_MAX;
/// assert_eq!(SCALE_MAX, 10.0);
/// ```
pub const SCALE_MAX: f64 = 10.0;

/// Default flat color for new solids, as RGBA channels in [0, 1].
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_COLOR;
/// assert!(DEFAULT_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
/// ```
pub const DEFAULT_COLOR: [f64; 4] = [0.8, 0.8, 0.8, 1.0];

/// Distance between neighboring placements in the all-solids template row.
///
/// At unit scale the largest circumradius among the five solids is below 2.0,
/// so this spacing keeps every pair of bounding boxes disjoint.
///
/// # Examples
/// ```
/// use config::constants::TEMPLATE_SPACING;
/// assert!(TEMPLATE_SPACING >= 4.0);
/// ```
pub const TEMPLATE_SPACING: f64 = 4.0;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry comparisons.
    pub tolerance: f64,
    /// Distance between neighboring template placements.
    pub template_spacing: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and template spacing.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 5.0).expect("valid config");
    /// assert_eq!(cfg.template_spacing, 5.0);
    /// ```
    pub fn new(tolerance: f64, template_spacing: f64) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if template_spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing(template_spacing));
        }
        Ok(Self {
            tolerance,
            template_spacing,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            template_spacing: TEMPLATE_SPACING,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero or negative.
    InvalidTolerance(f64),
    /// Raised when the template spacing would stack solids on one spot.
    InvalidSpacing(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSpacing(value) => {
                write!(f, "template_spacing must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
