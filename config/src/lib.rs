//! # Config Crate
//!
//! Centralized configuration constants for the Platonic solid pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_SCALE, SCALE_MIN, SCALE_MAX};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1.0e-8; // smaller than EPSILON_TOLERANCE (1e-6)
//! let is_zero = value.abs() < EPSILON_TOLERANCE;
//! assert!(is_zero);
//!
//! // Clamp a requested scale into the conventional range
//! let requested = 42.0_f64;
//! let scale = requested.clamp(SCALE_MIN, SCALE_MAX);
//! assert_eq!(scale, SCALE_MAX);
//! assert!(DEFAULT_SCALE >= SCALE_MIN);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
