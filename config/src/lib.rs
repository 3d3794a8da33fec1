//! # Config Crate
//!
//! Centralized configuration constants for the gear and wheel generators.
//! Parameter ranges, fixed construction conventions, and the names shared
//! with the host scene are defined here so the mesh and scene crates never
//! carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GEAR_TEETH_DEFAULT, GEAR_TEETH_MAX, GEAR_TEETH_MIN};
//!
//! let requested = 250;
//! let teeth = requested.clamp(GEAR_TEETH_MIN, GEAR_TEETH_MAX);
//! assert_eq!(teeth, 100);
//! assert!((GEAR_TEETH_MIN..=GEAR_TEETH_MAX).contains(&GEAR_TEETH_DEFAULT));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Names and defaults match what the generators
//!   register with the host scene
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
