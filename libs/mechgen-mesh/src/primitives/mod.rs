//! # Primitives
//!
//! Closed, consistently wound primitive solids used by the wheel parts.
//! Both are centered on the origin with Z as their axis.

pub mod cylinder;
pub mod torus;

pub use cylinder::cylinder;
pub use torus::torus;
