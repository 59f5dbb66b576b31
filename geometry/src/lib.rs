#![deny(clippy::all)]

//! Grid mazes, and the search problems posed on them.

pub mod coord2d;

/// Data type used for coordinates
pub type Position = i32;
