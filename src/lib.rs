extern crate direction;
extern crate grid_2d;
#[macro_use]
extern crate log;
extern crate num_traits;
#[cfg(feature = "serialize")]
extern crate serde;

mod astar;
mod config;
pub mod console;
mod error;
mod metadata;
mod path;
pub mod queens;
mod search;

pub use astar::*;
pub use config::*;
pub use error::*;
pub use metadata::*;
pub use path::PathWalk;
pub use search::{SearchContext, MAX_DIMENSION};

pub use direction::{CardinalDirection, Direction};
pub use grid_2d::{Coord, Size};

#[cfg(test)]
mod tests;
