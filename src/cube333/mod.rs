//! The 3x3x3 cube. Every piece, centers included, is tracked by the rotation that carries it
//! from its home location to where it is now.

mod encoding;
pub mod heuristic;
mod location;
pub mod moves;
pub mod registry;
mod state;

pub use location::{Color, Location, PieceKind};
pub use state::CubeState;
