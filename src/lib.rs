//! A library which models the 3x3x3 cube as a group. Every piece is tracked by a rotation from
//! the 24 element rotation group of the cube, states are composed by multiplication, and named
//! moves and algorithms compile to states.

#![deny(missing_docs)]

pub mod cube333;
pub mod error;
pub mod moves;
pub mod orientation;
