//! The compact textual encoding of a cube state: one orientation symbol per location in
//! canonical order, e.g. `-f-f-f-f ---f-f-f---f -----f` for a single R turn.
//!
//! Whitespace is ignored when decoding and `-` stands for the identity. Encoding groups the
//! corners, edges and centers with single spaces.

use super::{CubeState, Location};
use crate::error::{EncodingError, Error};
use crate::orientation::Orientation;

use std::fmt::Write;
use std::str::FromStr;

impl CubeState {
    /// Decode a state from its textual encoding.
    pub fn parse(text: &str) -> Result<CubeState, Error> {
        let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != Location::COUNT {
            return Err(EncodingError::WrongLength {
                expected: Location::COUNT,
                found: symbols.len(),
            }
            .into());
        }

        let mut orientations = [Orientation::IDENTITY; Location::COUNT];
        for (index, (&symbol, o)) in symbols.iter().zip(&mut orientations).enumerate() {
            *o = Orientation::from_symbol(symbol)
                .ok_or(EncodingError::UnknownSymbol { symbol, index })?;
        }

        Ok(CubeState::from_orientations(orientations))
    }
}

impl FromStr for CubeState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CubeState::parse(s)
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, o) in self.orientations().iter().enumerate() {
            if i == Location::CORNERS.len() || i == Location::CORNERS.len() + Location::EDGES.len()
            {
                f.write_char(' ')?;
            }
            f.write_char(if o.is_identity() { '-' } else { o.symbol() })?;
        }
        Ok(())
    }
}
