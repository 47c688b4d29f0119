//! This module defines general error types used throughout the crate.

use thiserror::Error;

use crate::cube333::Location;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Reason a textual state encoding was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The encoding did not contain exactly one symbol per location.
    #[error("expected {expected} orientation symbols, found {found}")]
    WrongLength {
        /// Number of locations on the puzzle.
        expected: usize,
        /// Number of symbols found after removing whitespace.
        found: usize,
    },
    /// A character is not the symbol of any orientation.
    #[error("unknown orientation symbol {symbol:?} at position {index}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Its index among the non-whitespace characters.
        index: usize,
    },
}

/// Errors produced by the cube state algebra and the algorithm registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A textual state encoding could not be decoded.
    #[error("invalid state encoding: {0}")]
    InvalidEncoding(#[from] EncodingError),
    /// An algorithm token is neither a move nor a named algorithm.
    #[error("unknown step {0:?}")]
    UnknownStep(String),
    /// An algorithm string has neither a `c:` nor an `a:` prefix.
    #[error("invalid algorithm format {0:?}, expected a \"c:\" or \"a:\" prefix")]
    InvalidAlgorithmFormat(String),
    /// Two pieces resolved to the same location.
    ///
    /// This means the state is malformed, either because it was decoded from a bad encoding or
    /// because move composition is broken.
    #[error("state corruption: two pieces resolve to location {location:?}")]
    StateCorruption {
        /// The location claimed twice.
        location: Location,
    },
    /// A registry name is already taken by a move or an algorithm.
    #[error("{0:?} is already defined")]
    DuplicateName(String),
}
