//! Moves of the 3x3x3: face turns, slice turns and whole cube rotations, each with a quarter
//! turn count.

use super::{Color, CubeState, Location};
use crate::error::Error;
use crate::moves::{Cancellation, MoveSequence};
use crate::orientation::{Generator, Orientation};

use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Represents each type of move. Note that the `Move333` struct uses this along with a counter
/// to represent moves such as R2 or U'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Move333Type {
    /// Right
    R,
    /// Left
    L,
    /// Up
    U,
    /// Down
    D,
    /// Front
    F,
    /// Back
    B,
    /// Middle slice, turning like L
    M,
    /// Equator slice, turning like D
    E,
    /// Standing slice, turning like F
    S,
    /// Whole cube rotation, turning like R (written `x`)
    X,
    /// Whole cube rotation, turning like U (written `y`)
    Y,
    /// Whole cube rotation, turning like F (written `z`)
    Z,
}

impl Move333Type {
    /// Every move type.
    pub const ARRAY: [Move333Type; 12] = {
        use Move333Type::*;
        [R, L, U, D, F, B, M, E, S, X, Y, Z]
    };

    /// The axis this move turns about.
    pub fn axis(self) -> Generator {
        use Move333Type as MT;
        match self {
            MT::R | MT::L | MT::M | MT::X => Generator::I,
            MT::U | MT::D | MT::E | MT::Y => Generator::J,
            MT::F | MT::B | MT::S | MT::Z => Generator::K,
        }
    }

    /// The rotation a clockwise quarter turn applies to every piece it moves. Clockwise is as
    /// seen from the face the move is named after, or the face it turns like.
    pub fn quarter_turn(self) -> Orientation {
        use Move333Type as MT;
        let g = self.axis().orientation();
        match self {
            // The generator axes point at the red, white and green centers.
            MT::L | MT::M | MT::D | MT::E | MT::B => g,
            MT::R | MT::X | MT::U | MT::Y | MT::F | MT::S | MT::Z => g.inverse(),
        }
    }

    /// Whether a piece solved at the location is in the layer(s) this move turns.
    pub fn turns(self, location: Location) -> bool {
        use Move333Type as MT;
        let has = |c| location.has_color(c);
        match self {
            MT::R => has(Color::Red),
            MT::L => has(Color::Orange),
            MT::U => has(Color::White),
            MT::D => has(Color::Yellow),
            MT::F => has(Color::Green),
            MT::B => has(Color::Blue),
            MT::M => !has(Color::Orange) && !has(Color::Red),
            MT::E => !has(Color::White) && !has(Color::Yellow),
            MT::S => !has(Color::Green) && !has(Color::Blue),
            MT::X | MT::Y | MT::Z => true,
        }
    }

    /// Whether this is a whole cube rotation rather than a move.
    pub fn is_rotation(self) -> bool {
        matches!(self, Move333Type::X | Move333Type::Y | Move333Type::Z)
    }

    /// The state of a single clockwise quarter turn.
    pub fn state(self) -> CubeState {
        CubeState::layer(self.quarter_turn(), |l| self.turns(l))
    }

    fn from_char(c: char) -> Option<Move333Type> {
        use Move333Type::*;
        Some(match c {
            'R' => R,
            'L' => L,
            'U' => U,
            'D' => D,
            'F' => F,
            'B' => B,
            'M' => M,
            'E' => E,
            'S' => S,
            'x' => X,
            'y' => Y,
            'z' => Z,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Move333Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move333Type::X => f.write_str("x"),
            Move333Type::Y => f.write_str("y"),
            Move333Type::Z => f.write_str("z"),
            ty => write!(f, "{ty:?}"),
        }
    }
}

/// Stores a move type and counter. An anti-clockwise move will have a count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub ty: Move333Type,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl Move333 {
    /// The state of this move applied to the solved cube.
    pub fn state(self) -> CubeState {
        self.ty.state().pow(self.count as u32)
    }
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: (4 - self.count % 4) % 4,
        }
    }

    // Any two rotations about the same axis commute, whichever layers they turn.
    fn commutes_with(&self, b: &Self) -> bool {
        self.ty.axis() == b.ty.axis()
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Move333 { ty: self.ty, count })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// I don't want to have the default derive debug for this!
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl std::fmt::Display for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.ty),
            3 => write!(f, "{}'", self.ty),
            _ => write!(f, "{}{}", self.ty, self.count),
        }
    }
}

impl FromStr for Move333 {
    type Err = Error;

    /// Parse a move written like `R`, `R'`, `R2` or `x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || Error::UnknownStep(s.to_owned());
        let mut chars = s.chars();
        let ty = chars
            .next()
            .and_then(Move333Type::from_char)
            .ok_or_else(unknown)?;
        let count = match chars.as_str() {
            "" => 1,
            "2" => 2,
            "'" => 3,
            _ => return Err(unknown()),
        };
        Ok(Move333 { ty, count })
    }
}

/// A trait to classify a type as a move generator: a set of moves that counts as one step each,
/// for example when fitting an [`Estimator`](super::heuristic::Estimator).
pub trait MoveGenerator {
    /// A list of all valid moves.
    const MOVE_LIST: &'static [Move333];
}

/// Create a move by specifying a move type and move count. Note that you do not need to specify
/// for example Move333Type::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $count: expr) => {
        $crate::cube333::moves::Move333 {
            ty: $crate::cube333::moves::Move333Type::$ty,
            count: $count,
        }
    };
}

/// Half Turn Metric with slice moves counted as single moves.
pub struct SliceHtm;

impl MoveGenerator for SliceHtm {
    const MOVE_LIST: &'static [Move333] = &[
        mv!(R, 1),
        mv!(L, 1),
        mv!(U, 1),
        mv!(D, 1),
        mv!(F, 1),
        mv!(B, 1),
        mv!(M, 1),
        mv!(E, 1),
        mv!(S, 1),
        mv!(R, 2),
        mv!(L, 2),
        mv!(U, 2),
        mv!(D, 2),
        mv!(F, 2),
        mv!(B, 2),
        mv!(M, 2),
        mv!(E, 2),
        mv!(S, 2),
        mv!(R, 3),
        mv!(L, 3),
        mv!(U, 3),
        mv!(D, 3),
        mv!(F, 3),
        mv!(B, 3),
        mv!(M, 3),
        mv!(E, 3),
        mv!(S, 3),
    ];
}

impl CubeState {
    /// Apply an algorithm to a cube
    pub fn make_moves(self, mvs: MoveSequence<Move333>) -> CubeState {
        mvs.0.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Apply a move to a cube.
    pub fn make_move(self, mv: Move333) -> CubeState {
        self.multiply(mv.state())
    }
}
