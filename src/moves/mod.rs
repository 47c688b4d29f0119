//! Module for puzzle move generics and related functionality

/// Result of putting two moves next to each other. See [`cancel`](Move::cancel).
#[derive(Debug, Eq, PartialEq)]
pub enum Cancellation<M: Move> {
    /// The moves cancelled completely.
    ///
    /// e.g. `R R'` cancels completely
    NoMove,
    /// The moves merged into one move.
    ///
    /// e.g. `R R` merges into `R2`
    OneMove(M),
    /// The moves didn't cancel
    ///
    /// e.g. `R U` stays as `R U`
    TwoMove(M, M),
}

/// A move, for use in writing algorithms. A move is a power of one generator of some group
/// presentation of the puzzle.
///
/// The only relations assumed between moves are the order of each generator (encoded by
/// `cancel`) and which moves commute (encoded by `commutes_with`). `MoveSequence::cancel` uses
/// nothing else, so it simplifies as far as those relations allow and no further.
pub trait Move: Eq + Clone {
    /// The inverse of a move, so that `X X^{-1}` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;

    /// Whether the two moves can be swapped when adjacent, i.e. `A B = B A`. This relation must
    /// be transitive.
    fn commutes_with(&self, b: &Self) -> bool;

    /// Put two moves next to each other and simplify.
    ///
    /// ```rust
    /// use cube_algebra::mv;
    /// use cube_algebra::moves::{Cancellation, Move};
    ///
    /// assert_eq!(mv!(R, 1).cancel(mv!(U, 3)), Cancellation::TwoMove(mv!(R, 1), mv!(U, 3)));
    /// assert_eq!(mv!(R, 1).cancel(mv!(R, 1)), Cancellation::OneMove(mv!(R, 2)));
    /// assert_eq!(mv!(R, 1).cancel(mv!(R, 3)), Cancellation::NoMove);
    /// ```
    fn cancel(self, b: Self) -> Cancellation<Self>
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves: reverse it and invert every move.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenate two sequences.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// Cancel an algorithm as far as `Move::cancel` and `Move::commutes_with` allow, merging
    /// moves across runs of commuting moves (e.g. `R L R` becomes `R2 L`).
    pub fn cancel(self) -> Self {
        let mut reduced: Vec<M> = Vec::with_capacity(self.0.len());

        for mv in self.0 {
            // `reduced` has no possible cancellations left, so only the new move can merge with
            // something. Look back through the moves it commutes with for one to merge into.
            let mut merged = false;

            for i in (0..reduced.len()).rev() {
                match reduced[i].clone().cancel(mv.clone()) {
                    Cancellation::NoMove => {
                        reduced.remove(i);
                        merged = true;
                    }
                    Cancellation::OneMove(m) => {
                        reduced[i] = m;
                        merged = true;
                    }
                    Cancellation::TwoMove(_, _) => {}
                }

                if merged || !mv.commutes_with(&reduced[i]) {
                    break;
                }
            }

            if !merged {
                reduced.push(mv);
            }
        }

        Self(reduced)
    }
}

impl<M: Move> FromIterator<M> for MoveSequence<M> {
    fn from_iter<T: IntoIterator<Item = M>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
