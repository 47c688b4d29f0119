//! The orientation group of a single piece: the 24 rotations of a cube that keep it axis aligned.
//!
//! Every orientation is stored as a word over three primitive quarter turns ([`Generator`]s), and
//! the only multiplication data the crate knows about is the table of what happens when one more
//! generator is applied to an orientation. Composition, inversion and distances are all derived
//! from that table.
//!
//! The three generator axes point at the red, white and green centers respectively, and each
//! generator turns counter-clockwise as seen from the center its axis points at. Rotations act on
//! the whole puzzle, so the orientation of a piece also determines where the piece is (see
//! [`Location::resolve`](crate::cube333::Location::resolve)).

use crate::error::TryFromIntToEnumError;

use std::collections::VecDeque;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A primitive quarter turn of the whole puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Generator {
    /// Counter-clockwise as seen from the red center.
    I,
    /// Counter-clockwise as seen from the white center.
    J,
    /// Counter-clockwise as seen from the green center.
    K,
}

impl Generator {
    /// All generators in table order.
    pub const ARRAY: [Generator; 3] = [Generator::I, Generator::J, Generator::K];

    /// The orientation consisting of just this generator.
    pub fn orientation(self) -> Orientation {
        match self {
            Generator::I => Orientation::L,
            Generator::J => Orientation::M,
            Generator::K => Orientation::N,
        }
    }

    /// The index of this generator in the composition and position tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the 24 axis aligned rotations of a piece. Variants are named after their symbol in the
/// textual state encoding, and documented with their canonical decomposition into generators.
///
/// Composition is not commutative: `a.then(b)` is `a` followed by `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Orientation {
    /// The identity.
    #[default]
    O,
    /// Half turn about the i axis (`i i`).
    I,
    /// Half turn about the j axis (`j j`).
    J,
    /// Half turn about the k axis (`k k`).
    K,
    /// The generator `i`.
    L,
    /// The generator `j`.
    M,
    /// The generator `k`.
    N,
    /// Inverse of `i` (`i i i`).
    F,
    /// Inverse of `j` (`j j j`).
    G,
    /// Inverse of `k` (`k k k`).
    H,
    /// Third turn about a corner diagonal (`i j`).
    P,
    /// Third turn about a corner diagonal (`k i`).
    Q,
    /// Third turn about a corner diagonal (`i k`).
    R,
    /// Third turn about a corner diagonal (`i k k k`).
    S,
    /// Third turn about a corner diagonal (`j k`).
    T,
    /// Third turn about a corner diagonal (`i i k i`).
    U,
    /// Third turn about a corner diagonal (`i i i k`).
    V,
    /// Third turn about a corner diagonal (`i j j k`).
    W,
    /// Half turn about an edge axis (`i j j`).
    A,
    /// Half turn about an edge axis (`i k k`).
    B,
    /// Half turn about an edge axis (`i i j`).
    C,
    /// Half turn about an edge axis (`i k i`).
    X,
    /// Half turn about an edge axis (`i i k`).
    Y,
    /// Half turn about an edge axis (`j j k`).
    Z,
}

/// `COMPOSE[o][g]` is the orientation reached by applying generator `g` after `o`.
const COMPOSE: [[Orientation; 3]; 24] = {
    use Orientation::*;
    [
        [L, M, N], // o
        [F, C, Y], // i
        [B, G, Z], // j
        [A, X, H], // k
        [I, P, R], // l
        [R, J, T], // m
        [Q, R, K], // n
        [O, T, V], // f
        [S, O, Q], // g
        [P, W, O], // h
        [Y, A, M], // p
        [Z, L, X], // q
        [X, Y, B], // r
        [C, H, L], // s
        [N, B, C], // t
        [H, F, G], // u
        [G, N, A], // v
        [M, Z, F], // w
        [J, Q, W], // a
        [K, U, S], // b
        [V, K, P], // c
        [W, I, U], // x
        [U, V, J], // y
        [T, S, I], // z
    ]
};

const DECOMPOSITION: [&[Generator]; 24] = {
    use Generator::*;
    [
        &[],
        &[I, I],
        &[J, J],
        &[K, K],
        &[I],
        &[J],
        &[K],
        &[I, I, I],
        &[J, J, J],
        &[K, K, K],
        &[I, J],
        &[K, I],
        &[I, K],
        &[I, K, K, K],
        &[J, K],
        &[I, I, K, I],
        &[I, I, I, K],
        &[I, J, J, K],
        &[I, J, J],
        &[I, K, K],
        &[I, I, J],
        &[I, K, I],
        &[I, I, K],
        &[J, J, K],
    ]
};

const SYMBOLS: [char; 24] = [
    'o', 'i', 'j', 'k', 'l', 'm', 'n', 'f', 'g', 'h', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'a',
    'b', 'c', 'x', 'y', 'z',
];

// Quarter turns in either direction count as one step; half turns count as two.
const DISTANCE_CLASS: [u8; 24] = [
    0, 2, 2, 2, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3,
];

impl Orientation {
    /// The identity orientation.
    pub const IDENTITY: Orientation = Orientation::O;

    /// Every orientation, in table order.
    pub const ARRAY: [Orientation; 24] = {
        use Orientation::*;
        [
            O, I, J, K, L, M, N, F, G, H, P, Q, R, S, T, U, V, W, A, B, C, X, Y, Z,
        ]
    };

    /// The index of this orientation in `Orientation::ARRAY`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this is the identity.
    pub fn is_identity(self) -> bool {
        self == Orientation::IDENTITY
    }

    /// The canonical symbol of this orientation in the textual state encoding.
    pub fn symbol(self) -> char {
        SYMBOLS[self.index()]
    }

    /// Look up an orientation by its symbol. `-` is accepted as an alias of the identity.
    pub fn from_symbol(c: char) -> Option<Orientation> {
        if c == '-' {
            return Some(Orientation::IDENTITY);
        }
        SYMBOLS
            .iter()
            .position(|&s| s == c)
            .map(|i| Orientation::ARRAY[i])
    }

    /// The canonical generator word of this orientation, applied left to right. Never longer
    /// than 4 generators.
    pub fn decomposition(self) -> &'static [Generator] {
        DECOMPOSITION[self.index()]
    }

    /// Minimum number of quarter turns (in either direction, about any axis) needed to reach this
    /// orientation from the identity. This is a cheap per-piece lower bound, and not the distance
    /// used by [`DistanceTable`].
    pub fn distance_class(self) -> u8 {
        DISTANCE_CLASS[self.index()]
    }

    /// Apply one more generator after this orientation.
    pub fn turn(self, g: Generator) -> Orientation {
        COMPOSE[self.index()][g.index()]
    }

    /// Compose two orientations, `self` first. This folds the generator word of `other` through
    /// the composition table.
    pub fn then(self, other: Orientation) -> Orientation {
        other
            .decomposition()
            .iter()
            .fold(self, |o, &g| o.turn(g))
    }

    /// The inverse orientation, i.e. the reversed decomposition with every generator negated.
    pub fn inverse(self) -> Orientation {
        self.decomposition()
            .iter()
            .rev()
            .fold(Orientation::IDENTITY, |o, &g| o.turn(g).turn(g).turn(g))
    }
}

impl TryFrom<u8> for Orientation {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Orientation::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

impl From<Orientation> for u8 {
    fn from(o: Orientation) -> u8 {
        o as u8
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Pairwise distances between orientations, where one step is a quarter or half turn about any
/// of the three axes. A single face or slice turn changes the orientation of every piece it
/// moves by exactly one such step, so these distances bound the number of moves that affect a
/// piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    table: [[u8; 24]; 24],
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::generate()
    }
}

impl DistanceTable {
    /// Generate the table with a breadth first search from every orientation.
    pub fn generate() -> Self {
        let steps: Vec<Orientation> = Generator::ARRAY
            .into_iter()
            .flat_map(|g| {
                let q = g.orientation();
                [q, q.then(q), q.then(q).then(q)]
            })
            .collect();

        let mut table = [[u8::MAX; 24]; 24];
        for a in Orientation::ARRAY {
            let row = &mut table[a.index()];
            row[a.index()] = 0;
            let mut queue = VecDeque::from([a]);

            while let Some(o) = queue.pop_front() {
                let d = row[o.index()];
                for &s in &steps {
                    let next = o.then(s);
                    if row[next.index()] == u8::MAX {
                        row[next.index()] = d + 1;
                        queue.push_back(next);
                    }
                }
            }

            debug_assert!(row.iter().all(|&d| d != u8::MAX));
        }

        Self { table }
    }

    /// The minimum number of axis turns taking `a` to `b`.
    pub fn distance(&self, a: Orientation, b: Orientation) -> u32 {
        self.table[a.index()][b.index()] as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::iproduct;
    use proptest::prelude::*;

    #[test]
    fn decompositions_fold_to_themselves() {
        for o in Orientation::ARRAY {
            assert!(o.decomposition().len() <= 4);
            assert_eq!(Orientation::IDENTITY.then(o), o);
            let folded = o
                .decomposition()
                .iter()
                .fold(Orientation::IDENTITY, |acc, &g| acc.turn(g));
            assert_eq!(folded, o, "decomposition of {o}");
        }
    }

    #[test]
    fn array_matches_discriminants() {
        for (i, o) in Orientation::ARRAY.into_iter().enumerate() {
            assert_eq!(o.index(), i);
            assert_eq!(Orientation::try_from(i as u8), Ok(o));
        }
        assert_eq!(
            Orientation::try_from(24),
            Err(TryFromIntToEnumError::OutOfBounds)
        );
    }

    #[test]
    fn symbols_round_trip() {
        for o in Orientation::ARRAY {
            assert_eq!(Orientation::from_symbol(o.symbol()), Some(o));
        }
        assert_eq!(Orientation::from_symbol('-'), Some(Orientation::O));
        assert_eq!(Orientation::from_symbol('e'), None);
        assert_eq!(Orientation::from_symbol('L'), None);
    }

    #[test]
    fn group_axioms() {
        for a in Orientation::ARRAY {
            assert_eq!(a.then(Orientation::IDENTITY), a);
            assert_eq!(Orientation::IDENTITY.then(a), a);
            assert_eq!(a.then(a.inverse()), Orientation::IDENTITY);
            assert_eq!(a.inverse().then(a), Orientation::IDENTITY);
        }
        for (a, b, c) in iproduct!(Orientation::ARRAY, Orientation::ARRAY, Orientation::ARRAY) {
            assert_eq!(a.then(b).then(c), a.then(b.then(c)));
        }
    }

    #[test]
    fn rows_are_permutations() {
        // Right multiplication by a generator must be a bijection.
        for g in Generator::ARRAY {
            let mut seen = [false; 24];
            for o in Orientation::ARRAY {
                seen[o.turn(g).index()] = true;
            }
            assert!(seen.into_iter().all(|b| b));
        }
    }

    #[test]
    fn generators_have_order_four() {
        for g in Generator::ARRAY {
            let q = g.orientation();
            assert_ne!(q.then(q), Orientation::IDENTITY);
            assert_eq!(q.then(q).then(q).then(q), Orientation::IDENTITY);
        }
        assert_eq!(Orientation::L.inverse(), Orientation::F);
        assert_eq!(Orientation::M.inverse(), Orientation::G);
        assert_eq!(Orientation::N.inverse(), Orientation::H);
        assert_eq!(Orientation::I.inverse(), Orientation::I);
        assert_eq!(Orientation::P.inverse(), Orientation::V);
    }

    #[test]
    fn not_commutative() {
        assert_ne!(
            Orientation::L.then(Orientation::M),
            Orientation::M.then(Orientation::L)
        );
    }

    #[test]
    fn distance_classes_match_search() {
        let mut dist = [u8::MAX; 24];
        dist[0] = 0;
        let mut queue = VecDeque::from([Orientation::IDENTITY]);
        while let Some(o) = queue.pop_front() {
            for g in Generator::ARRAY {
                let q = g.orientation();
                for next in [o.then(q), o.then(q.inverse())] {
                    if dist[next.index()] == u8::MAX {
                        dist[next.index()] = dist[o.index()] + 1;
                        queue.push_back(next);
                    }
                }
            }
        }
        for o in Orientation::ARRAY {
            assert_eq!(o.distance_class(), dist[o.index()], "class of {o}");
        }
    }

    #[test]
    fn distance_table() {
        let table = DistanceTable::generate();
        for (a, b) in iproduct!(Orientation::ARRAY, Orientation::ARRAY) {
            let d = table.distance(a, b);
            assert_eq!(d == 0, a == b);
            assert!(d <= 2);
            assert_eq!(d, table.distance(b, a));
            assert!(d <= a.inverse().then(b).distance_class() as u32);
        }
        // The nine axis turns are exactly the orientations at distance one.
        let ones = Orientation::ARRAY
            .into_iter()
            .filter(|&o| table.distance(Orientation::IDENTITY, o) == 1)
            .count();
        assert_eq!(ones, 9);
    }

    proptest! {
        #[test]
        fn inverse_reverses_composition(a in any::<Orientation>(), b in any::<Orientation>()) {
            prop_assert_eq!(a.then(b).inverse(), b.inverse().then(a.inverse()));
        }

        #[test]
        fn triangle_inequality(a in any::<Orientation>(), b in any::<Orientation>(), c in any::<Orientation>()) {
            let table = DistanceTable::generate();
            prop_assert!(table.distance(a, c) <= table.distance(a, b) + table.distance(b, c));
        }
    }
}
