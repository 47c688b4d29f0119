//! The cube state and the group operations on it.

use super::Location;
use crate::error::Error;
use crate::orientation::Orientation;

use std::ops::{Index, Mul};

/// A configuration of the cube, stored as the orientation of every piece indexed by the location
/// the piece is solved at. The orientation of a piece is the rotation that carries it from its
/// home location to wherever it is now, so positions are never stored, only derived (see
/// [`positions`](Self::positions)).
///
/// A state is also a group element: the transformation that takes the solved cube to it. Moves
/// and algorithms are states too, and are applied by multiplication.
///
/// `==` compares orientations exactly (see [`true_eq`](Self::true_eq)). The weaker comparison of
/// piece positions only is [`same_positions`](Self::same_positions).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState([Orientation; Location::COUNT]);

impl Default for CubeState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CubeState {
    /// The solved cube, which is the identity of the group.
    pub const IDENTITY: CubeState = CubeState([Orientation::IDENTITY; Location::COUNT]);

    /// Build a state from the orientation of every location, in canonical order.
    pub const fn from_orientations(orientations: [Orientation; Location::COUNT]) -> Self {
        CubeState(orientations)
    }

    /// A state that rotates every piece in the locations accepted by `filter` by `o`, and leaves
    /// the rest alone.
    pub(crate) fn layer(o: Orientation, filter: impl Fn(Location) -> bool) -> Self {
        CubeState(Location::ARRAY.map(|l| if filter(l) { o } else { Orientation::IDENTITY }))
    }

    /// The orientation of every location, in canonical order.
    pub fn orientations(&self) -> &[Orientation; Location::COUNT] {
        &self.0
    }

    /// The orientation of the piece whose home is `location`.
    pub fn get(&self, location: Location) -> Orientation {
        self.0[location.index()]
    }

    /// Iterate over every location with the orientation of its piece.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Orientation)> + '_ {
        Location::ARRAY.into_iter().zip(self.0.iter().copied())
    }

    /// Whether this is the solved state.
    pub fn is_identity(&self) -> bool {
        self.0.iter().all(|o| o.is_identity())
    }

    /// Multiply two states in the cube group, applying `self` first.
    ///
    /// For every piece, we find where `self` put it and apply the rotation that `other` applies
    /// to the piece solved at that location.
    pub fn multiply(self, other: CubeState) -> CubeState {
        let mut result = CubeState::IDENTITY;

        for (p, o) in self.iter() {
            let r = other.get(p.resolve(o));
            result.0[p.index()] = o.then(r);
        }

        result
    }

    /// Multiply a state with itself `n` times.
    pub fn pow(self, n: u32) -> CubeState {
        (0..n).fold(CubeState::IDENTITY, |acc, _| acc.multiply(self))
    }

    /// Where each piece currently is, indexed by its home location.
    ///
    /// Fails with [`Error::StateCorruption`] if two pieces resolve to the same location.
    pub fn positions(&self) -> Result<[Location; Location::COUNT], Error> {
        let positions = self.destinations();
        let mut claimed = [false; Location::COUNT];
        for q in positions {
            if std::mem::replace(&mut claimed[q.index()], true) {
                return Err(Error::StateCorruption { location: q });
            }
        }
        Ok(positions)
    }

    fn destinations(&self) -> [Location; Location::COUNT] {
        Location::ARRAY.map(|p| p.resolve(self.get(p)))
    }

    /// Whether no two pieces resolve to the same location. Every state built from moves is well
    /// formed, but decoded states need not be.
    pub fn is_well_formed(&self) -> bool {
        self.positions().is_ok()
    }

    /// The positions of all pieces as a string of location letters, indexed by home location.
    /// The solved cube gives `ABCDEFGHIJKLMNOPQRSTUVWXYZ`.
    pub fn position_string(&self) -> String {
        self.destinations().iter().map(|l| l.letter()).collect()
    }

    /// The inverse in the cube group, or [`Error::StateCorruption`] for a malformed state.
    ///
    /// Every piece is moved back from where it is: the location it resolves to receives the
    /// inverse of its orientation.
    pub fn try_inverse(self) -> Result<CubeState, Error> {
        let mut result = CubeState::IDENTITY;
        let mut claimed = [false; Location::COUNT];

        for (p, o) in self.iter() {
            let q = p.resolve(o);
            if std::mem::replace(&mut claimed[q.index()], true) {
                return Err(Error::StateCorruption { location: q });
            }
            result.0[q.index()] = o.inverse();
        }

        Ok(result)
    }

    /// The inverse in the cube group.
    ///
    /// # Panics
    ///
    /// Panics if the state is malformed. Use [`try_inverse`](Self::try_inverse) for states decoded
    /// from untrusted input.
    pub fn inverse(self) -> CubeState {
        self.try_inverse()
            .unwrap_or_else(|e| panic!("cannot invert a malformed state: {e}"))
    }

    /// Exact equality: every location has the same orientation. Same as `==`.
    pub fn true_eq(&self, other: &CubeState) -> bool {
        self.0 == other.0
    }

    /// Positional equality: every piece is at the same location in both states. This ignores
    /// corner twists, edge flips and center rotations.
    pub fn same_positions(&self, other: &CubeState) -> bool {
        self.destinations() == other.destinations()
    }

    /// Exact equality restricted to the pieces solved at the given locations.
    pub fn agrees_on(
        &self,
        other: &CubeState,
        locations: impl IntoIterator<Item = Location>,
    ) -> bool {
        locations.into_iter().all(|l| self.get(l) == other.get(l))
    }
}

impl Mul for CubeState {
    type Output = CubeState;

    fn mul(self, rhs: CubeState) -> CubeState {
        self.multiply(rhs)
    }
}

impl Index<Location> for CubeState {
    type Output = Orientation;

    fn index(&self, location: Location) -> &Orientation {
        &self.0[location.index()]
    }
}

// The derived debug output would be 26 lines long
impl std::fmt::Debug for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CubeState({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::Move333;
    use crate::moves::MoveSequence;
    use crate::mv;

    use pretty_assertions::assert_eq;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn scrambled() -> impl Strategy<Value = CubeState> {
        vec(any::<Move333>(), 0..25).prop_map(|mvs| CubeState::IDENTITY.make_moves(MoveSequence(mvs)))
    }

    #[test]
    fn identity() {
        assert!(CubeState::IDENTITY.is_identity());
        assert!(CubeState::IDENTITY.is_well_formed());
        assert_eq!(
            CubeState::IDENTITY.position_string(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
        assert_eq!(CubeState::IDENTITY.inverse(), CubeState::IDENTITY);
        assert_eq!(CubeState::default(), CubeState::IDENTITY);
    }

    #[test]
    fn not_commutative() {
        let r = CubeState::IDENTITY.make_move(mv!(R, 1));
        let u = CubeState::IDENTITY.make_move(mv!(U, 1));
        assert_ne!(r * u, u * r);
        // Turns of opposite faces do commute.
        let l = CubeState::IDENTITY.make_move(mv!(L, 1));
        assert_eq!(r * l, l * r);
    }

    #[test]
    fn r_moves_the_right_layer() {
        let r = CubeState::IDENTITY.make_move(mv!(R, 1));
        assert_eq!(r.get(Location::R), Orientation::F);
        assert_eq!(r.get(Location::WBR), Orientation::F);
        assert_eq!(r.get(Location::O), Orientation::IDENTITY);
        assert_eq!(r.get(Location::WG), Orientation::IDENTITY);
        assert_eq!(r.to_string(), "-f-f-f-f ---f-f-f---f -----f");
    }

    #[test]
    fn malformed_states() {
        // Both the YGO and YGR corners claim the YGR location.
        let mut o = [Orientation::IDENTITY; Location::COUNT];
        o[Location::YGO.index()] = Orientation::M;
        let bad = CubeState::from_orientations(o);
        assert!(!bad.is_well_formed());
        assert_eq!(
            bad.try_inverse(),
            Err(Error::StateCorruption {
                location: Location::YGR
            })
        );
        assert_eq!(
            bad.positions(),
            Err(Error::StateCorruption {
                location: Location::YGR
            })
        );
    }

    #[test]
    #[should_panic(expected = "malformed")]
    fn inverting_malformed_state_panics() {
        let mut o = [Orientation::IDENTITY; Location::COUNT];
        o[Location::WG.index()] = Orientation::I;
        CubeState::from_orientations(o).inverse();
    }

    #[test]
    fn equality_notions_differ() {
        // A twisted corner has moved nowhere, but it is not solved.
        let sune = CubeState::IDENTITY.make_moves(MoveSequence(vec![
            mv!(R, 1),
            mv!(U, 1),
            mv!(R, 3),
            mv!(U, 1),
            mv!(R, 1),
            mv!(U, 2),
            mv!(R, 3),
        ]));
        let twice = sune * sune;
        assert!(twice != sune);
        assert!(!twice.true_eq(&sune));
        assert!(!twice.same_positions(&sune));
        let six = sune.pow(6);
        assert!(six.true_eq(&CubeState::IDENTITY));

        let mut o = [Orientation::IDENTITY; Location::COUNT];
        o[Location::W.index()] = Orientation::J;
        let turned_center = CubeState::from_orientations(o);
        assert!(turned_center.same_positions(&CubeState::IDENTITY));
        assert!(!turned_center.true_eq(&CubeState::IDENTITY));
        assert!(turned_center.agrees_on(
            &CubeState::IDENTITY,
            Location::CORNERS.into_iter().chain(Location::EDGES)
        ));
    }

    proptest! {
        #[test]
        fn closure(a in scrambled(), b in scrambled()) {
            prop_assert!((a * b).is_well_formed());
        }

        #[test]
        fn identity_law(a in scrambled()) {
            prop_assert_eq!(a * CubeState::IDENTITY, a);
            prop_assert_eq!(CubeState::IDENTITY * a, a);
        }

        #[test]
        fn associative(a in scrambled(), b in scrambled(), c in scrambled()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn inverse_law(a in scrambled()) {
            prop_assert_eq!(a * a.inverse(), CubeState::IDENTITY);
            prop_assert_eq!(a.inverse() * a, CubeState::IDENTITY);
            prop_assert_eq!(a.inverse().inverse(), a);
        }

        #[test]
        fn inverse_reverses_products(a in scrambled(), b in scrambled()) {
            prop_assert_eq!((a * b).inverse(), b.inverse() * a.inverse());
        }

        #[test]
        fn positions_follow_orientations(a in scrambled()) {
            let positions = a.positions().unwrap();
            for (p, o) in a.iter() {
                prop_assert_eq!(positions[p.index()], p.resolve(o));
                prop_assert_eq!(a[p], o);
            }
        }
    }
}
