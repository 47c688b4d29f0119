//! Admissible lower bounds on the number of moves between two cube states.
//!
//! Each piece contributes the number of axis turns separating its orientations in the two
//! states. A move changes a piece's distance by at most the axis turns of the rotation it applies
//! at the piece's location, so no move can change the summed distance of a group by more than
//! `per_move`. Dividing the sum by `per_move` (rounded up) then never overestimates.
//!
//! What counts as a move is fixed when an estimator is built: [`Estimator::standard`] counts face
//! and slice turns, [`Estimator::for_moves`] fits the groups to any set of move states, such as
//! every elementary move of a [`Registry`](super::registry::Registry).

use super::moves::MoveGenerator;
use super::{CubeState, Location, PieceKind};
use crate::orientation::{DistanceTable, Orientation};

use std::num::NonZeroU32;

/// A set of pieces whose summed distance bounds the move count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicGroup {
    name: String,
    locations: Vec<Location>,
    per_move: NonZeroU32,
}

impl HeuristicGroup {
    /// Make a group from the home locations of its pieces. `per_move` must be at least the most
    /// that a single move can change the summed distance of those pieces, or the bound is not
    /// admissible. [`fitted`](Self::fitted) computes it for a given move set.
    pub fn new(
        name: impl Into<String>,
        locations: impl IntoIterator<Item = Location>,
        per_move: NonZeroU32,
    ) -> Self {
        HeuristicGroup {
            name: name.into(),
            locations: locations.into_iter().collect(),
            per_move,
        }
    }

    /// Make a group whose `per_move` is the most any of `moves` can change its summed distance.
    ///
    /// A move may find the group's pieces at any locations of their kinds, so for every kind we
    /// take the largest per location distances the move applies, as many as the group has pieces
    /// of that kind. A group that no move touches gets a `per_move` of 1.
    pub fn fitted(
        name: impl Into<String>,
        locations: impl IntoIterator<Item = Location>,
        moves: &[CubeState],
        distances: &DistanceTable,
    ) -> Self {
        let locations: Vec<Location> = locations.into_iter().collect();

        let most = moves
            .iter()
            .map(|m| {
                [PieceKind::Corner, PieceKind::Edge, PieceKind::Center]
                    .into_iter()
                    .map(|kind| {
                        let pieces = locations.iter().filter(|l| l.kind() == kind).count();
                        let mut steps: Vec<u32> = Location::ARRAY
                            .into_iter()
                            .filter(|l| l.kind() == kind)
                            .map(|q| distances.distance(Orientation::IDENTITY, m[q]))
                            .collect();
                        steps.sort_unstable_by(|a, b| b.cmp(a));
                        steps.into_iter().take(pieces).sum::<u32>()
                    })
                    .sum::<u32>()
            })
            .max()
            .unwrap_or(0);

        HeuristicGroup {
            name: name.into(),
            locations,
            per_move: NonZeroU32::new(most).unwrap_or(NonZeroU32::MIN),
        }
    }

    #[allow(missing_docs)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(missing_docs)]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[allow(missing_docs)]
    pub fn per_move(&self) -> NonZeroU32 {
        self.per_move
    }

    /// The lower bound this group gives on the number of moves from `a` to `b`.
    pub fn bound(&self, distances: &DistanceTable, a: &CubeState, b: &CubeState) -> u32 {
        let total: u32 = self
            .locations
            .iter()
            .map(|&l| distances.distance(a[l], b[l]))
            .sum();
        total.div_ceil(self.per_move.get())
    }
}

/// The pieces of the standard groups: all corners, all edges, all centers, the cross, the first
/// layer corners, the last layer and the four first two layers pairs.
fn standard_groups() -> Vec<(&'static str, Vec<Location>)> {
    use Location::*;
    vec![
        ("corners", Location::CORNERS.to_vec()),
        ("edges", Location::EDGES.to_vec()),
        ("centers", Location::CENTERS.to_vec()),
        ("cross", vec![YG, YB, YO, YR]),
        ("first layer corners", vec![YGO, YGR, YBO, YBR]),
        ("last layer", vec![WGO, WGR, WBO, WBR, WG, WB, WO, WR]),
        ("front left pair", vec![YGO, GO]),
        ("front right pair", vec![YGR, GR]),
        ("back left pair", vec![YBO, BO]),
        ("back right pair", vec![YBR, BR]),
    ]
}

/// Computes move count lower bounds as the largest bound of any of its groups.
#[derive(Debug, Clone)]
pub struct Estimator {
    distances: DistanceTable,
    groups: Vec<HeuristicGroup>,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::standard()
    }
}

impl Estimator {
    /// Build an estimator from a list of groups.
    pub fn new(groups: Vec<HeuristicGroup>) -> Self {
        Self::with_distances(DistanceTable::generate(), groups)
    }

    fn with_distances(distances: DistanceTable, groups: Vec<HeuristicGroup>) -> Self {
        log::debug!(
            "built estimator with groups {:?}",
            groups
                .iter()
                .map(|g| (g.name(), g.per_move()))
                .collect::<Vec<_>>()
        );
        Estimator { distances, groups }
    }

    /// The standard groups fitted to an arbitrary set of moves, given as the states they produce
    /// from the solved cube.
    pub fn for_moves(moves: impl IntoIterator<Item = CubeState>) -> Self {
        let moves: Vec<CubeState> = moves.into_iter().collect();
        let distances = DistanceTable::generate();
        let groups = standard_groups()
            .into_iter()
            .map(|(name, locations)| HeuristicGroup::fitted(name, locations, &moves, &distances))
            .collect();
        Self::with_distances(distances, groups)
    }

    /// The standard groups fitted to the moves of a [`MoveGenerator`].
    pub fn for_generator<G: MoveGenerator>() -> Self {
        Self::for_moves(G::MOVE_LIST.iter().map(|m| m.state()))
    }

    /// The standard groups, counting face and slice turns as moves. Whole cube rotations are not
    /// moves here.
    pub fn standard() -> Self {
        Self::for_generator::<super::moves::SliceHtm>()
    }

    #[allow(missing_docs)]
    pub fn groups(&self) -> &[HeuristicGroup] {
        &self.groups
    }

    /// A lower bound on the number of moves taking `a` to `b`, counting only the moves the
    /// estimator was built for.
    pub fn estimate(&self, a: &CubeState, b: &CubeState) -> u32 {
        self.groups
            .iter()
            .map(|g| g.bound(&self.distances, a, b))
            .max()
            .unwrap_or(0)
    }

    /// The bound of every group, by group name.
    pub fn estimates(&self, a: &CubeState, b: &CubeState) -> Vec<(&str, u32)> {
        self.groups
            .iter()
            .map(|g| (g.name(), g.bound(&self.distances, a, b)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::{Move333, SliceHtm};
    use crate::cube333::registry::Registry;
    use crate::moves::MoveSequence;
    use crate::mv;

    use pretty_assertions::assert_eq;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest::sample::select;

    fn slice_htm_moves() -> impl Strategy<Value = MoveSequence<Move333>> {
        vec(select(SliceHtm::MOVE_LIST), 0..20).prop_map(MoveSequence)
    }

    fn registry_moves() -> impl Strategy<Value = Vec<String>> {
        let mut names: Vec<String> = Registry::elementary()
            .moves()
            .map(|(name, _)| name.to_owned())
            .collect();
        names.sort();
        vec(select(names), 0..20)
    }

    fn per_moves(estimator: &Estimator) -> Vec<(&str, u32)> {
        estimator
            .groups()
            .iter()
            .map(|g| (g.name(), g.per_move().get()))
            .collect()
    }

    #[test]
    fn solved_and_single_moves() {
        let estimator = Estimator::standard();
        let solved = CubeState::IDENTITY;
        assert_eq!(estimator.estimate(&solved, &solved), 0);
        for &m in SliceHtm::MOVE_LIST {
            let state = solved.make_move(m);
            assert_eq!(estimator.estimate(&solved, &state), 1, "{m}");
        }
        // A rotation is not a face or slice turn, but every piece is turned.
        let x = solved.make_move(mv!(X, 1));
        assert_eq!(estimator.estimate(&solved, &x), 3);
    }

    #[test]
    fn estimates_by_group() {
        let estimator = Estimator::standard();
        let u = CubeState::IDENTITY.make_move(mv!(U, 1));
        let estimates = estimator.estimates(&CubeState::IDENTITY, &u);
        assert_eq!(estimates.len(), estimator.groups().len());
        assert!(estimates.contains(&("last layer", 1)));
        assert!(estimates.contains(&("cross", 0)));
        assert!(estimates.contains(&("front left pair", 0)));
    }

    #[test]
    fn empty_estimator() {
        let estimator = Estimator::new(vec![]);
        let r = CubeState::IDENTITY.make_move(mv!(R, 1));
        assert_eq!(estimator.estimate(&CubeState::IDENTITY, &r), 0);
    }

    #[test]
    fn explicit_groups() {
        let four = NonZeroU32::new(4).unwrap();
        let estimator = Estimator::new(vec![HeuristicGroup::new("corners", Location::CORNERS, four)]);
        let r = CubeState::IDENTITY.make_move(mv!(R, 1));
        assert_eq!(estimator.estimate(&CubeState::IDENTITY, &r), 1);
        assert_eq!(estimator.groups()[0].per_move(), four);
    }

    #[test]
    fn untouched_groups() {
        let distances = DistanceTable::generate();
        let group = HeuristicGroup::fitted("corners", Location::CORNERS, &[], &distances);
        assert_eq!(group.per_move(), NonZeroU32::MIN);
        // Slices never move corners.
        let m = CubeState::IDENTITY.make_move(mv!(M, 1));
        let group = HeuristicGroup::fitted("corners", Location::CORNERS, &[m], &distances);
        assert_eq!(group.per_move(), NonZeroU32::MIN);
    }

    #[test]
    fn face_and_slice_turn_fit() {
        assert_eq!(
            per_moves(&Estimator::standard()),
            vec![
                ("corners", 4),
                ("edges", 4),
                ("centers", 4),
                ("cross", 4),
                ("first layer corners", 4),
                ("last layer", 8),
                ("front left pair", 2),
                ("front right pair", 2),
                ("back left pair", 2),
                ("back right pair", 2),
            ]
        );
    }

    #[test]
    fn registry_move_fit() {
        let registry = Registry::elementary();
        let estimator = Estimator::for_moves(registry.moves().map(|(_, s)| s));
        // Rotations turn every piece, wide turns turn eight edges.
        assert_eq!(
            per_moves(&estimator),
            vec![
                ("corners", 8),
                ("edges", 12),
                ("centers", 6),
                ("cross", 4),
                ("first layer corners", 4),
                ("last layer", 8),
                ("front left pair", 2),
                ("front right pair", 2),
                ("back left pair", 2),
                ("back right pair", 2),
            ]
        );

        for (name, state) in registry.moves() {
            assert_eq!(estimator.estimate(&CubeState::IDENTITY, &state), 1, "{name}");
        }
    }

    proptest! {
        #[test]
        fn admissible(mvs in slice_htm_moves()) {
            let estimator = Estimator::standard();
            let state = CubeState::IDENTITY.make_moves(mvs.clone());
            let bound = estimator.estimate(&CubeState::IDENTITY, &state);
            prop_assert!(bound as usize <= mvs.cancel().len());
        }

        #[test]
        fn admissible_between_scrambles(scramble in slice_htm_moves(), mvs in slice_htm_moves()) {
            let estimator = Estimator::standard();
            let a = CubeState::IDENTITY.make_moves(scramble);
            let b = a.make_moves(mvs.clone());
            prop_assert!(estimator.estimate(&a, &b) as usize <= mvs.len());
        }

        #[test]
        fn admissible_for_registry_moves(scramble in registry_moves(), names in registry_moves()) {
            let registry = Registry::elementary();
            let estimator = Estimator::for_moves(registry.moves().map(|(_, s)| s));
            let a = registry.compile(&format!("a: {}", scramble.join(" "))).unwrap();
            let b = registry.apply(a, &format!("a: {}", names.join(" "))).unwrap();
            prop_assert!(estimator.estimate(&a, &b) as usize <= names.len());
        }

        #[test]
        fn symmetric(a in slice_htm_moves(), b in slice_htm_moves()) {
            let estimator = Estimator::standard();
            let a = CubeState::IDENTITY.make_moves(a);
            let b = CubeState::IDENTITY.make_moves(b);
            prop_assert_eq!(estimator.estimate(&a, &b), estimator.estimate(&b, &a));
        }
    }
}
