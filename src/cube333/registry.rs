//! Named moves and algorithms, and the compiler for algorithm strings.
//!
//! An algorithm string is either `c: <encoding>`, a raw state in the textual encoding, or
//! `a: <steps>`, a whitespace separated list of move and algorithm names multiplied left to
//! right. Compiled strings are cached by the registry that compiled them.

use super::moves::{Move333, Move333Type};
use super::CubeState;
use crate::error::Error;
use crate::mv;

use parking_lot::Mutex;
use std::collections::HashMap;

/// The algorithms every [`Registry::new`] knows about, in definition order.
pub const BUILTIN_ALGORITHMS: &[(&str, &str)] = &[
    ("sexy", "a: R U R' U'"),
    ("sledgehammer", "a: R' F R F'"),
    ("sune", "a: R U R' U R U2 R'"),
    ("antisune", "a: R U2 R' U' R U' R'"),
    ("insert-right", "a: R U R'"),
    ("insert-left", "a: L' U' L"),
    ("t-perm", "a: sexy R' F R2 U' R' U' R U R' F'"),
    ("y-perm", "a: F R U' R' U' R U R' F' sexy sledgehammer"),
    ("ja-perm", "a: x R2 F R F' R U2 r' U r U2 x'"),
    ("ua-perm", "a: R U' R U R U R U' R' U' R2"),
    ("ub-perm", "a: R2 U R U R' U' R' U' R' U R'"),
    ("h-perm", "a: M2 U M2 U2 M2 U M2"),
    ("z-perm", "a: M' U M2 U M2 U M' U2 M2 U'"),
];

// A wide turn is a face turn together with the adjacent slice.
const WIDE_TURNS: [(&str, Move333Type, Move333); 6] = [
    ("r", Move333Type::R, mv!(M, 3)),
    ("l", Move333Type::L, mv!(M, 1)),
    ("u", Move333Type::U, mv!(E, 3)),
    ("d", Move333Type::D, mv!(E, 1)),
    ("f", Move333Type::F, mv!(S, 1)),
    ("b", Move333Type::B, mv!(S, 3)),
];

#[derive(Debug, Clone)]
struct Algorithm {
    definition: String,
    state: CubeState,
}

/// Maps move and algorithm names to the states they produce from the solved cube.
///
/// Moves are fixed when the registry is built. Algorithms are added with
/// [`define`](Self::define) and may only refer to names that already exist, so definitions can
/// never be cyclic.
#[derive(Debug)]
pub struct Registry {
    moves: HashMap<String, CubeState>,
    algorithms: HashMap<String, Algorithm>,
    cache: Mutex<HashMap<String, CubeState>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// A registry with only the elementary moves: the face, slice and rotation moves in every
    /// power (`R`, `R2`, `R'`, ...), and the wide turns `r l u d f b` with the same suffixes.
    pub fn elementary() -> Self {
        let mut moves = HashMap::new();

        for ty in Move333Type::ARRAY {
            for count in 1..=3 {
                let mv = Move333 { ty, count };
                moves.insert(mv.to_string(), mv.state());
            }
        }

        for (name, face, slice) in WIDE_TURNS {
            let quarter = face.state() * slice.state();
            for (count, suffix) in [(1, ""), (2, "2"), (3, "'")] {
                moves.insert(format!("{name}{suffix}"), quarter.pow(count));
            }
        }

        log::debug!("built registry with {} moves", moves.len());

        Registry {
            moves,
            algorithms: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// A registry with the elementary moves and the [built in algorithms](BUILTIN_ALGORITHMS).
    pub fn new() -> Self {
        let mut registry = Self::elementary();
        for &(name, definition) in BUILTIN_ALGORITHMS {
            registry
                .define(name, definition)
                .expect("built in algorithms are well formed");
        }
        registry
    }

    /// Add a named algorithm. The definition is compiled straight away, so every name it uses
    /// must already be known.
    pub fn define(&mut self, name: &str, definition: &str) -> Result<(), Error> {
        if self.contains(name) {
            return Err(Error::DuplicateName(name.to_owned()));
        }

        let state = self.compile(definition)?;
        log::debug!("defined algorithm {name:?} as {definition:?}");
        self.algorithms.insert(
            name.to_owned(),
            Algorithm {
                definition: definition.to_owned(),
                state,
            },
        );
        Ok(())
    }

    /// Whether `name` is a move or an algorithm.
    pub fn contains(&self, name: &str) -> bool {
        self.moves.contains_key(name) || self.algorithms.contains_key(name)
    }

    /// Every elementary move with its state, in no particular order.
    pub fn moves(&self) -> impl Iterator<Item = (&str, CubeState)> + '_ {
        self.moves.iter().map(|(name, &state)| (name.as_str(), state))
    }

    /// The definition an algorithm was given, or `None` for moves and unknown names.
    pub fn definition(&self, name: &str) -> Option<&str> {
        self.algorithms.get(name).map(|a| a.definition.as_str())
    }

    /// The state of a single named step.
    pub fn resolve(&self, step: &str) -> Result<CubeState, Error> {
        self.moves
            .get(step)
            .or_else(|| self.algorithms.get(step).map(|a| &a.state))
            .copied()
            .ok_or_else(|| Error::UnknownStep(step.to_owned()))
    }

    /// Compile an algorithm string into a state. Results are cached by the exact input string.
    pub fn compile(&self, alg: &str) -> Result<CubeState, Error> {
        if let Some(&state) = self.cache.lock().get(alg) {
            log::trace!("cache hit for {alg:?}");
            return Ok(state);
        }

        let body = alg.trim_start();
        let state = if let Some(encoding) = body.strip_prefix("c:") {
            CubeState::parse(encoding)?
        } else if let Some(steps) = body.strip_prefix("a:") {
            steps
                .split_whitespace()
                .try_fold(CubeState::IDENTITY, |acc, step| {
                    Ok::<_, Error>(acc * self.resolve(step)?)
                })?
        } else {
            return Err(Error::InvalidAlgorithmFormat(alg.to_owned()));
        };

        log::trace!("compiled {alg:?}");
        self.cache.lock().insert(alg.to_owned(), state);
        Ok(state)
    }

    /// Apply an algorithm string to a state.
    pub fn apply(&self, state: CubeState, alg: &str) -> Result<CubeState, Error> {
        Ok(state * self.compile(alg)?)
    }

    /// The number of compiled algorithm strings held in the cache.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }
}
