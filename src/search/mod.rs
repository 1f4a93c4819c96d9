//! Meet-in-the-middle search for circuits realizing a target gate.
//!
//! The searcher grows two frontiers in fingerprint space: an index of
//! inverse-prefixed backward circuits (what could *end* a solution) built
//! from the generator's cached layers, and a forward stream of candidate
//! prefixes probed against that index. A collision reconstructs a full
//! circuit; a direct fingerprint match on the goal short-circuits earlier.

use std::collections::HashMap;

use crate::{
    gate::{self, Circuit, Gate, GateKind},
    hash::{CircuitHash, CircuitHasher, StateHasher},
    math::N,
};

mod gen;

pub use self::gen::CircuitGen;

/// Tunables for a search run.
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    /// Total circuits the generator may materialize across cached layers.
    pub max_cache: N,
    /// Deepest forward prefix tried before giving up.
    pub max_depth: N,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_cache: 5_000_000,
            max_depth: 10,
        }
    }
}

/// The backward half of a bidirectional search: maps the fingerprint of
/// "goal undone by this tail" to the tail's first gate, so a completing
/// tail can be replayed gate by gate from any matching prefix.
pub struct BackwardsMap<H: CircuitHasher> {
    hasher: H,
    back_hasher: H,
    goal: CircuitHash,
    map: HashMap<CircuitHash, GateKind>,
}

impl<H: CircuitHasher> BackwardsMap<H> {
    pub fn new(hasher: H, goal: &dyn Gate) -> Self {
        Self {
            back_hasher: hasher.prefix(goal),
            goal: hasher.hash(goal),
            hasher,
            map: HashMap::new(),
        }
    }

    pub fn goal(&self) -> CircuitHash {
        self.goal
    }

    /// Index a circuit as a potential solution tail. Circuits must be added
    /// shortest first so each key keeps its shortest tail.
    pub fn add_circuit(&mut self, c: &Circuit) {
        let back_hash = self.back_hasher.hash(&c.dgr());
        self.map
            .entry(back_hash)
            .or_insert_with(|| c[0].clone());
    }

    /// The shortest indexed tail completing `prefix` into the goal, or
    /// `None` when the index has no continuation. A prefix that already
    /// realizes the goal yields the empty tail.
    pub fn lookup(&self, prefix: &dyn Gate) -> Option<Circuit> {
        let mut res = Circuit::default();
        let mut hasher = self.hasher.prefix(prefix);
        let mut h = hasher.hash(&Circuit::default());
        while h != self.goal {
            // A chain longer than the index itself means the walk entered a
            // collision cycle that never reaches the goal.
            if res.len() > self.map.len() {
                return None;
            }
            let g = self.map.get(&h)?;
            hasher = hasher.prefix(g);
            h = hasher.hash(&Circuit::default());
            res *= g.clone();
        }
        Some(res)
    }
}

/// Search for a circuit over `basis` that realizes `target`, with a fresh
/// random hasher on `num_bits` qubits.
pub fn search(
    num_bits: N,
    basis: Vec<GateKind>,
    target: &dyn Gate,
    opts: SearchOptions,
) -> Option<Circuit> {
    search_with_hasher(basis, target, StateHasher::new(num_bits), opts)
}

/// Bidirectional search under a caller-chosen hasher.
///
/// Phase 1 walks the generator's cached layers, returning any circuit that
/// already fingerprints to the goal and indexing everything as backward
/// tails. Phase 2 streams forward prefixes of growing depth and probes the
/// index; the first collision is returned as prefix plus tail. `None` means
/// no solution within `max_depth`; a weaker basis or a deeper cap may
/// still find one.
pub fn search_with_hasher<H: CircuitHasher>(
    basis: Vec<GateKind>,
    target: &dyn Gate,
    hasher: H,
    opts: SearchOptions,
) -> Option<Circuit> {
    let goal = hasher.hash(target);
    let mut gen = CircuitGen::with_hasher(basis, hasher.clone(), opts.max_cache);
    let mut back = BackwardsMap::new(hasher.clone(), target);

    for depth in 1..=opts.max_depth {
        match gen.generate_slice(depth) {
            Some(layer) => {
                for c in layer.iter() {
                    if hasher.hash(c) == goal {
                        return Some(c.clone());
                    }
                    back.add_circuit(c);
                }
            }
            None => break,
        }
    }

    for depth in 1..=opts.max_depth {
        let (rx, _count) = gen.generate(depth);
        for c in rx {
            if let Some(tail) = back.lookup(&c) {
                return Some(c.join(&tail));
            }
        }
    }

    None
}

/// Search for a circuit `c` such that `c` twice realizes `target`.
pub fn search_sqrt<H: CircuitHasher>(
    basis: Vec<GateKind>,
    target: &dyn Gate,
    hasher: H,
    opts: SearchOptions,
) -> Option<Circuit> {
    let goal = hasher.hash(target);
    let mut gen = CircuitGen::with_hasher(basis, hasher.clone(), opts.max_cache);

    for depth in 1..=opts.max_depth {
        let (rx, _count) = gen.generate(depth);
        for c in rx {
            if hasher.prefix(&c).hash(&c) == goal {
                return Some(c);
            }
        }
    }

    None
}

/// Search for a controlled version of `target`: wire 0 of the solution is
/// the control and the target acts on the remaining wires. The hasher (and
/// basis) must cover one more wire than the target.
pub fn search_ctrl<H: CircuitHasher>(
    basis: Vec<GateKind>,
    target: GateKind,
    hasher: H,
    opts: SearchOptions,
) -> Option<Circuit> {
    let lifted = gate::controlled(target);
    search_with_hasher(basis, &lifted, hasher, opts)
}
