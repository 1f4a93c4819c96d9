//! Circuit fingerprints: 128-bit identifiers for a gate's action on a fixed
//! reference state, quantized to a 2^-30 grid and digested with MD5.
//!
//! Two gates hash equal exactly when their outputs on the reference state
//! agree on the quantization grid. Because the reference state is in
//! general position, agreeing there is (for practical bases) agreeing
//! everywhere; the searcher leans on this as its equivalence test.

use md5::{Digest, Md5};

use crate::{
    computer::Simulation,
    gate::Gate,
    math::{N, R},
};

mod sym;

pub use self::sym::SymHasher;

/// Quantization grid for amplitude fingerprints.
pub(crate) const VALUE_SCALE: R = (1u64 << 30) as R;

/// An opaque 128-bit circuit fingerprint, used only for equality and as a
/// map key.
pub type CircuitHash = [u8; 16];

/// A fingerprint function over gates.
pub trait CircuitHasher: Clone {
    fn num_bits(&self) -> N;

    fn hash(&self, g: &dyn Gate) -> CircuitHash;

    /// A hasher that applies `g` before every gate it hashes, so that
    /// `hash(g1 then g2) == prefix(g1).hash(g2)`.
    fn prefix(&self, g: &dyn Gate) -> Self;
}

/// The default hasher: a Gaussian-random reference state.
#[derive(Clone)]
pub struct StateHasher {
    start: Simulation,
}

impl StateHasher {
    /// A hasher with a fresh random reference state. Distinct hashers give
    /// distinct hash functions.
    pub fn new(num_bits: N) -> Self {
        Self::from_start(Simulation::random(num_bits))
    }

    /// A reproducible hasher: the same seed gives the same hash function.
    pub fn new_seeded(num_bits: N, seed: u64) -> Self {
        Self::from_start(Simulation::random_seeded(num_bits, seed))
    }

    fn from_start(mut start: Simulation) -> Self {
        snap_to_grid(&mut start);
        Self { start }
    }
}

/// Move every component to the quantization boundary so that rounding
/// errors accumulated while applying gates cannot straddle a grid line.
/// This leaves the state slightly unnormalized, which is harmless because
/// the reference state is never sampled.
pub(crate) fn snap_to_grid(s: &mut Simulation) {
    for p in s.psi_mut() {
        p.re = (p.re * VALUE_SCALE).trunc() / VALUE_SCALE;
        p.im = (p.im * VALUE_SCALE).trunc() / VALUE_SCALE;
    }
}

pub(crate) fn quantize(x: R) -> i32 {
    (x * VALUE_SCALE).round() as i32
}

impl CircuitHasher for StateHasher {
    fn num_bits(&self) -> N {
        self.start.num()
    }

    fn hash(&self, g: &dyn Gate) -> CircuitHash {
        let mut s = self.start.clone();
        g.apply(&mut s);

        let mut data = Vec::with_capacity(s.psi().len() * 8);
        for p in s.psi() {
            data.extend_from_slice(&quantize(p.re).to_be_bytes());
            data.extend_from_slice(&quantize(p.im).to_be_bytes());
        }
        Md5::digest(&data).into()
    }

    fn prefix(&self, g: &dyn Gate) -> Self {
        let mut start = self.start.clone();
        g.apply(&mut start);
        Self { start }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{self, Circuit, GateKind};

    fn hasher(num_bits: N) -> StateHasher {
        StateHasher::new_seeded(num_bits, 0x5EED)
    }

    #[test]
    fn commuting_gates_hash_equal() {
        let c1 = Circuit::default() * gate::t(2) * gate::h(4) * gate::t(1);
        let c2 = Circuit::default() * gate::t(2) * gate::t(1) * gate::h(4);
        let h = hasher(5);
        assert_eq!(h.hash(&c1), h.hash(&c2));
    }

    #[test]
    fn distinct_gates_hash_differently() {
        let h = hasher(3);
        assert_ne!(h.hash(&gate::x(0)), h.hash(&Circuit::default()));
        assert_ne!(h.hash(&gate::x(0)), h.hash(&gate::x(1)));
        assert_ne!(h.hash(&gate::h(0)), h.hash(&gate::t(0)));
    }

    #[test]
    fn inverse_pairs_hash_to_identity() {
        let h = hasher(3);
        let empty = h.hash(&Circuit::default());
        let gates: Vec<GateKind> = vec![
            gate::h(0),
            gate::t(1),
            gate::sqrt_not(2),
            gate::cnot(0, 2),
            gate::sqrt_swap(1, 2),
            gate::ccnot(0, 1, 2),
        ];
        for g in gates {
            let c = Circuit::from(g.clone()) * g.dgr();
            assert_eq!(h.hash(&c), empty, "{:?} inverse is broken", c);
        }
    }

    #[test]
    fn prefix_law() {
        let h = hasher(4);
        let g1 = Circuit::default() * gate::h(0) * gate::cnot(0, 2);
        let g2 = Circuit::default() * gate::t(3) * gate::sqrt_swap(1, 3);

        let composed = g1.clone() * g2.clone();
        assert_eq!(h.hash(&composed), h.prefix(&g1).hash(&g2));
    }

    #[test]
    fn seeded_hasher_is_reproducible() {
        let h1 = StateHasher::new_seeded(4, 1234);
        let h2 = StateHasher::new_seeded(4, 1234);
        let g = gate::ccnot(0, 1, 2);
        assert_eq!(h1.hash(&g), h2.hash(&g));
    }
}
