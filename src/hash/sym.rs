use md5::{Digest, Md5};

use rand::prelude::*;
use rand_distr::StandardNormal;

use super::{quantize, snap_to_grid, CircuitHash, CircuitHasher};
use crate::{
    computer::Simulation,
    gate::Gate,
    math::{count_bits, C, N, R},
};

/// A fingerprint that deliberately identifies circuits differing only by a
/// permutation of the qubits.
///
/// The reference amplitudes depend only on the popcount of the basis label,
/// so permuting wires permutes the output amplitudes without changing their
/// multiset; hashing then canonicalizes the wire order by sorting per-wire
/// amplitude sums. This is a lossy heuristic: some genuinely different
/// gates (e.g. CSWAP and the identity) collide on such a state, so use it
/// only where permutation-equivalence is acceptable.
#[derive(Clone)]
pub struct SymHasher {
    start: Simulation,
}

impl SymHasher {
    pub fn new(num_bits: N) -> Self {
        Self::with_rng(num_bits, &mut thread_rng())
    }

    pub fn new_seeded(num_bits: N, seed: u64) -> Self {
        Self::with_rng(num_bits, &mut StdRng::seed_from_u64(seed))
    }

    fn with_rng(num_bits: N, rng: &mut impl Rng) -> Self {
        // One Gaussian weight per popcount class.
        let weights: Vec<C> = (0..=num_bits)
            .map(|_| C::new(rng.sample(StandardNormal), rng.sample(StandardNormal)))
            .collect();

        let mut start = Simulation::new(num_bits);
        for (i, p) in start.psi_mut().iter_mut().enumerate() {
            *p = weights[count_bits(i)];
        }
        let norm = start.psi().iter().map(|p| p.norm_sqr()).sum::<R>().sqrt();
        start.psi_mut().iter_mut().for_each(|p| *p = p.unscale(norm));

        snap_to_grid(&mut start);
        Self { start }
    }
}

impl CircuitHasher for SymHasher {
    fn num_bits(&self) -> N {
        self.start.num()
    }

    fn hash(&self, g: &dyn Gate) -> CircuitHash {
        let mut s = self.start.clone();
        g.apply(&mut s);

        let num_bits = s.num();
        let mut phase_enc = vec![0u64; s.psi().len()];
        let mut bit_sums = vec![0u64; num_bits];

        for (i, p) in s.psi().iter().enumerate() {
            let r = quantize(p.re) as u32 as u64;
            let im = quantize(p.im) as u32 as u64;
            let enc = r | (im << 32);
            phase_enc[i] = enc;

            for (b, sum) in bit_sums.iter_mut().enumerate() {
                if i & (1 << b) != 0 {
                    *sum = sum.wrapping_add(enc);
                }
            }
        }

        // Canonical wire order: sort wires by their amplitude sums.
        let mut perm: Vec<N> = (0..num_bits).collect();
        perm.sort_by_key(|&b| bit_sums[b]);

        let mut data = Vec::with_capacity(phase_enc.len() * 8);
        for i in 0..phase_enc.len() {
            data.extend_from_slice(&phase_enc[inv_permute_bits(&perm, i)].to_le_bytes());
        }
        Md5::digest(&data).into()
    }

    fn prefix(&self, g: &dyn Gate) -> Self {
        let mut start = self.start.clone();
        g.apply(&mut start);
        Self { start }
    }
}

/// Relabel the bits of `num`: bit `i` of the result is bit `perm[i]` of the
/// input.
pub(crate) fn permute_bits(perm: &[N], num: N) -> N {
    perm.iter()
        .enumerate()
        .fold(0, |res, (i, &target)| res | (((num >> target) & 1) << i))
}

/// Inverse relabeling: bit `perm[i]` of the result is bit `i` of the input.
pub(crate) fn inv_permute_bits(perm: &[N], num: N) -> N {
    perm.iter()
        .enumerate()
        .fold(0, |res, (i, &target)| res | (((num >> i) & 1) << target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        computer::{Computer, MappedComputer},
        gate::{self, Circuit, FnGate, GateKind},
        register::Reg,
    };

    const SYM_TEST_BITS: N = 10;

    fn hasher() -> SymHasher {
        SymHasher::new_seeded(SYM_TEST_BITS, 0x57)
    }

    #[test]
    fn bit_permutations_round_trip() {
        let perm = vec![2, 0, 3, 1];
        for num in 0..16 {
            assert_eq!(inv_permute_bits(&perm, permute_bits(&perm, num)), num);
        }
    }

    #[test]
    fn simple_gates_still_distinguished() {
        let h = hasher();
        let empty = h.hash(&Circuit::default());
        assert_ne!(h.hash(&gate::x(0)), empty);
        assert_ne!(h.hash(&gate::h(0)), empty);
    }

    #[test]
    fn cnot_hash_ignores_wire_choice() {
        let h = hasher();
        let hash = h.hash(&gate::cnot(0, 1));
        for i in 0..SYM_TEST_BITS {
            for j in 0..SYM_TEST_BITS {
                if i == j {
                    continue;
                }
                assert_eq!(
                    h.hash(&gate::cnot(i, j)),
                    hash,
                    "CX(0,1) != CX({},{})",
                    i,
                    j
                );
            }
        }
    }

    /// Wrap a gate so it runs with its wires relabeled by a permutation.
    fn perm_gate(perm: Vec<N>, g: GateKind) -> FnGate {
        let inv = g.dgr();
        let perm2 = perm.clone();
        FnGate::new(
            "PermGate",
            move |c: &mut dyn Computer| {
                g.apply(&mut MappedComputer::new(c, Reg::new(perm.clone())));
            },
            move |c: &mut dyn Computer| {
                inv.apply(&mut MappedComputer::new(c, Reg::new(perm2.clone())));
            },
        )
    }

    fn randomized_circuit(perm: &[N], seed: u64, size: N) -> Circuit {
        let mut gen = StdRng::seed_from_u64(seed);
        let mut c = Circuit::default();
        for _ in 0..size {
            match gen.gen_range(0..3) {
                0 => {
                    let a = gen.gen_range(0..perm.len());
                    let mut b = gen.gen_range(0..perm.len());
                    while b == a {
                        b = gen.gen_range(0..perm.len());
                    }
                    c *= gate::cnot(perm[a], perm[b]);
                }
                1 => c *= gate::h(perm[gen.gen_range(0..perm.len())]),
                _ => c *= gate::t(perm[gen.gen_range(0..perm.len())]),
            }
        }
        c
    }

    #[test]
    fn permuted_circuits_collide() {
        let h = hasher();
        let mut rng = StdRng::seed_from_u64(0x58);
        for seed in 0..30 {
            let mut perm: Vec<N> = (0..SYM_TEST_BITS).collect();
            perm.shuffle(&mut rng);
            let reference = randomized_circuit(&perm, seed, 20);
            let hash = h.hash(&reference);

            for _ in 0..5 {
                let mut other: Vec<N> = (0..SYM_TEST_BITS).collect();
                other.shuffle(&mut rng);
                assert_eq!(
                    h.hash(&randomized_circuit(&other, seed, 20)),
                    hash,
                    "mismatching hash for {:?}",
                    reference
                );
            }
        }
    }

    /// A symmetric-hash collision must be explained by some genuine wire
    /// permutation under the exact hasher.
    #[test]
    fn collisions_are_permutations() {
        let exact = crate::hash::StateHasher::new_seeded(4, 0x59);
        let sym = SymHasher::new_seeded(4, 0x60);
        let mut rng = StdRng::seed_from_u64(0x61);

        for trial in 0..300 {
            let len = rng.gen_range(1..8);
            let c1 = randomized_circuit(&(0..4).collect::<Vec<_>>(), trial * 2, len);
            let c2 = randomized_circuit(&(0..4).collect::<Vec<_>>(), trial * 2 + 1, len);
            if sym.hash(&c1) != sym.hash(&c2) {
                continue;
            }
            let target = exact.hash(&c1);
            let found = permutations(4).into_iter().any(|perm| {
                exact.hash(&perm_gate(perm, c2.clone().into())) == target
            });
            assert!(found, "collision between {:?} and {:?}", c1, c2);
        }
    }

    fn permutations(length: N) -> Vec<Vec<N>> {
        if length == 0 {
            return vec![vec![]];
        }
        let mut results = Vec::new();
        for perm in permutations(length - 1) {
            for i in 0..=perm.len() {
                let mut next = perm.clone();
                next.insert(i, length - 1);
                results.push(next);
            }
        }
        results
    }
}
