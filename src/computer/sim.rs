use std::fmt;

use rand::prelude::*;
use rand_distr::StandardNormal;

use super::Computer;
use crate::math::{C, C_ONE, C_ZERO, EPSILON, M1, N, R};

/// A dense classical simulation of a quantum computer.
///
/// The state of `n` qubits is a vector of `2^n` complex amplitudes indexed
/// by the integer basis label whose bit `k` (LSB = qubit 0) is the classical
/// value of qubit `k`. Outside of internal construction the vector stays
/// L2-normalized to within [`EPSILON`].
#[derive(Clone)]
pub struct Simulation {
    q_num: N,
    psi: Vec<C>,
}

impl Simulation {
    /// Create a simulation with every qubit in state |0>.
    pub fn new(q_num: N) -> Self {
        Self::with_state(q_num, 0)
    }

    /// Create a simulation in the classical basis state `state`.
    pub fn with_state(q_num: N, state: N) -> Self {
        assert!(
            state < 1 << q_num,
            "initial state {} does not fit in {} qubits",
            state,
            q_num
        );
        let mut psi = vec![C_ZERO; 1 << q_num];
        psi[state] = C_ONE;
        Self { q_num, psi }
    }

    /// Create a simulation in a random state: independent complex Gaussian
    /// amplitudes, L2-normalized. Uses the thread-local RNG.
    pub fn random(q_num: N) -> Self {
        Self::random_with(q_num, &mut thread_rng())
    }

    /// Reproducible variant of [`random`](Self::random).
    pub fn random_seeded(q_num: N, seed: u64) -> Self {
        Self::random_with(q_num, &mut StdRng::seed_from_u64(seed))
    }

    pub fn random_with(q_num: N, rng: &mut impl Rng) -> Self {
        let mut psi: Vec<C> = (0..1usize << q_num)
            .map(|_| C::new(rng.sample(StandardNormal), rng.sample(StandardNormal)))
            .collect();
        let norm = psi.iter().map(|p| p.norm_sqr()).sum::<R>().sqrt();
        psi.iter_mut().for_each(|p| *p = p.unscale(norm));
        Self { q_num, psi }
    }

    pub fn num(&self) -> N {
        self.q_num
    }

    /// The raw amplitude vector, in basis-label order.
    pub fn psi(&self) -> &[C] {
        &self.psi
    }

    pub(crate) fn psi_mut(&mut self) -> &mut [C] {
        &mut self.psi
    }

    /// Draw one classical result with probability `|psi_i|^2`. A cumulative
    /// sweep; numerical slack falls through to the last label.
    pub fn sample(&self, rng: &mut impl Rng) -> N {
        let mut x: R = rng.gen();
        for (i, p) in self.psi.iter().enumerate() {
            x -= p.norm_sqr();
            if x <= 0.0 {
                return i;
            }
        }
        self.psi.len() - 1
    }

    /// Element-wise comparison: true when no amplitude differs by more than
    /// `tol` in absolute value.
    pub fn approx_eq(&self, other: &Self, tol: R) -> bool {
        self.q_num == other.q_num
            && self
                .psi
                .iter()
                .zip(&other.psi)
                .all(|(a, b)| (a - b).norm() <= tol)
    }

    #[inline]
    fn check_bit(&self, bit: N) {
        assert!(
            bit < self.q_num,
            "qubit index {} out of range for {} qubits",
            bit,
            self.q_num
        );
    }

    fn classical_string(&self, mut label: N) -> String {
        let mut res = String::with_capacity(self.q_num + 2);
        res.push('|');
        for _ in 0..self.q_num {
            res.push(if label & 1 != 0 { '1' } else { '0' });
            label >>= 1;
        }
        res.push('>');
        res
    }
}

impl Computer for Simulation {
    fn num_bits(&self) -> N {
        self.q_num
    }

    fn unitary(&mut self, target: N, u: &M1) {
        self.check_bit(target);
        let mask = 1 << target;

        if u[0b00] == C_ONE && u[0b01] == C_ZERO && u[0b10] == C_ZERO {
            // Phase-only matrix: scale the set half.
            let z = u[0b11];
            for (i, p) in self.psi.iter_mut().enumerate() {
                if i & mask != 0 {
                    *p *= z;
                }
            }
            return;
        }

        for i in 0..self.psi.len() {
            if i & mask != 0 {
                continue;
            }
            let other = i | mask;
            let p0 = self.psi[i];
            let p1 = self.psi[other];
            self.psi[i] = u[0b00] * p0 + u[0b01] * p1;
            self.psi[other] = u[0b10] * p0 + u[0b11] * p1;
        }
    }

    fn cnot(&mut self, control: N, target: N) {
        self.check_bit(control);
        self.check_bit(target);
        assert!(control != target, "cnot control and target must differ");

        let c_mask = 1 << control;
        let t_mask = 1 << target;
        for i in 0..self.psi.len() {
            if i & c_mask != 0 && i & t_mask == 0 {
                self.psi.swap(i, i | t_mask);
            }
        }
    }

    fn permute(&mut self, f: &mut dyn FnMut(N) -> N) {
        let mut res = vec![C_ZERO; self.psi.len()];
        let mut seen = vec![false; self.psi.len()];
        for (i, p) in self.psi.iter().enumerate() {
            let j = f(i);
            assert!(
                j < res.len() && !seen[j],
                "basis permutation is not a bijection at label {}",
                i
            );
            seen[j] = true;
            res[j] = *p;
        }
        self.psi = res;
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, p) in self.psi.iter().enumerate() {
            if p.norm() < EPSILON {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            if p.im.abs() < EPSILON {
                write!(f, "{}", format_float(p.re))?;
            } else if p.re.abs() < EPSILON {
                write!(f, "{}i", format_float(p.im))?;
            } else if p.im > 0.0 {
                write!(f, "({}+{}i)", format_float(p.re), format_float(p.im))?;
            } else {
                write!(f, "({}-{}i)", format_float(p.re), format_float(-p.im))?;
            }
            write!(f, "{}", self.classical_string(i))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Simulation({} qubits: {})", self.q_num, self)
    }
}

fn format_float(x: R) -> String {
    let mut res = format!("{:.6}", x);
    while res.contains('.') && res.ends_with('0') {
        res.pop();
    }
    if res.ends_with('.') {
        res.pop();
    }
    res
}
