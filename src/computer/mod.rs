//! Quantum computers and the adapters that reinterpret operations on them.
//!
//! The [`Computer`] trait is the seam between gates and state: a gate only
//! ever issues single-qubit unitaries, CNOTs and basis permutations, and a
//! computer decides what those mean. [`Simulation`] executes them on a dense
//! amplitude vector, while [`MappedComputer`], [`CondComputer`] and
//! [`InvertTape`] rewrite them (reindexing, adding a control, recording an
//! inverse) before forwarding to an inner computer.

use crate::math::{M1, N};

mod cond;
mod mapped;
mod sim;
mod tape;

pub use self::{
    cond::CondComputer,
    mapped::MappedComputer,
    sim::Simulation,
    tape::{conj, invert, InvertTape},
};

/// A generic quantum computer.
///
/// All operations address qubits by index; an index outside `[0, num_bits)`
/// is a programming error and panics.
pub trait Computer {
    fn num_bits(&self) -> N;

    /// Apply a 2x2 unitary to the target qubit. The matrix is trusted to be
    /// unitary; this is not checked.
    fn unitary(&mut self, target: N, u: &M1);

    /// Apply a controlled NOT. Panics if `control == target`.
    fn cnot(&mut self, control: N, target: N);

    /// Whether a qubit is reserved by an adapter and must not be borrowed as
    /// a working qubit. Plain simulations have no reserved qubits.
    fn in_use(&self, _bit: N) -> bool {
        false
    }

    /// Apply the basis permutation sending the amplitude at label `i` to
    /// label `f(i)`. `f` is trusted to be a bijection on `[0, 2^num_bits)`;
    /// a non-bijection is a programming error.
    fn permute(&mut self, f: &mut dyn FnMut(N) -> N);
}
