//! Primitive gate sequences, written directly against a [`Computer`].
//!
//! These are the bodies behind the gate structs: each emits single-qubit
//! unitaries and CNOTs, so it compiles correctly on a plain simulation and
//! on any adapter. The two-qubit square roots are fixed 7–8 gate sequences
//! originally discovered by the searcher itself.

use crate::{
    computer::Computer,
    math::{phase_from_rad, C_IMAG, C_ONE, C_ZERO, FRAC_1_SQRT_2, FRAC_PI_4, M1, N},
};

/// Hadamard.
pub fn h(c: &mut dyn Computer, bit: N) {
    c.unitary(bit, &h_matrix());
}

/// Phase rotation by pi/4.
pub fn t(c: &mut dyn Computer, bit: N) {
    c.unitary(bit, &[C_ONE, C_ZERO, C_ZERO, phase_from_rad(FRAC_PI_4)]);
}

/// Phase rotation by -pi/4.
pub fn t_dgr(c: &mut dyn Computer, bit: N) {
    c.unitary(bit, &[C_ONE, C_ZERO, C_ZERO, phase_from_rad(-FRAC_PI_4)]);
}

/// NOT.
pub fn x(c: &mut dyn Computer, bit: N) {
    c.unitary(bit, &[C_ZERO, C_ONE, C_ONE, C_ZERO]);
}

/// Pauli Y.
pub fn y(c: &mut dyn Computer, bit: N) {
    c.unitary(bit, &[C_ZERO, -C_IMAG, C_IMAG, C_ZERO]);
}

/// Pauli Z.
pub fn z(c: &mut dyn Computer, bit: N) {
    c.unitary(bit, &[C_ONE, C_ZERO, C_ZERO, -C_ONE]);
}

/// Square root of NOT.
pub fn sqrt_not(c: &mut dyn Computer, bit: N) {
    h(c, bit);
    t_dgr(c, bit);
    t_dgr(c, bit);
    h(c, bit);
}

/// Inverse of [`sqrt_not`].
pub fn sqrt_not_dgr(c: &mut dyn Computer, bit: N) {
    h(c, bit);
    t(c, bit);
    t(c, bit);
    h(c, bit);
}

/// Square root of CNOT.
pub fn sqrt_cnot(c: &mut dyn Computer, control: N, target: N) {
    t_dgr(c, control);
    h(c, target);
    c.cnot(control, target);
    t(c, target);
    c.cnot(control, target);
    t_dgr(c, target);
    h(c, target);
}

/// Inverse of [`sqrt_cnot`].
pub fn sqrt_cnot_dgr(c: &mut dyn Computer, control: N, target: N) {
    h(c, target);
    t(c, target);
    c.cnot(control, target);
    t_dgr(c, target);
    c.cnot(control, target);
    h(c, target);
    t(c, control);
}

/// Swap of two qubits.
pub fn swap(c: &mut dyn Computer, a: N, b: N) {
    c.cnot(a, b);
    c.cnot(b, a);
    c.cnot(a, b);
}

/// Square root of the swap gate.
pub fn sqrt_swap(c: &mut dyn Computer, a: N, b: N) {
    t_dgr(c, a);
    t_dgr(c, a);
    c.cnot(a, b);
    h(c, a);
    t_dgr(c, b);
    c.cnot(a, b);
    t(c, b);
    t(c, b);
}

/// Inverse of [`sqrt_swap`].
pub fn sqrt_swap_dgr(c: &mut dyn Computer, a: N, b: N) {
    t_dgr(c, b);
    t_dgr(c, b);
    c.cnot(a, b);
    t(c, b);
    h(c, a);
    c.cnot(a, b);
    t(c, a);
    t(c, a);
}

/// The Hadamard matrix, for callers that compile controlled variants.
pub fn h_matrix() -> M1 {
    let s = C_ONE.scale(FRAC_1_SQRT_2);
    [s, s, s, -s]
}
