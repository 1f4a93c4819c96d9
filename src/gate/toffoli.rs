//! Toffoli gates: the two-control compilation and the n-control cascade of
//! Barenco et al. lemmas 7.2 / 7.3.

use crate::{computer::Computer, math::N};

use super::prim::{h, t, t_dgr, x};

/// Doubly-controlled NOT, as the standard 15-gate H/T/Tdg/CNOT circuit.
pub fn ccnot(c: &mut dyn Computer, control1: N, control2: N, target: N) {
    h(c, target);
    c.cnot(control2, target);
    t_dgr(c, target);
    c.cnot(control1, target);
    t(c, target);
    c.cnot(control2, target);
    t_dgr(c, target);
    c.cnot(control1, target);
    t(c, control2);
    t(c, target);
    h(c, target);
    c.cnot(control1, control2);
    t(c, control1);
    t_dgr(c, control2);
    c.cnot(control1, control2);
}

/// NOT on `target` controlled by every qubit in `control`.
///
/// With three or more controls this borrows working qubits that are neither
/// targets, controls, nor reserved (`in_use`). When at least
/// `control.len() - 2` working qubits are free it runs the lemma 7.2
/// cascade of Toffolis and its uncompute; otherwise it recurses through a
/// single working qubit by lemma 7.3. Panics when the computer has no free
/// qubit at all.
pub fn toffoli_n(c: &mut dyn Computer, target: N, control: &[N]) {
    match control.len() {
        0 => x(c, target),
        1 => c.cnot(control[0], target),
        2 => ccnot(c, control[0], control[1], target),
        _ => {
            let working = alloc_working(c, target, control);
            assert!(!working.is_empty(), "not enough working qubits");

            if working.len() >= control.len() - 2 {
                let mut targets: Vec<N> = working[..control.len() - 2].to_vec();
                targets.push(target);

                for i in (2..control.len()).rev() {
                    ccnot(c, control[i], targets[i - 2], targets[i - 1]);
                }
                ccnot(c, control[0], control[1], targets[0]);
                for i in 2..control.len() {
                    ccnot(c, control[i], targets[i - 2], targets[i - 1]);
                }

                // Undo the side effects on the borrowed qubits.
                for i in (2..control.len() - 1).rev() {
                    ccnot(c, control[i], targets[i - 2], targets[i - 1]);
                }
                ccnot(c, control[0], control[1], targets[0]);
                for i in 2..control.len() - 1 {
                    ccnot(c, control[i], targets[i - 2], targets[i - 1]);
                }
            } else {
                let size = (control.len() + 2) / 2;
                let control1 = &control[..size];
                let mut control2 = vec![working[0]];
                control2.extend_from_slice(&control[size..]);

                toffoli_n(c, working[0], control1);
                toffoli_n(c, target, &control2);
                toffoli_n(c, working[0], control1);
                toffoli_n(c, target, &control2);
            }
        }
    }
}

fn alloc_working(c: &mut dyn Computer, target: N, control: &[N]) -> Vec<N> {
    (0..c.num_bits())
        .filter(|&i| i != target && !control.contains(&i) && !c.in_use(i))
        .collect()
}
