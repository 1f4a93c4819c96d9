//! Compilation of an arbitrary controlled single-qubit unitary into basis
//! primitives, via the ABC decomposition of Barenco et al.
//! (<https://arxiv.org/abs/quant-ph/9503016>).

use crate::{
    computer::Computer,
    math::{matrix::mul_m1, phase_from_rad, C_ONE, C_ZERO, M1, N, R},
};

/// Emit a gate sequence realizing "if qubit `control` is 1, apply `u` to
/// qubit `target`", using only single-qubit unitaries and CNOTs.
///
/// Exact up to floating-point error. Diagonal and anti-diagonal matrices
/// take dedicated short routes; everything else goes through the general
/// decomposition `u = e^(i delta) A X B X C` with `A B C = I`.
pub fn cond_unitary(c: &mut dyn Computer, control: N, target: N, u: &M1) {
    debug_assert!(crate::math::matrix::is_unitary_m1(u));

    if u[0b01] == C_ZERO && u[0b10] == C_ZERO {
        if u[0b00] == u[0b11] {
            // A conditioned global phase lives entirely on the control.
            c.unitary(control, &[C_ONE, C_ZERO, C_ZERO, u[0b00]]);
        } else if u[0b00] == C_ONE {
            let s = u[0b11].sqrt();
            let root: M1 = [C_ONE, C_ZERO, C_ZERO, s];
            let root_dgr: M1 = [C_ONE, C_ZERO, C_ZERO, s.conj()];
            c.unitary(control, &root);
            c.cnot(control, target);
            c.unitary(target, &root_dgr);
            c.cnot(control, target);
            c.unitary(target, &root);
        } else {
            let phase = u[0b00];
            cond_unitary(c, control, target, &[phase, C_ZERO, C_ZERO, phase]);
            cond_unitary(
                c,
                control,
                target,
                &[C_ONE, C_ZERO, C_ZERO, u[0b11] / phase],
            );
        }
        return;
    } else if u[0b00] == C_ZERO && u[0b11] == C_ZERO {
        cond_unitary(c, control, target, &[u[0b10], C_ZERO, C_ZERO, u[0b01]]);
        c.cnot(control, target);
        return;
    }

    let theta = 2.0 * u[0b01].norm().atan2(u[0b00].norm());
    let alpha = (u[0b00] / -u[0b10]).arg();

    // Extract beta and delta from whichever entries carry the larger
    // magnitude, so near-diagonal and near-anti-diagonal matrices stay
    // numerically stable.
    let (beta, delta) = if u[0b00].norm() >= u[0b10].norm() {
        let beta = ((u[0b00] / u[0b11]) * phase_from_rad(-alpha)).arg();
        let delta = (u[0b00] * phase_from_rad(-(alpha + beta) / 2.0)).arg();
        (beta, delta)
    } else {
        let beta = ((-u[0b10] / u[0b01]) * phase_from_rad(alpha)).arg();
        let delta = (u[0b01] * phase_from_rad(-(alpha - beta) / 2.0)).arg();
        (beta, delta)
    };

    let mat_a = mul_m1(&rotate_z(alpha), &rotate_y(theta / 2.0));
    let mat_b = mul_m1(&rotate_y(-theta / 2.0), &rotate_z(-(alpha + beta) / 2.0));
    let mat_c = rotate_z((beta - alpha) / 2.0);

    c.unitary(target, &mat_c);
    c.cnot(control, target);
    c.unitary(target, &mat_b);
    c.cnot(control, target);
    c.unitary(target, &mat_a);

    let ph = phase_from_rad(delta);
    cond_unitary(c, control, target, &[ph, C_ZERO, C_ZERO, ph]);
}

fn rotate_y(theta: R) -> M1 {
    let cos = C_ONE.scale((theta / 2.0).cos());
    let sin = C_ONE.scale((theta / 2.0).sin());
    [cos, sin, -sin, cos]
}

fn rotate_z(alpha: R) -> M1 {
    let num = phase_from_rad(alpha / 2.0);
    [num, C_ZERO, C_ZERO, num.conj()]
}
