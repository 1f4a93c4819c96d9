#![allow(clippy::identity_op)]

use rand::prelude::*;
use rand_distr::StandardNormal;

use super::{approx_cmp::*, types::*};

pub fn is_diagonal_m1(u: &M1) -> bool {
    approx_cmp(u[0b01].norm_sqr(), 0.0) && approx_cmp(u[0b10].norm_sqr(), 0.0)
}

pub fn is_unitary_m1(u: &M1) -> bool {
    let e00 = u[0b00].norm_sqr() + u[0b01].norm_sqr();
    let e11 = u[0b10].norm_sqr() + u[0b11].norm_sqr();
    let e01 = u[0b00] * u[0b10].conj() + u[0b01] * u[0b11].conj();

    approx_cmp(e00, 1.0) && approx_cmp(e11, 1.0) && approx_cmp(e01.norm_sqr(), 0.0)
}

/// Conjugate transpose, which is the inverse for unitary matrices.
pub fn dagger_m1(u: &M1) -> M1 {
    let [u00, u01, u10, u11] = u;
    [u00.conj(), u10.conj(), u01.conj(), u11.conj()]
}

pub fn mul_m1(a: &M1, b: &M1) -> M1 {
    [
        a[0b00] * b[0b00] + a[0b01] * b[0b10],
        a[0b00] * b[0b01] + a[0b01] * b[0b11],
        a[0b10] * b[0b00] + a[0b11] * b[0b10],
        a[0b10] * b[0b01] + a[0b11] * b[0b11],
    ]
}

/// Principal square root of a 2x2 matrix, via the closed form
/// `(M + sqrt(det) I) / sqrt(tr + 2 sqrt(det))`.
pub fn sqrt_m1(u: &M1) -> M1 {
    let det = u[0b00] * u[0b11] - u[0b01] * u[0b10];
    let trace = u[0b00] + u[0b11];

    let s = det.sqrt();
    let t = (trace + s.scale(2.0)).sqrt();

    [(u[0b00] + s) / t, u[0b01] / t, u[0b10] / t, (u[0b11] + s) / t]
}

/// A Haar-ish random 2x2 unitary: complex Gaussian entries followed by
/// Gram-Schmidt on the columns.
pub fn random_unitary_m1(rng: &mut impl Rng) -> M1 {
    let mut g = || -> C { C::new(rng.sample(StandardNormal), rng.sample(StandardNormal)) };
    let mut u = [g(), g(), g(), g()];

    let norm = (u[0b00].norm_sqr() + u[0b10].norm_sqr()).sqrt();
    u[0b00] = u[0b00].unscale(norm);
    u[0b10] = u[0b10].unscale(norm);

    let dot = u[0b01] * u[0b00].conj() + u[0b11] * u[0b10].conj();
    u[0b01] -= u[0b00] * dot;
    u[0b11] -= u[0b10] * dot;

    let norm = (u[0b01].norm_sqr() + u[0b11].norm_sqr()).sqrt();
    u[0b01] = u[0b01].unscale(norm);
    u[0b11] = u[0b11].unscale(norm);

    u
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::C_ONE;

    #[test]
    fn random_unitary() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let u = random_unitary_m1(&mut rng);
            assert!(is_unitary_m1(&u));
            assert!(is_unitary_m1(&dagger_m1(&u)));

            let id = mul_m1(&u, &dagger_m1(&u));
            assert!(is_diagonal_m1(&id));
            assert!(approx_eq_c(&id[0b00], &C_ONE));
            assert!(approx_eq_c(&id[0b11], &C_ONE));
        }
    }

    #[test]
    fn matrix_sqrt() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..10 {
            let u = random_unitary_m1(&mut rng);
            let s = sqrt_m1(&u);
            let sq = mul_m1(&s, &s);
            for i in 0..4 {
                assert!(approx_eq_c(&sq[i], &u[i]));
            }
        }
    }
}
