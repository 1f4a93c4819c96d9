pub use std::f64::consts::*;

pub use self::{consts::*, types::*};

pub mod approx_cmp;
pub mod matrix;

mod consts {
    use super::types::*;

    pub const C_ONE: C = C { re: 1., im: 0. };
    pub const C_ZERO: C = C { re: 0., im: 0. };
    pub const C_IMAG: C = C { re: 0., im: 1. };

    /// Amplitudes closer than this are considered equal.
    pub const EPSILON: R = 1e-8;
}

pub(crate) mod types {
    pub type N = usize;
    pub type Z = isize;

    pub type R = f64;
    pub type C = num_complex::Complex<R>;

    /// Row-major 2x2 complex matrix: `[m11, m12, m21, m22]`.
    pub type M1 = [C; 4];
}

#[inline]
pub fn count_bits(n: N) -> N {
    n.count_ones() as N
}

#[inline]
pub fn phase_from_rad(rad: R) -> C {
    C::from_polar(1.0, rad)
}
