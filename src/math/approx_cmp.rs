pub(crate) use float_cmp::approx_eq;

use super::{types::*, EPSILON};

const ULPS: i64 = 2;

#[inline]
pub(crate) fn approx_cmp(x: R, y: R) -> bool {
    approx_eq!(R, x, y, epsilon = EPSILON, ulps = ULPS)
}

#[inline]
pub(crate) fn approx_eq_c(a: &C, b: &C) -> bool {
    approx_cmp(a.re, b.re) && approx_cmp(a.im, b.im)
}
