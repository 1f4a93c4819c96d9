//! Reversible arithmetic compiled from CNOT / Toffoli networks: in-place
//! ripple-carry addition and subtraction, comparison, and modular addition.
//!
//! All routines take registers of qubit indices, panic on overlapping or
//! invalid arguments, and leave every qubit they do not name untouched.

use crate::{
    computer::{invert, CondComputer, Computer},
    gate::{prim, toffoli::ccnot, GateKind},
    math::N,
    register::Reg,
};

/// Add the value of `source` into `target`: `t := (s + t) mod 2^n`, with an
/// optional carry qubit flipped when the addition wraps.
///
/// The registers must be the same width, valid, and pairwise disjoint from
/// each other and the carry. In-place ripple-carry network after
/// <https://arxiv.org/abs/0910.2530>; `source` is restored by the end.
pub fn add(c: &mut dyn Computer, source: &Reg, target: &Reg, carry: Option<N>) {
    check_add_args(source, target, carry);

    if source.len() == 1 {
        if let Some(carry) = carry {
            ccnot(c, source[0], target[0], carry);
        }
        c.cnot(source[0], target[0]);
        return;
    }

    let n = source.len();

    // Step 1: fan the high source bits into the target.
    for i in 1..n {
        c.cnot(source[i], target[i]);
    }

    // Step 2: thread the carry chain through the source.
    if let Some(carry) = carry {
        c.cnot(source[n - 1], carry);
    }
    for i in (1..n - 1).rev() {
        c.cnot(source[i], source[i + 1]);
    }

    // Step 3: generate carries.
    for i in 0..n - 1 {
        ccnot(c, source[i], target[i], source[i + 1]);
    }
    if let Some(carry) = carry {
        ccnot(c, source[n - 1], target[n - 1], carry);
    }

    // Step 4: ripple back, producing the sum bits.
    for i in (1..n).rev() {
        c.cnot(source[i], target[i]);
        ccnot(c, source[i - 1], target[i - 1], source[i]);
    }

    // Step 5: unthread the carry chain.
    for i in 1..n - 1 {
        c.cnot(source[i], source[i + 1]);
    }

    // Step 6: final sum bits.
    for i in 0..n {
        c.cnot(source[i], target[i]);
    }
}

/// Exact inverse of [`add`]: `t := (t - s) mod 2^n`, with the carry qubit
/// flipped when the subtraction borrows.
pub fn sub(c: &mut dyn Computer, source: &Reg, target: &Reg, carry: Option<N>) {
    check_add_args(source, target, carry);
    let (source, target) = (source.clone(), target.clone());
    invert(c, move |c| add(c, &source, &target, carry));
}

/// Flip `target` when the value of `a` is less than the value of `b`.
///
/// Complement-and-add: the carry of `b + !a` is set exactly when `a < b`.
/// Both registers are restored.
pub fn lt(c: &mut dyn Computer, a: &Reg, b: &Reg, target: N) {
    assert!(
        a.valid() && b.valid() && a.len() == b.len(),
        "invalid comparison registers"
    );
    let t_reg = Reg::new(vec![target]);
    assert!(
        !a.overlaps(b) && !a.overlaps(&t_reg) && !b.overlaps(&t_reg),
        "comparison registers overlap"
    );

    for &bit in a {
        prim::x(c, bit);
    }
    add(c, b, a, Some(target));
    sub(c, b, a, None);
    for &bit in a {
        prim::x(c, bit);
    }
}

/// Modular addition `t := (s + t) mod m` for register-held modulus.
///
/// Requires `s < m`, `t < m`, `m > 0` and the working qubit clear; states
/// violating this are not meaningful. Add with carry, subtract the modulus,
/// conditionally re-add it, then uncompute the sign by comparison.
pub fn mod_add(c: &mut dyn Computer, source: &Reg, target: &Reg, modulus: &Reg, working: N) {
    let w_reg = Reg::new(vec![working]);
    assert!(
        modulus.valid()
            && modulus.len() == source.len()
            && !modulus.overlaps(source)
            && !modulus.overlaps(target)
            && !modulus.overlaps(&w_reg)
            && !source.overlaps(&w_reg)
            && !target.overlaps(&w_reg),
        "invalid modular addition registers"
    );

    // (working, target) now holds s + t as an (n+1)-bit value.
    add(c, source, target, Some(working));
    // Subtract m from the full value; working becomes the sign, i.e.
    // [s + t < m].
    sub(c, modulus, target, Some(working));

    // Re-add m exactly when the subtraction went negative.
    {
        let mut cond = CondComputer::new(c, working);
        add(&mut cond, modulus, target, None);
    }

    // The sign bit equals [t >= s] now; clear it by comparison.
    prim::x(c, working);
    lt(c, target, source, working);
}

/// Classical constant addition into a register, with optional carry, as a
/// basis-permuting gate. Useful as a search target.
pub fn const_adder(value: N, target: Reg, carry: Option<N>) -> GateKind {
    assert!(target.valid(), "invalid target register");
    let name = format!("ConstAdd({})", value);
    let gate = crate::gate::ClassicalGate::new(name, move |state| {
        let input = target.extract(state);
        let sum = input.wrapping_add(value);
        let carry_bit = sum & (1 << target.len());
        let mut res = target.inject(state, sum & ((1 << target.len()) - 1));
        if let Some(carry) = carry {
            if carry_bit != 0 {
                res ^= 1 << carry;
            }
        }
        res
    });
    gate.into()
}

fn check_add_args(source: &Reg, target: &Reg, carry: Option<N>) {
    let carry_reg = Reg::new(carry.into_iter().collect());
    assert!(
        source.valid()
            && target.valid()
            && source.len() == target.len()
            && !source.is_empty()
            && !source.overlaps(target)
            && !source.overlaps(&carry_reg)
            && !target.overlaps(&carry_reg),
        "invalid addition registers"
    );
}
