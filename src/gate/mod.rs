//! Quantum gates.
//!
//! A [`Gate`] is anything that can rewrite a [`Computer`] and produce its
//! own exact inverse. The concrete gates form the [`GateKind`] sum type, so
//! circuits, search baskets and hash tables hold plain values with static
//! dispatch. Gate bodies never touch amplitudes directly: they compile
//! themselves down to the primitive unitary / CNOT / permutation calls of
//! the [`Computer`] they are applied to, which is what lets the adapter
//! computers (conditioning, remapping, inversion) reinterpret them.

use std::fmt;

use crate::{
    computer::{CondComputer, Computer, MappedComputer},
    math::{N, R},
    register::Reg,
};

pub mod ctrl;
pub mod prim;
pub mod toffoli;

mod circuit;
mod classical;
mod double;
mod func;
mod single;
mod triple;

pub use self::{
    circuit::Circuit,
    classical::ClassicalGate,
    double::{CHGate, CNotGate, CSqrtNotGate, SqrtSwapGate, SwapGate},
    func::FnGate,
    single::{HGate, PhaseGate, SqrtNotGate, TGate, XGate, YGate, ZGate},
    triple::{CCNotGate, CSwapGate},
};

/// A primitive or composite quantum operation.
#[enum_dispatch::enum_dispatch(GateKind)]
pub trait Gate {
    /// Apply the gate to a computer. `apply` then [`dgr`](Gate::dgr)'s
    /// `apply` leaves any state unchanged to within float error.
    fn apply(&self, c: &mut dyn Computer);

    /// The exact inverse gate.
    fn dgr(&self) -> GateKind;

    fn name(&self) -> String;
}

#[enum_dispatch::enum_dispatch]
#[derive(Clone)]
pub enum GateKind {
    HGate,
    XGate,
    YGate,
    ZGate,
    TGate,
    PhaseGate,
    SqrtNotGate,
    CNotGate,
    CHGate,
    CSqrtNotGate,
    SwapGate,
    SqrtSwapGate,
    CCNotGate,
    CSwapGate,
    Circuit,
    ClassicalGate,
    FnGate,
}

impl fmt::Debug for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn h(bit: N) -> GateKind {
    HGate::new(bit).into()
}

pub fn x(bit: N) -> GateKind {
    XGate::new(bit).into()
}

pub fn y(bit: N) -> GateKind {
    YGate::new(bit).into()
}

pub fn z(bit: N) -> GateKind {
    ZGate::new(bit).into()
}

pub fn t(bit: N) -> GateKind {
    TGate::new(bit).into()
}

pub fn t_dgr(bit: N) -> GateKind {
    TGate::new_dgr(bit).into()
}

pub fn phase(rad: R, bit: N) -> GateKind {
    PhaseGate::new(bit, rad).into()
}

pub fn sqrt_not(bit: N) -> GateKind {
    SqrtNotGate::new(bit).into()
}

pub fn sqrt_not_dgr(bit: N) -> GateKind {
    SqrtNotGate::new_dgr(bit).into()
}

pub fn cnot(control: N, target: N) -> GateKind {
    CNotGate::new(control, target).into()
}

pub fn ch(control: N, target: N) -> GateKind {
    CHGate::new(control, target).into()
}

pub fn c_sqrt_not(control: N, target: N) -> GateKind {
    CSqrtNotGate::new(control, target).into()
}

pub fn c_sqrt_not_dgr(control: N, target: N) -> GateKind {
    CSqrtNotGate::new_dgr(control, target).into()
}

pub fn swap(a: N, b: N) -> GateKind {
    SwapGate::new(a, b).into()
}

pub fn sqrt_swap(a: N, b: N) -> GateKind {
    SqrtSwapGate::new(a, b).into()
}

pub fn sqrt_swap_dgr(a: N, b: N) -> GateKind {
    SqrtSwapGate::new_dgr(a, b).into()
}

pub fn ccnot(control1: N, control2: N, target: N) -> GateKind {
    CCNotGate::new(control1, control2, target).into()
}

pub fn cswap(control: N, a: N, b: N) -> GateKind {
    CSwapGate::new(control, a, b).into()
}

/// The usual universal search basket: H, T, Tdg, X, Y, Z on every wire and
/// CNOT on every ordered wire pair.
pub fn standard_basis(num_bits: N) -> Vec<GateKind> {
    let mut basis = Vec::new();
    for bit in 0..num_bits {
        basis.push(h(bit));
        basis.push(t(bit));
        basis.push(t_dgr(bit));
        basis.push(x(bit));
        basis.push(y(bit));
        basis.push(z(bit));
    }
    for control in 0..num_bits {
        for target in 0..num_bits {
            if control != target {
                basis.push(cnot(control, target));
            }
        }
    }
    basis
}

/// Lift an `n`-wire gate to an `n+1`-wire gate controlled by wire 0, with
/// the body acting on wires `1..=n`. The lifted gate is compiled on the fly
/// through a conditioning adapter, so it works on any computer.
pub fn controlled(g: GateKind) -> FnGate {
    let name = format!("Ctrl({})", g.name());
    let inv = g.dgr();
    FnGate::new(
        name,
        move |c: &mut dyn Computer| {
            let mapping = Reg::range(1, c.num_bits() - 1);
            let mut cond = CondComputer::new(c, 0);
            g.apply(&mut MappedComputer::new(&mut cond, mapping));
        },
        move |c: &mut dyn Computer| {
            let mapping = Reg::range(1, c.num_bits() - 1);
            let mut cond = CondComputer::new(c, 0);
            inv.apply(&mut MappedComputer::new(&mut cond, mapping));
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{computer::Simulation, math::EPSILON};

    /// Every basis gate followed by its inverse is the identity, on every
    /// register width up to 8 wires.
    #[test]
    fn basis_round_trip() {
        for num_bits in 1..=8 {
            let s0 = Simulation::random_seeded(num_bits, num_bits as u64);
            for g in standard_basis(num_bits) {
                let mut s = s0.clone();
                g.apply(&mut s);
                g.dgr().apply(&mut s);
                assert!(
                    s.approx_eq(&s0, EPSILON),
                    "{} does not round-trip on {} wires",
                    g,
                    num_bits
                );
            }
        }
    }

    #[test]
    fn derived_gates_round_trip() {
        let gates = vec![
            phase(1.25, 0),
            sqrt_not(1),
            sqrt_not_dgr(0),
            ch(0, 2),
            c_sqrt_not(2, 0),
            c_sqrt_not_dgr(1, 2),
            swap(0, 2),
            sqrt_swap(1, 2),
            sqrt_swap_dgr(2, 0),
            ccnot(0, 1, 2),
            cswap(2, 0, 1),
        ];
        let s0 = Simulation::random_seeded(3, 99);
        for g in gates {
            let mut s = s0.clone();
            g.apply(&mut s);
            g.dgr().apply(&mut s);
            assert!(s.approx_eq(&s0, EPSILON), "{} does not round-trip", g);
        }
    }

    #[test]
    fn controlled_lift() {
        // Ctrl(X on wire 0) over 2 wires is CNOT(0, 1).
        let lifted = controlled(x(0));
        let mut s1 = Simulation::random_seeded(2, 7);
        let mut s2 = s1.clone();

        lifted.apply(&mut s1);
        s2.cnot(0, 1);

        assert!(s1.approx_eq(&s2, EPSILON));
    }

    #[test]
    fn controlled_swap_matches_cswap() {
        let lifted = controlled(swap(0, 1));
        let mut s1 = Simulation::random_seeded(3, 8);
        let mut s2 = s1.clone();

        lifted.apply(&mut s1);
        cswap(0, 1, 2).apply(&mut s2);

        assert!(s1.approx_eq(&s2, EPSILON));
    }
}
