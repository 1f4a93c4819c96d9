use super::{prim, Gate, GateKind};
use crate::{
    computer::Computer,
    math::{phase_from_rad, C_ONE, C_ZERO, N, R},
};

/// Hadamard gate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HGate {
    bit: N,
}

impl HGate {
    pub fn new(bit: N) -> Self {
        Self { bit }
    }
}

impl Gate for HGate {
    fn apply(&self, c: &mut dyn Computer) {
        prim::h(c, self.bit);
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("H({})", self.bit)
    }
}

/// Pauli X gate, aka NOT.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct XGate {
    bit: N,
}

impl XGate {
    pub fn new(bit: N) -> Self {
        Self { bit }
    }
}

impl Gate for XGate {
    fn apply(&self, c: &mut dyn Computer) {
        prim::x(c, self.bit);
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("X({})", self.bit)
    }
}

/// Pauli Y gate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct YGate {
    bit: N,
}

impl YGate {
    pub fn new(bit: N) -> Self {
        Self { bit }
    }
}

impl Gate for YGate {
    fn apply(&self, c: &mut dyn Computer) {
        prim::y(c, self.bit);
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("Y({})", self.bit)
    }
}

/// Pauli Z gate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ZGate {
    bit: N,
}

impl ZGate {
    pub fn new(bit: N) -> Self {
        Self { bit }
    }
}

impl Gate for ZGate {
    fn apply(&self, c: &mut dyn Computer) {
        prim::z(c, self.bit);
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("Z({})", self.bit)
    }
}

/// Phase rotation by pi/4 (T), or by -pi/4 with the dagger flag set.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TGate {
    bit: N,
    dgr: bool,
}

impl TGate {
    pub fn new(bit: N) -> Self {
        Self { bit, dgr: false }
    }

    pub fn new_dgr(bit: N) -> Self {
        Self { bit, dgr: true }
    }
}

impl Gate for TGate {
    fn apply(&self, c: &mut dyn Computer) {
        if self.dgr {
            prim::t_dgr(c, self.bit);
        } else {
            prim::t(c, self.bit);
        }
    }

    fn dgr(&self) -> GateKind {
        Self {
            dgr: !self.dgr,
            ..*self
        }
        .into()
    }

    fn name(&self) -> String {
        format!("{}({})", if self.dgr { "Tdg" } else { "T" }, self.bit)
    }
}

/// Square root of NOT, spelled out of H and T gates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SqrtNotGate {
    bit: N,
    dgr: bool,
}

impl SqrtNotGate {
    pub fn new(bit: N) -> Self {
        Self { bit, dgr: false }
    }

    pub fn new_dgr(bit: N) -> Self {
        Self { bit, dgr: true }
    }
}

impl Gate for SqrtNotGate {
    fn apply(&self, c: &mut dyn Computer) {
        if self.dgr {
            prim::sqrt_not_dgr(c, self.bit);
        } else {
            prim::sqrt_not(c, self.bit);
        }
    }

    fn dgr(&self) -> GateKind {
        Self {
            dgr: !self.dgr,
            ..*self
        }
        .into()
    }

    fn name(&self) -> String {
        format!("{}({})", if self.dgr { "SXdg" } else { "SX" }, self.bit)
    }
}

/// Phase rotation of |1> by an arbitrary angle in radians.
#[derive(Clone, Copy, PartialEq)]
pub struct PhaseGate {
    bit: N,
    rad: R,
}

impl PhaseGate {
    pub fn new(bit: N, rad: R) -> Self {
        Self { bit, rad }
    }
}

impl Gate for PhaseGate {
    fn apply(&self, c: &mut dyn Computer) {
        c.unitary(self.bit, &[C_ONE, C_ZERO, C_ZERO, phase_from_rad(self.rad)]);
    }

    fn dgr(&self) -> GateKind {
        Self {
            rad: -self.rad,
            ..*self
        }
        .into()
    }

    fn name(&self) -> String {
        format!("P({:.4},{})", self.rad, self.bit)
    }
}
