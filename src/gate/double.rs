use super::{ctrl, prim, Gate, GateKind};
use crate::{computer::Computer, math::N};

/// Controlled NOT.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CNotGate {
    control: N,
    target: N,
}

impl CNotGate {
    pub fn new(control: N, target: N) -> Self {
        Self { control, target }
    }
}

impl Gate for CNotGate {
    fn apply(&self, c: &mut dyn Computer) {
        c.cnot(self.control, self.target);
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("CX({},{})", self.control, self.target)
    }
}

/// Controlled Hadamard, compiled through the controlled-unitary
/// decomposition.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CHGate {
    control: N,
    target: N,
}

impl CHGate {
    pub fn new(control: N, target: N) -> Self {
        Self { control, target }
    }
}

impl Gate for CHGate {
    fn apply(&self, c: &mut dyn Computer) {
        ctrl::cond_unitary(c, self.control, self.target, &prim::h_matrix());
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("CH({},{})", self.control, self.target)
    }
}

/// Controlled square root of NOT. Two of these make one CNOT.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CSqrtNotGate {
    control: N,
    target: N,
    dgr: bool,
}

impl CSqrtNotGate {
    pub fn new(control: N, target: N) -> Self {
        Self {
            control,
            target,
            dgr: false,
        }
    }

    pub fn new_dgr(control: N, target: N) -> Self {
        Self {
            control,
            target,
            dgr: true,
        }
    }
}

impl Gate for CSqrtNotGate {
    fn apply(&self, c: &mut dyn Computer) {
        if self.dgr {
            prim::sqrt_cnot_dgr(c, self.control, self.target);
        } else {
            prim::sqrt_cnot(c, self.control, self.target);
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
        format!(
            "{}({},{})",
            if self.dgr { "CSXdg" } else { "CSX" },
            self.control,
            self.target
        )
    }
}

/// Swap of two qubits, as three CNOTs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SwapGate {
    a: N,
    b: N,
}

impl SwapGate {
    pub fn new(a: N, b: N) -> Self {
        Self { a, b }
    }
}

impl Gate for SwapGate {
    fn apply(&self, c: &mut dyn Computer) {
        prim::swap(c, self.a, self.b);
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("Swap({},{})", self.a, self.b)
    }
}

/// Square root of the swap gate.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SqrtSwapGate {
    a: N,
    b: N,
    dgr: bool,
}

impl SqrtSwapGate {
    pub fn new(a: N, b: N) -> Self {
        Self { a, b, dgr: false }
    }

    pub fn new_dgr(a: N, b: N) -> Self {
        Self { a, b, dgr: true }
    }
}

impl Gate for SqrtSwapGate {
    fn apply(&self, c: &mut dyn Computer) {
        if self.dgr {
            prim::sqrt_swap_dgr(c, self.a, self.b);
        } else {
            prim::sqrt_swap(c, self.a, self.b);
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
        format!(
            "{}({},{})",
            if self.dgr { "SqrtSwapdg" } else { "SqrtSwap" },
            self.a,
            self.b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{computer::Simulation, math::EPSILON};

    #[test]
    fn sqrt_cnot_squares_to_cnot() {
        for state in 0..4 {
            let mut s = Simulation::with_state(2, state);
            let sq = CSqrtNotGate::new(0, 1);
            sq.apply(&mut s);
            sq.apply(&mut s);
            s.cnot(0, 1);
            // Two half-CNOTs and one more CNOT cancel out.
            assert!((s.psi()[state].norm() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn sqrt_swap_squares_to_swap() {
        for state in 0..4 {
            let mut s = Simulation::with_state(2, state);
            let sq = SqrtSwapGate::new(0, 1);
            sq.apply(&mut s);
            sq.apply(&mut s);
            prim::swap(&mut s, 0, 1);
            assert!((s.psi()[state].norm() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn swap_on_classical_states() {
        let mut s = Simulation::with_state(2, 0b01);
        SwapGate::new(0, 1).apply(&mut s);
        assert!((s.psi()[0b10].norm() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn ch_matches_raw_rule() {
        let mut s1 = Simulation::random_seeded(2, 13);
        let mut s2 = s1.clone();

        CHGate::new(0, 1).apply(&mut s1);

        // Raw rule: for states with the control set, mix the target pair.
        let psi = s2.psi_mut();
        for i in 0..psi.len() {
            if i & 0b01 == 0 || i & 0b10 != 0 {
                continue;
            }
            let other = i | 0b10;
            let p0 = psi[i];
            let p1 = psi[other];
            psi[i] = (p0 + p1).unscale(std::f64::consts::SQRT_2);
            psi[other] = (p0 - p1).unscale(std::f64::consts::SQRT_2);
        }

        assert!(s1.approx_eq(&s2, EPSILON));
    }

    #[test]
    fn half_cnot_mixes_the_pair() {
        // CSX on |11> must split weight across the target pair.
        let mut s = Simulation::with_state(2, 0b11);
        CSqrtNotGate::new(0, 1).apply(&mut s);
        assert!(s.psi()[0b01].norm() > 0.1 && s.psi()[0b11].norm() > 0.1);
    }
}
