use super::{toffoli, Gate, GateKind};
use crate::{computer::Computer, math::N};

/// Doubly-controlled NOT (Toffoli), compiled to the standard 15-gate
/// H/T/Tdg/CNOT circuit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CCNotGate {
    control1: N,
    control2: N,
    target: N,
}

impl CCNotGate {
    pub fn new(control1: N, control2: N, target: N) -> Self {
        Self {
            control1,
            control2,
            target,
        }
    }
}

impl Gate for CCNotGate {
    fn apply(&self, c: &mut dyn Computer) {
        toffoli::ccnot(c, self.control1, self.control2, self.target);
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("CCX({},{},{})", self.control1, self.control2, self.target)
    }
}

/// Controlled swap (Fredkin), as a Toffoli conjugated by CNOTs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CSwapGate {
    control: N,
    a: N,
    b: N,
}

impl CSwapGate {
    pub fn new(control: N, a: N, b: N) -> Self {
        Self { control, a, b }
    }
}

impl Gate for CSwapGate {
    fn apply(&self, c: &mut dyn Computer) {
        c.cnot(self.b, self.a);
        toffoli::ccnot(c, self.control, self.a, self.b);
        c.cnot(self.b, self.a);
    }

    fn dgr(&self) -> GateKind {
        (*self).into()
    }

    fn name(&self) -> String {
        format!("CSwap({},{},{})", self.control, self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{computer::Simulation, math::EPSILON};

    #[test]
    fn ccnot_truth_table() {
        for state in 0..8 {
            let mut s = Simulation::with_state(3, state);
            CCNotGate::new(0, 1, 2).apply(&mut s);
            let expect = state ^ (((state & 1) << 2) & ((state & 2) << 1));
            assert!(
                (s.psi()[expect].norm() - 1.0).abs() < EPSILON,
                "wrong output for |{:03b}>",
                state
            );
        }
    }

    #[test]
    fn cswap_truth_table() {
        for state in 0..8 {
            let mut s = Simulation::with_state(3, state);
            CSwapGate::new(0, 1, 2).apply(&mut s);
            let expect = if state & 1 != 0 {
                (state & 1) | ((state & 0b010) << 1) | ((state & 0b100) >> 1)
            } else {
                state
            };
            assert!(
                (s.psi()[expect].norm() - 1.0).abs() < EPSILON,
                "wrong output for |{:03b}>",
                state
            );
        }
    }
}
