use super::Computer;
use crate::{
    gate::{ctrl, toffoli},
    math::{M1, N},
};

/// Reinterprets every operation as conditioned on one extra qubit: plain
/// unitaries become compiled controlled-unitaries, CNOTs become Toffolis,
/// and basis permutations only move labels whose condition bit is set.
///
/// Gates applied through the adapter keep their own wire indices and must
/// simply avoid the condition wire, which is reported as in-use.
pub struct CondComputer<'a> {
    c: &'a mut dyn Computer,
    bit: N,
}

impl<'a> CondComputer<'a> {
    pub fn new(c: &'a mut dyn Computer, bit: N) -> Self {
        assert!(bit < c.num_bits(), "condition bit out of range");
        Self { c, bit }
    }
}

impl Computer for CondComputer<'_> {
    fn num_bits(&self) -> N {
        self.c.num_bits()
    }

    fn unitary(&mut self, target: N, u: &M1) {
        assert!(target != self.bit, "gate touches the condition bit");
        ctrl::cond_unitary(self.c, self.bit, target, u);
    }

    fn cnot(&mut self, control: N, target: N) {
        assert!(
            control != self.bit && target != self.bit,
            "gate touches the condition bit"
        );
        toffoli::ccnot(self.c, self.bit, control, target);
    }

    fn in_use(&self, bit: N) -> bool {
        bit == self.bit || self.c.in_use(bit)
    }

    fn permute(&mut self, f: &mut dyn FnMut(N) -> N) {
        let mask = 1 << self.bit;
        self.c.permute(&mut |state| {
            if state & mask != 0 {
                f(state)
            } else {
                state
            }
        });
    }
}
