use super::Computer;
use crate::math::{matrix::dagger_m1, M1, N};

enum TapeOp {
    Unitary(N, M1),
    CNot(N, N),
}

/// A computer that records every primitive it receives so the recording can
/// later be replayed as the exact inverse. With `forward` set the primitives
/// are also applied to the inner computer as they arrive.
pub struct InvertTape<'a> {
    c: &'a mut dyn Computer,
    ops: Vec<TapeOp>,
    forward: bool,
}

impl<'a> InvertTape<'a> {
    pub fn new(c: &'a mut dyn Computer, forward: bool) -> Self {
        Self {
            c,
            ops: Vec::new(),
            forward,
        }
    }

    fn into_ops(self) -> Vec<TapeOp> {
        self.ops
    }
}

impl Computer for InvertTape<'_> {
    fn num_bits(&self) -> N {
        self.c.num_bits()
    }

    fn unitary(&mut self, target: N, u: &M1) {
        self.ops.push(TapeOp::Unitary(target, *u));
        if self.forward {
            self.c.unitary(target, u);
        }
    }

    fn cnot(&mut self, control: N, target: N) {
        self.ops.push(TapeOp::CNot(control, target));
        if self.forward {
            self.c.cnot(control, target);
        }
    }

    fn in_use(&self, bit: N) -> bool {
        self.c.in_use(bit)
    }

    fn permute(&mut self, _f: &mut dyn FnMut(N) -> N) {
        panic!("a basis permutation cannot be recorded for inversion");
    }
}

fn replay_inverse(c: &mut dyn Computer, ops: &[TapeOp]) {
    for op in ops.iter().rev() {
        match op {
            TapeOp::Unitary(target, u) => c.unitary(*target, &dagger_m1(u)),
            TapeOp::CNot(control, target) => c.cnot(*control, *target),
        }
    }
}

/// Apply the inverse of `f` to the computer.
pub fn invert(c: &mut dyn Computer, f: impl FnOnce(&mut dyn Computer)) {
    let ops = {
        let mut tape = InvertTape::new(c, false);
        f(&mut tape);
        tape.into_ops()
    };
    replay_inverse(c, &ops);
}

/// Apply `a`, then `b`, then the inverse of `a`. Useful for computing into
/// scratch qubits and cleaning them up afterwards.
pub fn conj(
    c: &mut dyn Computer,
    a: impl FnOnce(&mut dyn Computer),
    b: impl FnOnce(&mut dyn Computer),
) {
    let ops = {
        let mut tape = InvertTape::new(c, true);
        a(&mut tape);
        tape.into_ops()
    };
    b(c);
    replay_inverse(c, &ops);
}
