use std::sync::Arc;

use super::{Gate, GateKind};
use crate::{computer::Computer, math::N};

/// A reversible classical function lifted to a basis-permuting unitary.
///
/// Wraps `f` over basis labels; the forward direction moves the amplitude
/// at label `i` to label `f(i)`, the inverted direction reads the mapping
/// in reverse. `f` must be a bijection on `[0, 2^n)` for the computer it is
/// applied to. The wrapper trusts this, and the simulation aborts if the
/// trust is misplaced.
#[derive(Clone)]
pub struct ClassicalGate {
    name: String,
    f: Arc<dyn Fn(N) -> N + Send + Sync>,
    inverted: bool,
}

impl ClassicalGate {
    pub fn new(name: impl Into<String>, f: impl Fn(N) -> N + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            f: Arc::new(f),
            inverted: false,
        }
    }
}

impl Gate for ClassicalGate {
    fn apply(&self, c: &mut dyn Computer) {
        if self.inverted {
            // The inverse permutation is only known by tabulating f.
            let size = 1usize << c.num_bits();
            let mut inv = vec![0; size];
            for i in 0..size {
                let j = (self.f)(i);
                assert!(j < size, "classical function escapes the state space");
                inv[j] = i;
            }
            c.permute(&mut |i| inv[i]);
        } else {
            let f = &self.f;
            c.permute(&mut |i| f(i));
        }
    }

    fn dgr(&self) -> GateKind {
        Self {
            name: self.name.clone(),
            f: Arc::clone(&self.f),
            inverted: !self.inverted,
        }
        .into()
    }

    fn name(&self) -> String {
        if self.inverted {
            format!("{}'", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{computer::Simulation, gate, math::EPSILON};

    fn cswap_classical() -> ClassicalGate {
        ClassicalGate::new("CSwapFn", |i| {
            if i & 1 != 0 {
                (i & !0b110) | ((i & 0b010) << 1) | ((i & 0b100) >> 1)
            } else {
                i
            }
        })
    }

    #[test]
    fn matches_compiled_cswap() {
        let mut s1 = Simulation::random_seeded(3, 61);
        let mut s2 = s1.clone();

        cswap_classical().apply(&mut s1);
        gate::cswap(0, 1, 2).apply(&mut s2);

        assert!(s1.approx_eq(&s2, EPSILON));
    }

    #[test]
    fn inverse_round_trip() {
        let add_one = ClassicalGate::new("AddOne", |i| (i + 1) & 0b1111);

        let mut s = Simulation::random_seeded(4, 62);
        let original = s.clone();

        add_one.apply(&mut s);
        assert!(!s.approx_eq(&original, EPSILON));
        add_one.dgr().apply(&mut s);
        assert!(s.approx_eq(&original, EPSILON));
    }

    #[test]
    #[should_panic(expected = "not a bijection")]
    fn rejects_non_bijection() {
        let squash = ClassicalGate::new("Squash", |_| 0);
        let mut s = Simulation::random_seeded(2, 63);
        squash.apply(&mut s);
    }
}
