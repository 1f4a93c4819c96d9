use std::{
    fmt,
    iter::FromIterator,
    ops::{Deref, DerefMut, Mul, MulAssign},
};

use super::{Gate, GateKind};
use crate::computer::Computer;

/// An ordered sequence of gates.
///
/// Application is left-to-right composition; the inverse is the reversed
/// sequence of inverses. The empty circuit is the identity. `Circuit`
/// dereferences to its gate vector, and composition reads naturally with
/// `*` / `*=`:
///
/// ```rust
/// use qsynt::prelude::*;
///
/// let bell = Circuit::default() * gate::h(0) * gate::cnot(0, 1);
/// assert_eq!(bell.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Circuit(Vec<GateKind>);

impl Circuit {
    pub fn new(gates: Vec<GateKind>) -> Self {
        Self(gates)
    }

    /// A new circuit with `g` in front of `self`'s gates.
    pub fn prepend(&self, g: GateKind) -> Self {
        let mut gates = Vec::with_capacity(self.0.len() + 1);
        gates.push(g);
        gates.extend(self.0.iter().cloned());
        Self(gates)
    }

    /// Concatenation of two circuits.
    pub fn join(&self, tail: &Circuit) -> Self {
        let mut gates = Vec::with_capacity(self.0.len() + tail.0.len());
        gates.extend(self.0.iter().cloned());
        gates.extend(tail.0.iter().cloned());
        Self(gates)
    }
}

impl Gate for Circuit {
    fn apply(&self, c: &mut dyn Computer) {
        for g in &self.0 {
            g.apply(c);
        }
    }

    fn dgr(&self) -> GateKind {
        Self(self.0.iter().rev().map(|g| g.dgr()).collect()).into()
    }

    fn name(&self) -> String {
        let mut res = String::from("[");
        for (i, g) in self.0.iter().enumerate() {
            if i > 0 {
                res.push(' ');
            }
            res.push_str(&g.name());
        }
        res.push(']');
        res
    }
}

impl Deref for Circuit {
    type Target = Vec<GateKind>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Circuit {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<GateKind> for Circuit {
    fn from(g: GateKind) -> Self {
        Self(vec![g])
    }
}

impl FromIterator<GateKind> for Circuit {
    fn from_iter<I: IntoIterator<Item = GateKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Mul for Circuit {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.mul_assign(rhs);
        self
    }
}

impl Mul<GateKind> for Circuit {
    type Output = Self;

    fn mul(mut self, rhs: GateKind) -> Self {
        self.0.push(rhs);
        self
    }
}

impl MulAssign for Circuit {
    fn mul_assign(&mut self, mut rhs: Self) {
        self.0.append(&mut rhs.0);
    }
}

impl MulAssign<GateKind> for Circuit {
    fn mul_assign(&mut self, rhs: GateKind) {
        self.0.push(rhs);
    }
}
