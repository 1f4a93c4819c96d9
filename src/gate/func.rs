use std::sync::Arc;

use super::{Gate, GateKind};
use crate::computer::Computer;

/// An ad-hoc gate built from a forward/backward closure pair.
///
/// The closures are trusted to be exact inverses of each other; everything
/// else about the gate is opaque.
#[derive(Clone)]
pub struct FnGate {
    name: String,
    forward: Arc<dyn Fn(&mut dyn Computer) + Send + Sync>,
    backward: Arc<dyn Fn(&mut dyn Computer) + Send + Sync>,
}

impl FnGate {
    pub fn new(
        name: impl Into<String>,
        forward: impl Fn(&mut dyn Computer) + Send + Sync + 'static,
        backward: impl Fn(&mut dyn Computer) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            forward: Arc::new(forward),
            backward: Arc::new(backward),
        }
    }
}

impl Gate for FnGate {
    fn apply(&self, c: &mut dyn Computer) {
        (self.forward)(c);
    }

    fn dgr(&self) -> GateKind {
        Self {
            name: format!("{}'", self.name),
            forward: Arc::clone(&self.backward),
            backward: Arc::clone(&self.forward),
        }
        .into()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
