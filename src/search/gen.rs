use std::{
    collections::HashSet,
    sync::{
        mpsc::{sync_channel, Receiver},
        Arc,
    },
    thread,
};

use crate::{
    gate::{Circuit, GateKind},
    hash::{CircuitHasher, StateHasher},
    math::N,
};

/// Producer queue depth for streamed circuit enumeration.
const QUEUE_DEPTH: usize = 10;

/// An exhaustive generator of circuits over a gate basis, deduplicated by
/// fingerprint.
///
/// Layer `k` of the cache holds one representative per fingerprint among
/// all `k`-gate circuits formed by prepending basis gates to layer `k - 1`;
/// layer 0 is the empty circuit. The cache stops growing once the total
/// number of stored circuits would exceed the budget, after which deeper
/// layers are streamed lazily as cross products.
///
/// Not safe for concurrent use; a single search owns its generator.
pub struct CircuitGen<H: CircuitHasher = StateHasher> {
    basis: Vec<GateKind>,
    hasher: H,
    cache: Vec<Arc<Vec<Circuit>>>,
    remaining: N,
}

impl CircuitGen<StateHasher> {
    /// A generator with a fresh random hasher. `max_cache` bounds the total
    /// number of circuits materialized across all cached layers.
    pub fn new(num_bits: N, basis: Vec<GateKind>, max_cache: N) -> Self {
        Self::with_hasher(basis, StateHasher::new(num_bits), max_cache)
    }
}

impl<H: CircuitHasher> CircuitGen<H> {
    pub fn with_hasher(basis: Vec<GateKind>, hasher: H, max_cache: N) -> Self {
        assert!(!basis.is_empty(), "empty gate basis");
        assert!(max_cache > 0, "cache budget must be positive");
        Self {
            basis,
            hasher,
            cache: vec![Arc::new(vec![Circuit::default()])],
            remaining: max_cache,
        }
    }

    /// The in-memory list of all deduplicated circuits of a given size, or
    /// `None` when they no longer fit in the cache budget.
    pub fn generate_slice(&mut self, num_gates: N) -> Option<Arc<Vec<Circuit>>> {
        while self.cache.len() <= num_gates && self.remaining > 0 {
            self.extend_cache();
        }
        self.cache.get(num_gates).cloned()
    }

    /// Stream a (possibly redundant) sequence of circuits of a given size
    /// through a bounded queue, together with its exact length.
    ///
    /// Cached sizes stream the cached layer. Deeper sizes are produced as
    /// the cross product of a recursively streamed shorter prefix with the
    /// deepest cached layer. Dropping the receiver stops the producer after
    /// at most one more send.
    pub fn generate(&mut self, num_gates: N) -> (Receiver<Circuit>, N) {
        while self.cache.len() <= num_gates && self.remaining > 0 {
            self.extend_cache();
        }

        let (tx, rx) = sync_channel(QUEUE_DEPTH);

        if let Some(layer) = self.cache.get(num_gates) {
            let layer = Arc::clone(layer);
            let count = layer.len();
            thread::spawn(move || {
                for circ in layer.iter() {
                    if tx.send(circ.clone()).is_err() {
                        return;
                    }
                }
            });
            return (rx, count);
        }

        assert!(
            self.cache.len() > 1,
            "cache budget too small to stream deeper layers"
        );

        let (sub_rx, sub_count) = self.generate(num_gates - self.cache.len() + 1);
        let last = Arc::clone(self.cache.last().unwrap());
        let count = sub_count * last.len();
        thread::spawn(move || {
            for prefix in sub_rx {
                for tail in last.iter() {
                    if tx.send(prefix.join(tail)).is_err() {
                        return;
                    }
                }
            }
        });

        (rx, count)
    }

    /// Build the next layer from the deepest one. Returns false, leaving
    /// the cache untouched, once the budget is exhausted.
    fn extend_cache(&mut self) -> bool {
        let prev = Arc::clone(self.cache.last().unwrap());
        let mut next = Vec::new();
        let mut found = HashSet::new();

        for prev_circ in prev.iter() {
            for g in &self.basis {
                let circ = prev_circ.prepend(g.clone());
                let hash = self.hasher.hash(&circ);
                if found.insert(hash) {
                    next.push(circ);
                    self.remaining -= 1;
                    if self.remaining == 0 {
                        return false;
                    }
                }
            }
        }

        self.cache.push(Arc::new(next));
        true
    }
}
