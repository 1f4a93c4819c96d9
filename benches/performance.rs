use criterion::*;
use qsynt::prelude::*;

fn apply_gates(c: &mut Criterion) {
    for qu_num in [10, 14, 18] {
        c.bench_function(format!("toffoli_chain_qu{}", qu_num).as_str(), |b| {
            let circuit = Circuit::default()
                * gate::h(0)
                * gate::ccnot(0, 1, 2)
                * gate::ccnot(1, 2, 3)
                * gate::cnot(3, 0);
            let s = Simulation::random_seeded(qu_num, 1);
            b.iter(|| {
                let mut s = s.clone();
                circuit.apply(black_box(&mut s));
            })
        });
    }
}

fn hash_circuits(c: &mut Criterion) {
    for qu_num in [4, 8, 12] {
        c.bench_function(format!("hash_qu{}", qu_num).as_str(), |b| {
            let hasher = StateHasher::new_seeded(qu_num, 2);
            let circuit = Circuit::default()
                * gate::h(0)
                * gate::t(1)
                * gate::cnot(0, 1)
                * gate::cnot(1, 0);
            b.iter(|| black_box(hasher.hash(black_box(&circuit))))
        });
    }
}

fn extend_layers(c: &mut Criterion) {
    c.bench_function("layers_2q_depth3", |b| {
        b.iter(|| {
            let mut gen = CircuitGen::with_hasher(
                gate::standard_basis(2),
                StateHasher::new_seeded(2, 3),
                200_000,
            );
            black_box(gen.generate_slice(3));
        })
    });
}

criterion_group!(benches, apply_gates, hash_circuits, extend_layers);
criterion_main!(benches);
