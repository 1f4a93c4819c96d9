//! Experiment driver: pick a target and a basis, run the search, print the
//! circuit. Exits non-zero when nothing is found within the caps.

use std::process::exit;

use clap::{Parser, Subcommand};
use qsynt::prelude::*;

#[derive(Parser)]
#[clap(name = "qsynt-x", about = "Search for circuits realizing known gates.")]
struct Cli {
    /// Total circuits the generator may keep in memory.
    #[clap(long, default_value_t = 5_000_000)]
    max_cache: usize,

    /// Deepest forward prefix tried before giving up.
    #[clap(long, default_value_t = 10)]
    max_depth: usize,

    /// Seed for the reference-state hasher; searches with the same seed are
    /// reproducible.
    #[clap(long, default_value_t = 0)]
    seed: u64,

    #[clap(subcommand)]
    target: Target,
}

#[derive(Subcommand)]
enum Target {
    /// Search for the Toffoli gate over H/T/Tdg + CNOT on 3 wires.
    Toffoli,
    /// Search for the conditional swap over a CCNOT-extended basis.
    Cswap,
    /// Search for a circuit whose square is CNOT.
    SqrtCnot,
    /// Prepare a Bell pair and print sample counts.
    Bell,
}

fn main() {
    let cli = Cli::parse();
    let opts = SearchOptions {
        max_cache: cli.max_cache,
        max_depth: cli.max_depth,
    };

    let found = match cli.target {
        Target::Toffoli => {
            let target = ClassicalGate::new("ToffoliFn", |i: usize| {
                i ^ (((i & 1) << 2) & ((i & 2) << 1))
            });
            let hasher = StateHasher::new_seeded(3, cli.seed);
            search_with_hasher(gate::standard_basis(3), &target, hasher, opts)
        }
        Target::Cswap => {
            let mut basis = gate::standard_basis(3);
            for target in 0..3 {
                for a in 0..3 {
                    for b in 0..3 {
                        if target != a && target != b && a < b {
                            basis.push(gate::ccnot(a, b, target));
                        }
                    }
                }
            }
            let target = ClassicalGate::new("CSwapFn", |i: usize| {
                if i & 1 != 0 {
                    (i & !0b110) | ((i & 0b010) << 1) | ((i & 0b100) >> 1)
                } else {
                    i
                }
            });
            let hasher = StateHasher::new_seeded(3, cli.seed);
            search_with_hasher(basis, &target, hasher, opts)
        }
        Target::SqrtCnot => {
            let basis = vec![
                gate::h(0),
                gate::h(1),
                gate::t(0),
                gate::t(1),
                gate::t_dgr(0),
                gate::t_dgr(1),
                gate::cnot(0, 1),
                gate::cnot(1, 0),
            ];
            let hasher = StateHasher::new_seeded(2, cli.seed);
            search_sqrt(basis, &gate::cnot(0, 1), hasher, opts)
        }
        Target::Bell => {
            let mut s = Simulation::new(2);
            gate::prim::h(&mut s, 0);
            s.cnot(0, 1);
            println!("state: {}", s);

            let mut rng = rand::thread_rng();
            let mut counts = [0usize; 4];
            for _ in 0..100_000 {
                counts[s.sample(&mut rng)] += 1;
            }
            println!(
                "samples: 00={} 01={} 10={} 11={}",
                counts[0], counts[1], counts[2], counts[3]
            );
            return;
        }
    };

    match found {
        Some(circuit) => println!("{}", circuit),
        None => {
            eprintln!("no circuit found within the given caps");
            exit(1);
        }
    }
}
