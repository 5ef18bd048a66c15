//! Print the bucket layout and a histogram of draws for a few weight vectors.
//!
//! ```text
//! cargo run --example histogram                 # built-in cases
//! cargo run --example histogram -- 20 10 30     # your own weights
//! RUST_LOG=fastdiscrete=debug FASTDISCRETE_SEED=5 cargo run --example histogram
//! ```

use std::io::{self, Write};
use std::sync::Arc;

use fastdiscrete::{AliasTable, Sampler};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing_subscriber::EnvFilter;

fn run(
    weights: &[f64],
    draws: usize,
    seed: u64,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "weights: {weights:?}")?;
    let table = match AliasTable::new(weights) {
        Ok(t) => Arc::new(t),
        Err(e) => {
            writeln!(out, "error: {e}\n")?;
            return Ok(());
        }
    };
    table.write_buckets(out)?;

    let mut sampler = Sampler::new(Arc::clone(&table), Pcg32::seed_from_u64(seed));
    if let Err(e) = sampler.sample() {
        writeln!(out, "sample: {e}\n")?;
        return Ok(());
    }

    let mut counts = vec![0usize; table.len()];
    for _ in 0..draws {
        counts[sampler.sample()?] += 1;
    }

    writeln!(out, "counts:")?;
    for (i, &c) in counts.iter().enumerate() {
        writeln!(out, "{i} ({}) : {}", weights[i], "*".repeat(c))?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = match std::env::var("FASTDISCRETE_SEED") {
        Ok(s) => s.parse()?,
        Err(_) => 0,
    };

    let args: Vec<f64> = std::env::args()
        .skip(1)
        .map(|a| a.parse::<f64>())
        .collect::<Result<_, _>>()?;

    let cases: Vec<(Vec<f64>, usize)> = if args.is_empty() {
        vec![
            (vec![], 100),
            (vec![0.0], 100),
            (vec![1.0], 100),
            (vec![1.0, 1.0], 200),
            (vec![1.0, 1.0, 1.0], 300),
            (vec![1.0, 1.0, 2.0], 300),
            (vec![1.0, 0.0, 2.0], 300),
            (vec![20.0, 10.0, 30.0], 300),
            (vec![0.0, 1e-20, 0.0], 100),
            (vec![1.0 - 1e-10; 3], 100),
        ]
    } else {
        let draws = 100 * args.len();
        vec![(args, draws)]
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (weights, draws) in &cases {
        run(weights, *draws, seed, &mut out)?;
    }
    Ok(())
}
