use criterion::{criterion_group, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use huffman_resolver::huffman::Resolver;
use huffman_resolver::Probability;

use super::ALPHABET_SIZES;

fn random_alphabet(size: usize, rng: &mut StdRng) -> Vec<(usize, Probability)> {
    let weights: Vec<f64> = (0..size).map(|_| rng.gen_range(0.01..1.0)).collect();
    let total: f64 = weights.iter().sum();
    weights
        .iter()
        .enumerate()
        .map(|(label, weight)| (label, weight / total))
        .collect()
}

fn code_table_building_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("code table building");

    for size in ALPHABET_SIZES {
        let alphabet = random_alphabet(size, &mut rng);

        group.bench_function(format!("{} symbols", size), |b| {
            b.iter_batched(
                || alphabet.clone(),
                |alphabet| {
                    let mut resolver = Resolver::new();
                    for (label, probability) in alphabet {
                        resolver.seed(label, probability).unwrap();
                    }
                    resolver.drive().unwrap();
                    resolver.into_codes().unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish()
}

criterion_group! {
    name = resolver_benches;
    config = Criterion::default();
    targets = code_table_building_bench,
}
