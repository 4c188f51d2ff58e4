use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng, SeedableRng};
use seqprep::vocab::{build_vocabulary, encode_all};

/// 10k instances of 20 tokens drawn from a 5k words vocabulary.
fn instances() -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(42);
    let words = Uniform::new(0, 5_000);
    (0..10_000)
        .map(|_| {
            (&words)
                .sample_iter(&mut rng)
                .take(20)
                .map(|w| format!("w{}", w))
                .collect()
        })
        .collect()
}

pub fn vocab(c: &mut Criterion) {
    let insts = instances();
    c.bench_function("build_vocabulary", |b| {
        b.iter(|| build_vocabulary(black_box(&insts), 9))
    });

    let (vocab, _) = build_vocabulary(&insts, 9);
    c.bench_function("encode_all", |b| {
        b.iter(|| encode_all(black_box(&insts), &vocab))
    });
}

criterion_group!(benches, vocab);
criterion_main!(benches);
