use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huffcode::{FrequencyTable, HuffmanCode, HuffmanTree};
use rand::{Rng, SeedableRng};

const SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn random_text(rng: &mut rand::rngs::SmallRng, len: usize) -> String {
    let symbols: Vec<char> = SYMBOLS.chars().collect();
    // skew towards the front of the alphabet so the code lengths differ
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..symbols.len());
            symbols[rng.gen_range(0..=idx)]
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    const TEXT_SIZE: usize = 64 * 1024;

    let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
    let text = random_text(&mut rng, TEXT_SIZE);
    let frequencies = FrequencyTable::from_text(&text);
    let code = HuffmanCode::from_frequencies(&frequencies).unwrap();
    let bits = code.encode(&text).unwrap();

    c.bench_function("build tree", |b| {
        b.iter(|| HuffmanTree::build(black_box(&frequencies)).unwrap())
    });

    c.bench_function("count frequencies", |b| {
        b.iter(|| FrequencyTable::from_text(black_box(&text)))
    });

    c.bench_function("encode", |b| b.iter(|| code.encode(black_box(&text)).unwrap()));

    c.bench_function("decode", |b| b.iter(|| code.decode(black_box(&bits)).unwrap()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
