use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use handkind::core::{Card, classify, sample_hand};

fn bench_classify_random_hands(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let hands: Vec<[Card; 5]> = (0..100).map(|_| sample_hand(&mut rng)).collect();

    c.bench_function("classify_random_hands", |b| {
        b.iter(|| {
            for hand in &hands {
                let _ = std::hint::black_box(classify(hand));
            }
        });
    });
}

fn bench_sample_hand(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);

    c.bench_function("sample_hand", |b| {
        b.iter(|| std::hint::black_box(sample_hand(&mut rng)));
    });
}

criterion_group!(benches, bench_classify_random_hands, bench_sample_hand);
criterion_main!(benches);
