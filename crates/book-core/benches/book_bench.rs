use book_core::{Cancel, Instruction, MatchingEngine, Side, Submit};
use criterion::{criterion_group, criterion_main, Criterion};

fn submit(user: u32, user_order_id: u32, price: u32, quantity: u32, side: Side) -> Instruction {
    Instruction::Submit(Submit {
        user,
        symbol: "IBM".to_string(),
        price,
        quantity,
        side,
        user_order_id,
    })
}

fn bench_admissions(c: &mut Criterion) {
    c.bench_function("admit_1k_resting", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::new(true);
            for i in 0..1_000u32 {
                engine
                    .apply(submit(1, i + 1, 1_000 + (i % 50), 10, Side::Buy))
                    .unwrap();
            }
            engine
        })
    });
}

fn bench_cancels(c: &mut Criterion) {
    c.bench_function("cancel_1k_resting", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::new(true);
            for i in 0..1_000u32 {
                engine
                    .apply(submit(1, i + 1, 1_000 + (i % 50), 10, Side::Buy))
                    .unwrap();
            }
            for i in 0..1_000u32 {
                engine
                    .apply(Instruction::Cancel(Cancel {
                        user: 1,
                        user_order_id: i + 1,
                    }))
                    .unwrap();
            }
            engine
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_100_levels", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::new(true);
            for i in 0..100u32 {
                engine
                    .apply(submit(1, i + 1, 1_000 + i, 10, Side::Sell))
                    .unwrap();
            }
            engine.apply(submit(2, 1, 2_000, 1_000, Side::Buy)).unwrap()
        })
    });
}

criterion_group!(benches, bench_admissions, bench_cancels, bench_sweep);
criterion_main!(benches);
