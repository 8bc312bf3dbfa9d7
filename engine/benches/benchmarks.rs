//! Performance benchmarks for parley-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parley_engine::{reconcile, Action, Conversation, Message, Store};

fn fixture_list(len: usize) -> Vec<Conversation> {
    (0..len)
        .map(|i| {
            Conversation::new(
                format!("conv_{}", i),
                vec![Message::new(
                    format!("msg_{}", i),
                    "user_1",
                    format!("body {}", i),
                    1000 + i as u64,
                )],
            )
        })
        .collect()
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("hit_last", size), size, |b, &size| {
            let list = fixture_list(size);
            let updated = Conversation::new(
                format!("conv_{}", size - 1),
                vec![Message::new("msg_new", "user_2", "hello", 2000)],
            );

            b.iter(|| reconcile(black_box(&list), black_box(updated.clone())))
        });

        group.bench_with_input(BenchmarkId::new("miss_append", size), size, |b, &size| {
            let list = fixture_list(size);
            let updated = Conversation::new(
                "conv_unknown",
                vec![Message::new("msg_new", "user_2", "hello", 2000)],
            );

            b.iter(|| reconcile(black_box(&list), black_box(updated.clone())))
        });
    }

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    group.bench_function("apply_update", |b| {
        let mut store = Store::new();
        store.apply(Action::set_conversations(fixture_list(100)));
        let updated = Conversation::new(
            "conv_50",
            vec![Message::new("msg_new", "user_2", "hello", 2000)],
        );

        b.iter(|| store.apply(Action::update_conversations(black_box(updated.clone()))))
    });

    group.bench_function("export_state", |b| {
        let mut store = Store::new();
        store.apply(Action::set_conversations(fixture_list(1000)));

        b.iter(|| store.export_state())
    });

    group.bench_function("import_state", |b| {
        let mut store = Store::new();
        store.apply(Action::set_conversations(fixture_list(1000)));
        let snapshot = store.export_state();

        b.iter(|| {
            let mut restored = Store::new();
            restored.import_state(black_box(snapshot.clone()))
        })
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    group.bench_function("action_to_json", |b| {
        let action = Action::update_conversations(Conversation::new(
            "conv_1",
            vec![Message::new("msg_1", "user_1", "hello", 1000)],
        ));

        b.iter(|| serde_json::to_string(black_box(&action)))
    });

    group.bench_function("action_from_json", |b| {
        let json = r#"{"type":"UPDATE_CONVERSATIONS","conversation":{"_id":"conv_1","messages":[{"_id":"msg_1","sender":"user_1","body":"hello","sentAt":1000}]}}"#;

        b.iter(|| serde_json::from_str::<Action>(black_box(json)))
    });

    group.finish();
}

criterion_group!(benches, bench_reconcile, bench_store, bench_serialization);
criterion_main!(benches);
