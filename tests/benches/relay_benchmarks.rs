//! # Relay Benchmarks
//!
//! Performance sanity checks:
//!
//! | Component | Claim | Target |
//! |-----------|-------|--------|
//! | topic-bus | publish is snapshot + linear fan-out | < 1ms at 100 subscribers |
//! | once-invoker | completed-memo call is a clone, not a recompute | ns range |

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use once_invoker::SharedMemo;
use topic_bus::TopicBus;

// ============================================================================
// Topic Bus: publish fan-out
// ============================================================================

fn bench_publish_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("topic-bus");
    group.measurement_time(Duration::from_secs(5));

    for subscribers in [1usize, 10, 100] {
        let bus = TopicBus::new();
        let hits = Arc::new(AtomicU64::new(0));
        for _ in 0..subscribers {
            let hits = Arc::clone(&hits);
            bus.subscribe("bench", move |value: &u64| {
                hits.fetch_add(*value, Ordering::Relaxed);
                Ok(())
            });
        }

        group.throughput(Throughput::Elements(subscribers as u64));
        group.bench_with_input(
            BenchmarkId::new("publish", subscribers),
            &subscribers,
            |b, _| b.iter(|| black_box(bus.publish("bench", &1)).delivered),
        );
    }

    group.finish();
}

fn bench_subscribe_unsubscribe_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("topic-bus");

    group.bench_function("subscribe_unsubscribe", |b| {
        let bus: TopicBus<u64> = TopicBus::new();
        b.iter(|| {
            let handle = bus.subscribe("churn", |_: &u64| Ok(()));
            black_box(bus.unsubscribe(&handle))
        })
    });

    group.finish();
}

// ============================================================================
// Once Invoker: completed-memo hit path
// ============================================================================

fn bench_memo_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("once-invoker");

    let memo = SharedMemo::infallible(|seed: u64| seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let _ = memo.value(42); // complete it first

    group.bench_function("cached_call", |b| {
        b.iter(|| black_box(memo.value(black_box(7))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_publish_fan_out,
    bench_subscribe_unsubscribe_churn,
    bench_memo_hit
);
criterion_main!(benches);
