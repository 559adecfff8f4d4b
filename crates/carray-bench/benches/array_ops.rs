//! Criterion micro-benchmarks for array growth, shifting and shrinking.

use std::hint::black_box;

use carray_array::{Carray, TypedArray};
use carray_bench::{filled, APPEND_PROFILE_LEN};
use carray_core::ElementKind;
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: 10K appends into a fresh array, per element kind.
fn bench_append_10k(c: &mut Criterion) {
    for kind in ElementKind::ALL {
        c.bench_function(&format!("append_10k_{kind}"), |b| {
            b.iter(|| {
                let mut array = Carray::new(kind);
                for v in 0..APPEND_PROFILE_LEN {
                    array.append(black_box(v)).unwrap();
                }
                black_box(array.len());
            });
        });
    }
}

/// Benchmark: 10K typed pushes, skipping scalar validation.
fn bench_push_10k_typed(c: &mut Criterion) {
    c.bench_function("push_10k_typed", |b| {
        b.iter(|| {
            let mut array = TypedArray::<f64>::new();
            for v in 0..APPEND_PROFILE_LEN {
                array.push(black_box(v as f64));
            }
            black_box(array.capacity());
        });
    });
}

/// Benchmark: 1K inserts at the front, shifting the whole tail each time.
fn bench_front_insert_1k(c: &mut Criterion) {
    c.bench_function("front_insert_1k", |b| {
        b.iter(|| {
            let mut array = Carray::new(ElementKind::Integer);
            for v in 0..1_000i64 {
                array.insert(0, black_box(v)).unwrap();
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: pop a 10K array to empty, paying every eager shrink.
fn bench_pop_drain_10k(c: &mut Criterion) {
    let template = filled(ElementKind::Integer, APPEND_PROFILE_LEN);
    c.bench_function("pop_drain_10k", |b| {
        b.iter(|| {
            let mut array = template.clone();
            while let Ok(v) = array.pop() {
                black_box(v);
            }
        });
    });
}

/// Benchmark: append/pop alternating across a shrink threshold.
fn bench_shrink_churn(c: &mut Criterion) {
    c.bench_function("shrink_churn_1k", |b| {
        b.iter(|| {
            let mut array = filled(ElementKind::Float, 3);
            for v in 0..1_000i64 {
                array.append(v).unwrap();
                black_box(array.pop().unwrap());
            }
        });
    });
}

/// Benchmark: reversed copy of a 10K array.
fn bench_reversed_copy_10k(c: &mut Criterion) {
    let array = filled(ElementKind::Float, APPEND_PROFILE_LEN);
    c.bench_function("reversed_copy_10k", |b| {
        b.iter(|| black_box(array.reversed_copy()));
    });
}

criterion_group!(
    benches,
    bench_append_10k,
    bench_push_10k_typed,
    bench_front_insert_1k,
    bench_pop_drain_10k,
    bench_shrink_churn,
    bench_reversed_copy_10k
);
criterion_main!(benches);
