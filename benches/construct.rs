//! Construction Benchmarks
//!
//! Covers the validate-then-construct path:
//! - Signature validation (success and mismatch)
//! - Typed construction of flat and composite records
//! - Registry dispatch, including arity scaling for declared signatures
//! - The debug dump
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench construct
//! cargo bench --bench construct -- "construct/typed"
//! cargo bench --bench construct -- "registry/arity"
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recordkit::{
    arguments, builtin_registry, describe, ArgumentConstructible, Author, Book, Car,
    RecordRegistry, SignatureSlot, Value, ValueKind,
};

// =============================================================================
// Constants and Configuration
// =============================================================================

/// Slot counts for the declared-signature scaling benchmark.
const ARITIES: &[usize] = &[1, 4, 16, 64];

fn book_arguments() -> Vec<Value> {
    arguments!["the great gatsby", "F. Scott Fitzgerald", 1896, 180, 12.99]
}

// =============================================================================
// Validation
// =============================================================================

fn validate_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    group.throughput(Throughput::Elements(1));

    let signature = Author::signature();

    group.bench_function("match", |b| {
        b.iter_batched(
            || arguments!["John Doe", 1980],
            |args| black_box(signature.validate(args).is_ok()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("kind_mismatch", |b| {
        b.iter_batched(
            || arguments![1, true],
            |args| black_box(signature.validate(args).is_err()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

// =============================================================================
// Typed construction
// =============================================================================

fn construct_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct/typed");
    group.throughput(Throughput::Elements(1));

    group.bench_function("car", |b| {
        b.iter_batched(
            || arguments!["Tesla", "Model 3", 2023, 49900.00],
            |args| black_box(Car::construct(args)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("book_composite", |b| {
        b.iter_batched(
            book_arguments,
            |args| black_box(Book::construct(args)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("book_embedded_mismatch", |b| {
        b.iter_batched(
            || arguments!["title", "Author Name", "1896-not-an-int", 180, 12.99],
            |args| black_box(Book::construct(args)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

// =============================================================================
// Registry dispatch
// =============================================================================

fn registry_benchmarks(c: &mut Criterion) {
    let registry = builtin_registry();

    let mut group = c.benchmark_group("registry/builtin");
    group.throughput(Throughput::Elements(1));
    group.bench_function("book", |b| {
        b.iter_batched(
            book_arguments,
            |args| black_box(registry.construct("Book", args)),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();

    let mut group = c.benchmark_group("registry/arity");
    for &arity in ARITIES {
        let mut registry = RecordRegistry::new();
        let slots = (0..arity)
            .map(|i| SignatureSlot::labeled(format!("f{}", i), ValueKind::Integer))
            .collect();
        if registry.define_signature("Wide", slots).is_err() {
            continue;
        }
        let args: Vec<Value> = (0..arity as i64).map(Value::Integer).collect();

        group.throughput(Throughput::Elements(arity as u64));
        group.bench_with_input(BenchmarkId::from_parameter(arity), &args, |b, args| {
            b.iter_batched(
                || args.clone(),
                |args| black_box(registry.construct("Wide", args)),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

// =============================================================================
// Debug dump
// =============================================================================

fn describe_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");
    group.throughput(Throughput::Elements(1));

    let book = match Book::construct(book_arguments()) {
        Ok(book) => book,
        Err(e) => panic!("benchmark fixture rejected: {}", e),
    };
    group.bench_function("book_nested", |b| b.iter(|| black_box(describe(&book))));

    group.finish();
}

criterion_group!(
    benches,
    validate_benchmarks,
    construct_benchmarks,
    registry_benchmarks,
    describe_benchmarks
);
criterion_main!(benches);
