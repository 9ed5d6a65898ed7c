// ============================================================================
// Decimal Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parse / Format - Text round-trip costs as digit counts grow
// 2. Add / Multiply - Digit-loop scaling of the schoolbook algorithms
// 3. Division - Cost against the significant-digit budget
// 4. Sine - Range reduction plus the f64 Taylor core
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use longhand::prelude::*;

/// A digit string of the given length with no leading zero.
fn digit_run(len: usize) -> String {
    ('1'..='9').cycle().take(len).collect()
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for digits in [8, 64, 512].iter() {
        let text = digit_run(*digits);
        group.bench_with_input(BenchmarkId::from_parameter(digits), &text, |b, text| {
            b.iter(|| black_box(text.parse::<BigDecimal>().unwrap()));
        });
    }

    group.finish();
}

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for digits in [8, 64, 512].iter() {
        let mut text = digit_run(*digits);
        text.insert(1, '.');
        let value: BigDecimal = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(digits), &value, |b, value| {
            b.iter(|| black_box(value.to_string()));
        });
    }

    group.finish();
}

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for digits in [8, 64, 512].iter() {
        let a: BigDecimal = digit_run(*digits).parse().unwrap();
        // Offset exponent so the addition also pays for alignment.
        let b_val: BigDecimal = format!("{}E-6", digit_run(*digits)).parse().unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(digits),
            &(a, b_val),
            |b, (x, y)| {
                b.iter(|| black_box(x + y));
            },
        );
    }

    group.finish();
}

fn benchmark_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for digits in [8, 32, 128].iter() {
        let a: BigDecimal = digit_run(*digits).parse().unwrap();
        let b_val = a.clone();
        group.bench_with_input(
            BenchmarkId::from_parameter(digits),
            &(a, b_val),
            |b, (x, y)| {
                b.iter(|| black_box(x * y));
            },
        );
    }

    group.finish();
}

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide");

    let one: BigDecimal = "1".parse().unwrap();
    let seven: BigDecimal = "7".parse().unwrap();
    for budget in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(budget),
            budget,
            |b, &budget| {
                b.iter(|| black_box(one.div_with_digits(&seven, budget).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_sine(c: &mut Criterion) {
    let mut group = c.benchmark_group("sine");

    let small: BigDecimal = "0.5".parse().unwrap();
    group.bench_with_input(BenchmarkId::from_parameter("small"), &small, |b, angle| {
        b.iter(|| black_box(angle.sin()));
    });

    // Forces the modulo-based range reduction.
    let large: BigDecimal = "1000".parse().unwrap();
    group.bench_with_input(BenchmarkId::from_parameter("reduced"), &large, |b, angle| {
        b.iter(|| black_box(angle.sin()));
    });

    group.finish();
}

fn benchmark_step_evaluation(c: &mut Criterion) {
    c.bench_function("evaluate_steps", |b| {
        let mut stack = StepStack::new();
        for text in ["+2", "^10", "/4", "-6", "*1.5", "%7"] {
            stack.push(text.parse::<Step>().unwrap());
        }

        b.iter(|| black_box(stack.evaluate().unwrap()));
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_format,
    benchmark_addition,
    benchmark_multiplication,
    benchmark_division,
    benchmark_sine,
    benchmark_step_evaluation,
);
criterion_main!(benches);
