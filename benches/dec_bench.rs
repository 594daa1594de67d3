//! Benchmarks for decimal big integer arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dec_num::{factorial, nth_fibonacci, DecInt};

/// Builds an operand with the requested number of decimal digits.
fn operand(digits: usize) -> DecInt {
    let mut s = String::with_capacity(digits);
    s.push('9');
    for i in 1..digits {
        s.push(char::from(b'0' + ((i * 7 + 3) % 10) as u8));
    }
    s.parse().expect("operand digits are valid")
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("dec_mul");

    for size in [16usize, 64, 256, 1024] {
        let a = operand(size);
        let b = operand(size);

        group.bench_with_input(BenchmarkId::new("schoolbook", size), &size, |bench, _| {
            bench.iter(|| black_box(&a * &b))
        });
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("dec_div");

    for size in [32usize, 128, 512] {
        let a = operand(size);
        let b = operand(size / 2);

        group.bench_with_input(BenchmarkId::new("long_division", size), &size, |bench, _| {
            bench.iter(|| black_box(a.div_rem(&b).unwrap()))
        });
    }

    group.finish();
}

fn bench_special(c: &mut Criterion) {
    let mut group = c.benchmark_group("dec_special");

    for n in [10u32, 100, 400] {
        group.bench_with_input(BenchmarkId::new("factorial", n), &n, |bench, &n| {
            bench.iter(|| black_box(factorial(n)))
        });
        group.bench_with_input(BenchmarkId::new("fibonacci", n), &n, |bench, &n| {
            bench.iter(|| black_box(nth_fibonacci(n)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_multiplication,
    bench_division,
    bench_special
);
criterion_main!(benches);
