use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fluentsql::{BindingMode, StatementBuilder, table};

/// SELECT col0,col1,... FROM t WHERE col0 = :col0_p0 AND col1 = :col1_p0 ...
fn build_select(n: usize) -> StatementBuilder {
    let mut qb = table("t");
    for i in 0..n {
        qb = qb.select(&format!("col{i}"));
    }
    for i in 0..n {
        qb = qb.where_eq(&format!("col{i}"), i as i64);
    }
    qb
}

fn bench_compile_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("stmt/compile_select");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.compile()));
        });
    }

    group.finish();
}

fn bench_build_and_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("stmt/build_and_compile");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).compile()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("stmt/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        for (label, mode) in [("inline", BindingMode::Inline), ("bind_all", BindingMode::BindAll)] {
            group.bench_with_input(BenchmarkId::new(label, n), &values, |b, values| {
                b.iter(|| {
                    let qb = table("t")
                        .binding(mode)
                        .select("id")
                        .where_in("id", values.clone());
                    black_box(qb.compile())
                });
            });
        }
    }

    group.finish();
}

fn bench_to_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("stmt/to_positional");

    for n in [1, 10, 100] {
        let compiled = build_select(n).compile().expect("valid statement");
        group.bench_with_input(BenchmarkId::from_parameter(n), &compiled, |b, compiled| {
            b.iter(|| black_box(compiled.to_positional().map(|(sql, _)| sql.len())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compile_select,
    bench_build_and_compile,
    bench_in_list,
    bench_to_positional
);
criterion_main!(benches);
