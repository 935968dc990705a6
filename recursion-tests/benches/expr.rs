use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use recursion_schemes::{cata, refix, Compact, Fix};
use recursion_schemes_tests::expr::{
    eval::{eval_layer, naive_eval},
    naive::balanced_sum,
    ExprToken,
};

fn bench_eval(criterion: &mut Criterion) {
    let mut test_cases = Vec::new();

    for depth in 14..18 {
        let big_expr = balanced_sum(depth);
        let fixed: Fix<ExprToken> = refix(&big_expr);
        let compact = Compact::from_fix(&fixed);

        test_cases.push((depth, big_expr, fixed, compact));
    }

    let mut group = criterion.benchmark_group("evaluate expression tree");

    for (depth, big_expr, fixed, compact) in test_cases.into_iter() {
        group.bench_with_input(
            BenchmarkId::new("traditional boxed method", depth),
            &big_expr,
            |b, expr| b.iter(|| naive_eval(expr)),
        );

        group.bench_with_input(
            BenchmarkId::new("cata over boxed expr", depth),
            &big_expr,
            |b, expr| b.iter(|| cata(expr, eval_layer)),
        );

        group.bench_with_input(
            BenchmarkId::new("cata over fix", depth),
            &fixed,
            |b, expr| b.iter(|| cata(expr, eval_layer)),
        );

        group.bench_with_input(
            BenchmarkId::new("decode compact", depth),
            &compact,
            |b, compact| b.iter(|| compact.clone().into_fix()),
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_eval
}
criterion_main!(benches);
