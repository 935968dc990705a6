use std::collections::VecDeque;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use recursion_schemes::{cata, hylo, ListFrame, Mu, PartiallyApplied};

fn sum_layer(frame: ListFrame<&u64, u64>) -> u64 {
    match frame {
        ListFrame::Cons(e, acc) => e + acc,
        ListFrame::Nil => 0,
    }
}

fn bench_sum(criterion: &mut Criterion) {
    let mut bigvec = Vec::with_capacity(1024 * 1024);
    bigvec.resize(1024 * 1024, 1u64);
    let test_cases = vec![bigvec];

    let mut group = criterion.benchmark_group("sum_via_fold");

    for input in test_cases.into_iter() {
        group.bench_with_input(
            BenchmarkId::new("fold iter", input.len()),
            &input,
            |b, input| b.iter(|| input.iter().fold(0, |x, acc| x + acc)),
        );

        group.bench_with_input(
            BenchmarkId::new("cata over slice", input.len()),
            &input,
            |b, input| b.iter(|| cata(&input[..], sum_layer)),
        );

        let owned: VecDeque<u64> = input.iter().copied().collect();
        group.bench_with_input(
            BenchmarkId::new("cata over vec deque", input.len()),
            &owned,
            |b, input| {
                b.iter(|| {
                    cata(input.clone(), |frame: ListFrame<u64, u64>| match frame {
                        ListFrame::Cons(e, acc) => e + acc,
                        ListFrame::Nil => 0,
                    })
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("hylo over index", input.len()),
            &input,
            |b, input| {
                b.iter(|| {
                    hylo::<ListFrame<&u64, PartiallyApplied>, _, _>(
                        0usize,
                        |idx| match input.get(idx) {
                            Some(e) => ListFrame::Cons(e, idx + 1),
                            None => ListFrame::Nil,
                        },
                        sum_layer,
                    )
                })
            },
        );

        let church: Mu<ListFrame<u64, PartiallyApplied>> = Mu::from_fold(owned);
        group.bench_with_input(
            BenchmarkId::new("church fold", input.len()),
            &church,
            |b, input| {
                b.iter(|| {
                    input.fold(|frame: ListFrame<u64, u64>| match frame {
                        ListFrame::Cons(e, acc) => e + acc,
                        ListFrame::Nil => 0,
                    })
                })
            },
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
    targets = bench_sum
}
criterion_main!(benches);
