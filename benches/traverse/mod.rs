use std::hint::black_box;

use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};
use temporavl::{Interval, TemporalTree, Traversal};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("traverse");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree.
    let mut rand = Lfsr::default();
    let mut t = TemporalTree::default();

    for _i in 0..n_values {
        let interval = rand.next_interval();
        t.insert(interval, 42_usize);
    }

    bench_iter(n_values, g, &t);
    bench_overlaps(n_values, g, &t);
    bench_select_pre(n_values, g, &t);
    bench_select_in(n_values, g, &t);
    bench_select_post(n_values, g, &t);
}

fn bench_iter<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &TemporalTree<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "iter",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });
}

fn bench_overlaps<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &TemporalTree<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "overlaps",
    };

    let query = Interval::new(42, 100).expect("bounds are ordered");

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.overlaps(&query) {
                black_box(v);
            }
        })
    });
}

macro_rules! select_bench {
    (
        $order:ident
    ) => {
        paste::paste! {
            fn [<bench_select_ $order:lower>]<M>(
                n_values: usize,
                g: &mut BenchmarkGroup<M>,
                t: &TemporalTree<u16, usize>,
            ) where
                M: Measurement,
            {
                let bench_name = BenchName {
                    n_values,
                    bench_name: concat!("select_", stringify!([<$order:lower>])),
                };

                g.throughput(Throughput::Elements(n_values as _));
                // Values per second
                g.bench_function(BenchmarkId::from(bench_name), |b| {
                    b.iter(|| {
                        black_box(t.select(Traversal::$order, |_, _| true, |_, v| *v));
                    })
                });
            }
        }
    };
}

select_bench!(Pre);
select_bench!(In);
select_bench!(Post);
