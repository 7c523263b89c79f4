use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fast_cluster::prelude::*;

const ROW_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];

fn synthetic_rows(count: usize) -> Vec<Vec<Field>> {
    (0..count)
        .map(|i| {
            let lat = -80.0 + (i % 160) as f64 + 0.5;
            let lon = -170.0 + (i % 340) as f64 + 0.25;
            vec![lat.into(), lon.into(), format!("poi-{i}").into()]
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for count in ROW_COUNTS {
        let cluster = FastMarkerCluster::builder(synthetic_rows(count))
            .with_option("chunkedLoading", true)
            .build()
            .expect("synthetic rows are valid");

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &cluster, |b, cluster| {
            b.iter(|| black_box(cluster.render("cluster_bench", "map_bench").expect("renders")))
        });
    }
    group.finish();
}

fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = default_criterion();
    targets = bench_render
}
criterion_main!(benches);
