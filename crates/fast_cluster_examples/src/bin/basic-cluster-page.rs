use fast_cluster::prelude::*;
use fast_cluster_examples::{init_tracing, write_page, PageConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A synthetic grid of points around Portland, dense enough to cluster.
    let mut points = Vec::new();
    for i in 0..40 {
        for j in 0..40 {
            points.push((45.3 + i as f64 * 0.01, -122.9 + j as f64 * 0.01));
        }
    }

    let cluster = FastMarkerCluster::builder(points)
        .with_name("grid")
        .with_option("chunkedLoading", true)
        .build()?;

    let script = cluster.render("cluster_0", "map_0")?;

    let config = PageConfig::new("basic cluster", (45.5, -122.7), 10);
    let out = "basic-cluster-page.html";
    write_page(&config, &script, out)?;
    println!("wrote {out}");

    Ok(())
}
