use fast_cluster::prelude::*;
use fast_cluster_examples::{init_tracing, write_page, PageConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Third field is a color consumed by the custom callback below.
    let rows: Vec<Vec<Field>> = (0..500)
        .map(|i| {
            let lat = 45.3 + (i % 25) as f64 * 0.02;
            let lon = -122.9 + (i / 25) as f64 * 0.02;
            let color = if i % 2 == 0 { "red" } else { "blue" };
            vec![lat.into(), lon.into(), color.into()]
        })
        .collect();

    let cluster = FastMarkerCluster::builder(rows)
        .with_callback(
            "function(row){return L.circleMarker([row[0],row[1]],{radius:6,color:row[2]});}",
        )
        .with_option("maxClusterRadius", 60)
        .with_option("spiderfyOnMaxZoom", false)
        .build()?;

    let script = cluster.render("cluster_0", "map_0")?;

    let config = PageConfig::new("custom callback circles", (45.55, -122.7), 11);
    let out = "custom-callback-circles.html";
    write_page(&config, &script, out)?;
    println!("wrote {out}");

    Ok(())
}
