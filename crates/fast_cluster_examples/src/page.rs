//! Shared helpers for the example binaries: tracing setup and a minimal
//! Leaflet HTML page shell around a rendered cluster script.
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honoring `RUST_LOG`, defaulting to `debug` so the
/// library's normalization/render events are visible.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Page shell settings. `map_var` is the parent identifier the cluster
/// script attaches to.
pub struct PageConfig {
    pub title: String,
    pub map_var: String,
    pub center: (f64, f64),
    pub zoom: u8,
}

impl PageConfig {
    pub fn new(title: impl Into<String>, center: (f64, f64), zoom: u8) -> Self {
        Self {
            title: title.into(),
            map_var: "map_0".into(),
            center,
            zoom,
        }
    }
}

/// Write a self-contained HTML page embedding `script` after the Leaflet and
/// markercluster includes.
pub fn write_page(config: &PageConfig, script: &str, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let mut html = String::with_capacity(script.len() + 2048);
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html>");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\"/>");
    let _ = writeln!(html, "<title>{}</title>", config.title);
    for href in [
        "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css",
        "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css",
        "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css",
        "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css",
    ] {
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{href}\"/>");
    }
    for src in [
        "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js",
        "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js",
        "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.min.js",
    ] {
        let _ = writeln!(html, "<script src=\"{src}\"></script>");
    }
    let _ = writeln!(html, "<style>html, body, #map {{ height: 100%; margin: 0; }}</style>");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<div id=\"map\"></div>");
    let _ = writeln!(html, "<script>");
    let _ = writeln!(
        html,
        "var {} = L.map(\"map\").setView([{}, {}], {});",
        config.map_var, config.center.0, config.center.1, config.zoom
    );
    let _ = writeln!(
        html,
        "L.tileLayer(\"https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png\").addTo({});",
        config.map_var
    );
    html.push_str(script);
    let _ = writeln!(html, "</script>");
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");

    fs::write(path, html)?;
    Ok(())
}
