//! The fast marker cluster component: frozen rows, options, and callback
//! rendered as a single script block.
use serde_json::{Map, Value};
use tracing::debug;

use crate::callback::Callback;
use crate::error::Result;
use crate::options::ClusterOptions;
use crate::rows::{normalize, ClusterData, RowCollection};
use crate::script;

/// Layer-registration metadata forwarded to the host container. The library
/// carries it opaquely; only the host reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct LayerSpec {
    /// Display name in layer controls.
    pub name: Option<String>,
    /// Register as an optional overlay rather than a base layer.
    pub overlay: bool,
    /// Include in layer controls.
    pub control: bool,
    /// Shown on opening (overlays only).
    pub show: bool,
}

impl Default for LayerSpec {
    fn default() -> Self {
        Self {
            name: None,
            overlay: true,
            control: true,
            show: true,
        }
    }
}

/// A clustered-marker layer rendered entirely client side.
///
/// Rows, options, and the per-row callback are validated and frozen at
/// construction. No per-marker objects are retained in the host process, so
/// thousands of points render as one script block; the trade-off is that
/// nothing about individual markers (bounds included) can be queried back.
#[derive(Debug, Clone)]
pub struct FastMarkerCluster {
    rows: RowCollection,
    options: Map<String, Value>,
    callback: Callback,
    layer: LayerSpec,
}

impl FastMarkerCluster {
    /// Validate `data` and build a cluster with the default callback and no
    /// options. Use [`FastMarkerCluster::builder`] for anything else.
    pub fn new(data: impl Into<ClusterData>) -> Result<Self> {
        Self::builder(data).build()
    }

    pub fn builder(data: impl Into<ClusterData>) -> FastMarkerClusterBuilder {
        FastMarkerClusterBuilder {
            data: data.into(),
            callback: Callback::Default,
            options: ClusterOptions::new(),
            layer: LayerSpec::default(),
        }
    }

    /// Normalized rows, in input order.
    pub fn rows(&self) -> &RowCollection {
        &self.rows
    }

    /// Merged cluster options, as forwarded to `L.markerClusterGroup`.
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Registration metadata for the host container.
    pub fn layer(&self) -> &LayerSpec {
        &self.layer
    }

    /// Render the script block binding the cluster group to `container_name`
    /// and attaching it to `parent_name`.
    ///
    /// Repeatable: output is byte-identical for an unchanged instance. Fails
    /// only if a row value or option cannot be represented in the literal
    /// form, with the offending position named in the error.
    pub fn render(&self, container_name: &str, parent_name: &str) -> Result<String> {
        script::render_script(
            &self.rows,
            &self.options,
            &self.callback,
            container_name,
            parent_name,
        )
    }
}

/// Builder for [`FastMarkerCluster`]. Validation runs once in
/// [`FastMarkerClusterBuilder::build`]; no partially-constructed cluster is
/// ever exposed.
#[derive(Debug, Clone)]
pub struct FastMarkerClusterBuilder {
    data: ClusterData,
    callback: Callback,
    options: ClusterOptions,
    layer: LayerSpec,
}

impl FastMarkerClusterBuilder {
    /// Use a custom per-row transform fragment instead of the built-in
    /// marker constructor. Emitted verbatim.
    pub fn with_callback(mut self, fragment: impl Into<String>) -> Self {
        self.callback = Callback::custom(fragment);
        self
    }

    /// Set the legacy options mapping. Entries added via
    /// [`FastMarkerClusterBuilder::with_option`] win on key collision.
    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = self.options.with_legacy(options);
        self
    }

    /// Add one cluster option, forwarded verbatim to the client runtime.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options = self.options.with_entry(key, value);
        self
    }

    /// Set the layer display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.layer.name = Some(name.into());
        self
    }

    pub fn with_overlay(mut self, overlay: bool) -> Self {
        self.layer.overlay = overlay;
        self
    }

    pub fn with_control(mut self, control: bool) -> Self {
        self.layer.control = control;
        self
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.layer.show = show;
        self
    }

    /// Normalize the input rows and freeze the cluster.
    pub fn build(self) -> Result<FastMarkerCluster> {
        let rows = normalize(self.data)?;
        let options = self.options.merged();
        debug!(
            "built cluster: {} row(s), {} option(s)",
            rows.len(),
            options.len()
        );
        Ok(FastMarkerCluster {
            rows,
            options,
            callback: self.callback,
            layer: self.layer,
        })
    }
}
