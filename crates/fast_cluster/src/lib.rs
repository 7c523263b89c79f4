#![forbid(unsafe_code)]
//! fast_cluster: render clustered map markers as a single Leaflet script block.
//!
//! Modules:
//! - rows: normalize raw point records into validated coordinate rows
//! - options: merge cluster options from a legacy mapping and ad-hoc entries
//! - callback: per-row transform fragments (built-in default or user-supplied)
//! - script: serialize rows/options and assemble the emitted script block
//! - cluster: the `FastMarkerCluster` component and its builder
//!
//! For examples and docs, see README and docs.rs.
pub mod callback;
pub mod cluster;
pub mod error;
pub mod options;
pub mod rows;
pub mod script;

/// Convenient re-exports for common types. Import with `use fast_cluster::prelude::*;`.
pub mod prelude {
    pub use crate::callback::Callback;
    pub use crate::cluster::{FastMarkerCluster, FastMarkerClusterBuilder, LayerSpec};
    pub use crate::error::{Error, Result};
    pub use crate::options::ClusterOptions;
    pub use crate::rows::{normalize, ClusterData, CoordinateRow, Field, RowCollection};
    pub use crate::script::render_script;
}
