//! Per-row transform fragments converting a coordinate row into a marker.
//!
//! The fragment is resolved once at construction and emitted verbatim into
//! the script; the library never parses or interprets it.

/// Script text of the built-in transform: a plain marker with the default
/// AwesomeMarkers icon, built from the row's first two elements.
const DEFAULT_FRAGMENT: &str = "\
var callback = function (row) {
    var icon = L.AwesomeMarkers.icon();
    var marker = L.marker(new L.LatLng(row[0], row[1]));
    marker.setIcon(icon);
    return marker;
};";

/// The per-row transform applied in the browser.
///
/// A custom fragment must be a function expression taking one row and
/// returning a single drawable marker; it is bound to `callback` in the
/// emitted script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Callback {
    #[default]
    Default,
    Custom(String),
}

impl Callback {
    pub fn custom(fragment: impl Into<String>) -> Self {
        Callback::Custom(fragment.into())
    }

    /// Script text defining the `callback` binding.
    pub fn script(&self) -> String {
        match self {
            Callback::Default => DEFAULT_FRAGMENT.to_owned(),
            Callback::Custom(fragment) => format!("var callback = {fragment};"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fragment_builds_marker_from_first_two_elements() {
        let script = Callback::Default.script();
        assert!(script.contains("var callback = function (row)"));
        assert!(script.contains("new L.LatLng(row[0], row[1])"));
        assert!(script.contains("L.AwesomeMarkers.icon()"));
    }

    #[test]
    fn custom_fragment_is_emitted_verbatim() {
        let fragment = "function(row){return L.circleMarker([row[0],row[1]]);}";
        let script = Callback::custom(fragment).script();
        assert_eq!(
            script,
            "var callback = function(row){return L.circleMarker([row[0],row[1]]);};"
        );
    }
}
