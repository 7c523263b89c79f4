//! Script assembly: serializes rows and options into JSON literals and emits
//! the self-invoking cluster block.
//!
//! Assembly is explicit string building rather than a template engine so the
//! operational order of the emitted block stays inspectable: callback
//! definition, data literal, options literal, cluster construction, per-row
//! loop, attach to parent, return.
use serde_json::{Map, Value};
use tracing::debug;

use crate::callback::Callback;
use crate::error::{Error, Result};
use crate::rows::{Field, RowCollection};

/// Render the script block for one cluster instance.
///
/// `container_name` must be unique within the enclosing script document; the
/// host container is responsible for allocating it. Output is deterministic:
/// the same inputs always produce byte-identical text.
pub fn render_script(
    rows: &RowCollection,
    options: &Map<String, Value>,
    callback: &Callback,
    container_name: &str,
    parent_name: &str,
) -> Result<String> {
    let data = data_literal(rows)?;
    let options = options_literal(options)?;
    let callback = callback.script();

    let mut script = String::with_capacity(data.len() + options.len() + callback.len() + 256);
    script.push_str(&format!("var {container_name} = (function () {{\n"));
    for line in callback.lines() {
        script.push_str("    ");
        script.push_str(line);
        script.push('\n');
    }
    script.push('\n');
    script.push_str(&format!("    var data = {data};\n"));
    script.push_str(&format!(
        "    var cluster = L.markerClusterGroup({options});\n\n"
    ));
    script.push_str("    for (var i = 0; i < data.length; i++) {\n");
    script.push_str("        var row = data[i];\n");
    script.push_str("        var marker = callback(row);\n");
    script.push_str("        marker.addTo(cluster);\n");
    script.push_str("    }\n\n");
    script.push_str(&format!("    cluster.addTo({parent_name});\n"));
    script.push_str("    return cluster;\n");
    script.push_str("})();\n");

    debug!(
        "rendered cluster script '{}': {} row(s), {} byte(s)",
        container_name,
        rows.len(),
        script.len()
    );
    Ok(script)
}

/// Serialize the row collection to a compact nested-array literal, outer
/// order equal to row order, inner order lat, lon, extras.
pub fn data_literal(rows: &RowCollection) -> Result<String> {
    let mut out = String::with_capacity(rows.len() * 24 + 2);
    out.push('[');
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push('[');
        write_number(&mut out, row.lat, index, 0)?;
        out.push(',');
        write_number(&mut out, row.lon, index, 1)?;
        for (offset, value) in row.extras.iter().enumerate() {
            out.push(',');
            write_field(&mut out, value, index, offset + 2)?;
        }
        out.push(']');
    }
    out.push(']');
    Ok(out)
}

/// Serialize merged options to a compact object literal with deterministic
/// key order.
pub fn options_literal(options: &Map<String, Value>) -> Result<String> {
    let mut out = String::from("{");
    for (index, (key, value)) in options.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        let key_literal =
            serde_json::to_string(key).map_err(|_| Error::OptionSerialization {
                key: key.clone(),
            })?;
        let value_literal =
            serde_json::to_string(value).map_err(|_| Error::OptionSerialization {
                key: key.clone(),
            })?;
        out.push_str(&key_literal);
        out.push(':');
        out.push_str(&value_literal);
    }
    out.push('}');
    Ok(out)
}

fn write_field(out: &mut String, value: &Field, row: usize, field: usize) -> Result<()> {
    match value {
        Field::Null => out.push_str("null"),
        Field::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Field::Number(n) => write_number(out, *n, row, field)?,
        Field::Text(s) => {
            let literal =
                serde_json::to_string(s).map_err(|_| Error::Serialization { row, field })?;
            out.push_str(&literal);
        }
    }
    Ok(())
}

fn write_number(out: &mut String, value: f64, row: usize, field: usize) -> Result<()> {
    // NaN and infinities have no JSON representation.
    if !value.is_finite() {
        return Err(Error::Serialization { row, field });
    }
    let literal = serde_json::to_string(&value).map_err(|_| Error::Serialization { row, field })?;
    out.push_str(&literal);
    Ok(())
}
