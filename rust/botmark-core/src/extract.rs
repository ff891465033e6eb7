use regex::Regex;
use tracing::debug;

use crate::errors::ConvertError;
use crate::model::MapModel;

fn parse_id(text: &str) -> Result<u32, ConvertError> {
    text.parse::<u32>()
        .map_err(|_| ConvertError::FieldOutOfRange { text: text.to_string() })
}

/// Scan the full source once per pattern and accumulate every recognized
/// fact into a [`MapModel`]. Each scan is global, leftmost-first and
/// non-overlapping; text that matches none of the patterns is ignored.
///
/// Marker ids and slot indices are parsed (they drive numeric ordering
/// later); zone ids, goal ids, view offsets, path targets and raw flag
/// values are kept as captured text.
pub fn extract(source: &str) -> Result<MapModel, ConvertError> {
    let mut model = MapModel::default();

    // N('DM6-RL') -- free-standing node declaration
    let node_re = Regex::new(r"N\('([^']+)'\)").unwrap();
    for caps in node_re.captures_iter(source) {
        model.nodes.push(caps[1].to_string());
    }

    // Z1(m0) -- zone 1 applied to marker 0
    let zone_re = Regex::new(r"Z(\d+)\(m(\d+)\)").unwrap();
    for caps in zone_re.captures_iter(source) {
        let marker = parse_id(&caps[2])?;
        model.marker_mut(marker).zone = Some(caps[1].to_string());
    }

    // G2(m0) -- goal 2 applied to marker 0
    let goal_re = Regex::new(r"G(\d+)\(m(\d+)\)").unwrap();
    for caps in goal_re.captures_iter(source) {
        let marker = parse_id(&caps[2])?;
        model.marker_mut(marker).goal = Some(caps[1].to_string());
    }

    // m0.view_ofs_z=40
    let view_ofs_re = Regex::new(r"m(\d+)\.view_ofs_z=(\d+)").unwrap();
    for caps in view_ofs_re.captures_iter(source) {
        let marker = parse_id(&caps[1])?;
        model.marker_mut(marker).view_ofs = Some(caps[2].to_string());
    }

    // m0.P0=m1 -- path slot 0 of marker 0 points at m1
    let path_re = Regex::new(r"m(\d+)\.P(\d+)=(m\d+)").unwrap();
    for caps in path_re.captures_iter(source) {
        let marker = parse_id(&caps[1])?;
        let slot = parse_id(&caps[2])?;
        model.set_path(marker, slot, caps[3].to_string());
    }

    // m0.D0=512 -- raw flag value for path slot 0 of marker 0
    let flag_re = Regex::new(r"m(\d+)\.D(\d+)=(\d+)").unwrap();
    for caps in flag_re.captures_iter(source) {
        let marker = parse_id(&caps[1])?;
        let slot = parse_id(&caps[2])?;
        model.set_flag(marker, slot, caps[3].to_string());
    }

    debug!(
        nodes = model.nodes.len(),
        markers = model.markers.len(),
        path_markers = model.paths.len(),
        flag_markers = model.flags.len(),
        "scanned map source"
    );
    Ok(model)
}
