use std::collections::BTreeMap;

use serde::Serialize;

/// Scalar attributes of a single marker. Values are kept exactly as they
/// were captured from the source text; nothing downstream does arithmetic
/// on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkerRecord {
    pub goal: Option<String>,
    pub zone: Option<String>,
    pub view_ofs: Option<String>,
}

/// Everything recognized in one map definition file.
///
/// The `BTreeMap` keys are what the emission phase iterates, so marker ids
/// and slot indices come out in ascending numeric order without a separate
/// sort step. Re-inserting a key overwrites the previous value, which is
/// exactly the latest-definition-wins behavior hand-authored map files
/// rely on.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MapModel {
    /// Free-standing node names, in first-occurrence order.
    pub nodes: Vec<String>,
    /// marker id -> scalar attributes
    pub markers: BTreeMap<u32, MarkerRecord>,
    /// marker id -> path slot -> target marker text (verbatim, e.g. "m1")
    pub paths: BTreeMap<u32, BTreeMap<u32, String>>,
    /// marker id -> flag slot -> raw flag value text
    pub flags: BTreeMap<u32, BTreeMap<u32, String>>,
}

impl MapModel {
    /// Record for `marker`, created empty on first touch.
    pub fn marker_mut(&mut self, marker: u32) -> &mut MarkerRecord {
        self.markers.entry(marker).or_default()
    }

    pub fn set_path(&mut self, marker: u32, slot: u32, target: String) {
        self.paths.entry(marker).or_default().insert(slot, target);
    }

    pub fn set_flag(&mut self, marker: u32, slot: u32, raw: String) {
        self.flags.entry(marker).or_default().insert(slot, raw);
    }
}
