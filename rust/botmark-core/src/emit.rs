use crate::model::MapModel;

/// Raw flag values with a KTX path-flag letter. Anything else emits no
/// flag line for that slot. The lookup is textual, matching the source
/// format: "0512" is not "512".
fn flag_code(raw: &str) -> Option<&'static str> {
    match raw {
        "512" => Some("j"),
        "1024" => Some("r"),
        _ => None,
    }
}

/// Re-emit the model as KTX bot commands in the fixed four-phase order:
/// node creation (input order), per-marker scalars (goal, zone, view
/// offset), path assignments, then path flags. Markers and slot indices
/// iterate ascending; markers that only appear in the path or flag tables
/// get no scalar lines.
pub fn emit(model: &MapModel) -> String {
    let mut lines: Vec<String> = Vec::new();

    for name in &model.nodes {
        lines.push(format!("CreateMarker {name}"));
    }

    for (marker, rec) in &model.markers {
        if let Some(goal) = &rec.goal {
            lines.push(format!("SetGoal {marker} {goal}"));
        }
        if let Some(zone) = &rec.zone {
            lines.push(format!("SetZone {marker} {zone}"));
        }
        if let Some(view_ofs) = &rec.view_ofs {
            lines.push(format!("SetMarkerViewOfs {marker} {view_ofs}"));
        }
    }

    for (marker, slots) in &model.paths {
        for (slot, target) in slots {
            lines.push(format!("SetMarkerPath {marker} {slot} {target}"));
        }
    }

    for (marker, slots) in &model.flags {
        for (slot, raw) in slots {
            if let Some(code) = flag_code(raw) {
                lines.push(format!("SetMarkerPathFlags {marker} {slot} {code}"));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MapModel;

    #[test]
    fn flag_lookup_is_textual() {
        assert_eq!(flag_code("512"), Some("j"));
        assert_eq!(flag_code("1024"), Some("r"));
        assert_eq!(flag_code("0512"), None);
        assert_eq!(flag_code("256"), None);
        assert_eq!(flag_code("1536"), None);
    }

    #[test]
    fn scalar_lines_follow_goal_zone_view_ofs_order() {
        let mut model = MapModel::default();
        let rec = model.marker_mut(3);
        rec.view_ofs = Some("40".to_string());
        rec.zone = Some("1".to_string());
        rec.goal = Some("2".to_string());
        assert_eq!(emit(&model), "SetGoal 3 2\nSetZone 3 1\nSetMarkerViewOfs 3 40");
    }

    #[test]
    fn empty_model_emits_empty_string() {
        assert_eq!(emit(&MapModel::default()), "");
    }
}
