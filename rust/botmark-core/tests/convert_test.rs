use botmark_core::convert;

#[test]
fn full_example_map_converts_in_reference_order() {
    let src = "N('m0') N('m1') Z1(m0) G2(m0) m0.view_ofs_z=40 m0.P0=m1 m0.D0=512";
    let expected = "\
CreateMarker m0
CreateMarker m1
SetGoal 0 2
SetZone 0 1
SetMarkerViewOfs 0 40
SetMarkerPath 0 0 m1
SetMarkerPathFlags 0 0 j";
    assert_eq!(convert(src).unwrap(), expected);
}

#[test]
fn input_without_recognized_patterns_yields_empty_output() {
    assert_eq!(convert("").unwrap(), "");
    assert_eq!(convert("void() worldspawn = { precache(); };").unwrap(), "");
}

#[test]
fn conversion_is_deterministic() {
    let src = "N('a') N('b') Z2(m1) G9(m3) m1.P0=m3 m3.D1=1024 m1.view_ofs_z=22";
    assert_eq!(convert(src).unwrap(), convert(src).unwrap());
}

#[test]
fn patterns_interleave_freely_with_other_text() {
    let src = "\
// DM4 bot markers
void() dm4_markers =
{
    N('dm4-rl');
    Z1(m0);
    self.spawnflags = 3;
    G4(m0);
};";
    let expected = "CreateMarker dm4-rl\nSetGoal 0 4\nSetZone 0 1";
    assert_eq!(convert(src).unwrap(), expected);
}

#[test]
fn oversized_numeric_field_surfaces_an_error() {
    let err = convert("m99999999999999999999.view_ofs_z=1").unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
