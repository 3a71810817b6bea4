//! 입력 일관성 검토 메시지 테스트.
use cold_room_toolbox::reference::ReferenceData;
use cold_room_toolbox::refrigeration::{
    compute_load, compute_warnings, Advisory, Severity, SizingEngine, SizingInput,
};

fn warnings_for(input: &SizingInput) -> Vec<Advisory> {
    let load = compute_load(input, &ReferenceData::builtin()).expect("load");
    compute_warnings(input, &load)
}

#[test]
fn reference_chamber_has_no_advisories() {
    assert!(warnings_for(&SizingInput::default()).is_empty());
}

#[test]
fn all_checks_reported_in_fixed_order() {
    let mut input = SizingInput::default();
    input.chamber.length_m = 10.0;
    input.chamber.width_m = 10.0;
    input.chamber.height_m = 2.0;
    input.thermal.ambient_temp_c = 35.0;
    input.thermal.internal_temp_c = 40.0;
    input.thermal.evaporating_temp_c = 45.0;
    input.product.incoming_temp_c = -5.0;
    input.product.daily_throughput_kg = 50_000.0;

    let w = warnings_for(&input);
    assert_eq!(w.len(), 5, "{w:?}");
    assert!(matches!(w[0], Advisory::InternalNotBelowAmbient { .. }));
    assert!(matches!(w[1], Advisory::ProductColderThanChamber { .. }));
    assert!(matches!(w[2], Advisory::EvaporatorNotBelowChamber { .. }));
    assert!(matches!(w[3], Advisory::LargeVolume { volume_m3 } if volume_m3 == 200.0));
    assert!(
        matches!(w[4], Advisory::ExcessiveLoadingDensity { kg_per_m3 } if kg_per_m3 == 250.0)
    );
}

#[test]
fn equal_temperatures_are_flagged() {
    let mut input = SizingInput::default();
    input.thermal.internal_temp_c = 35.0;
    input.thermal.evaporating_temp_c = 35.0;
    input.product.incoming_temp_c = 35.0;
    let w = warnings_for(&input);
    assert_eq!(w.len(), 2, "{w:?}");
    assert!(matches!(w[0], Advisory::InternalNotBelowAmbient { .. }));
    assert!(matches!(w[1], Advisory::EvaporatorNotBelowChamber { .. }));
}

#[test]
fn thresholds_are_strict() {
    let mut input = SizingInput::default();
    // 5 × 5 × 4 = 100 m³, 20 000 kg/day → 200 kg/m³
    input.chamber.length_m = 5.0;
    input.chamber.width_m = 5.0;
    input.chamber.height_m = 4.0;
    input.product.daily_throughput_kg = 20_000.0;
    assert!(warnings_for(&input).is_empty());
}

#[test]
fn large_volume_is_informational() {
    let mut input = SizingInput::default();
    input.chamber.length_m = 12.0;
    input.chamber.width_m = 5.0;
    input.chamber.height_m = 3.0;
    let w = warnings_for(&input);
    assert_eq!(w.len(), 1);
    assert_eq!(w[0].severity(), Severity::Info);
    assert!(w[0].to_string().contains("180.0"));
}

#[test]
fn advisories_do_not_block_results() {
    let mut input = SizingInput::default();
    input.thermal.internal_temp_c = 40.0;
    let report = SizingEngine::builtin().size(&input).expect("size");
    assert!(!report.advisories.is_empty());
    assert_eq!(report.advisories[0].severity(), Severity::Warning);
    assert!(report.load.required_capacity_kw.is_finite());
}
