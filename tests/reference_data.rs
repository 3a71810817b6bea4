//! 참조 데이터 로드/검증 테스트.
use approx::assert_relative_eq;
use cold_room_toolbox::reference::{
    CompressorModel, EvaporatorModel, ProductKind, ReferenceData, ReferenceError,
};
use std::io::Write;

#[test]
fn builtin_tables_match_published_values() {
    let data = ReferenceData::builtin();
    assert_eq!(data.insulation_grades(), vec![60, 80, 100, 120, 150, 200]);
    assert_relative_eq!(data.u_value(60).expect("60"), 0.367);
    assert_relative_eq!(data.u_value(200).expect("200"), 0.110);
    assert!(data.u_value(90).is_err());

    let meat = data.product(ProductKind::Meat).expect("meat");
    assert_relative_eq!(meat.specific_heat_kj_per_kgk, 3.14);
    let frozen = data.product(ProductKind::Frozen).expect("frozen");
    assert_relative_eq!(frozen.specific_heat_kj_per_kgk, 2.05);
    assert_relative_eq!(frozen.freezing_point_c, -18.0);

    assert_eq!(data.compressors().len(), 9);
    assert_eq!(data.evaporators().len(), 6);
    assert_eq!(data.compressor_manufacturer(), Some("BITZER"));
}

#[test]
fn builtin_passes_load_time_validation() {
    let doc = ReferenceData::builtin().to_document();
    let validated = ReferenceData::from_document(doc).expect("builtin is valid");
    assert_eq!(validated, ReferenceData::builtin());
}

#[test]
fn toml_export_loads_back() {
    let builtin = ReferenceData::builtin();
    let text = builtin.to_toml_string().expect("export");
    let loaded = ReferenceData::from_toml_str(&text).expect("reload");
    assert_eq!(loaded, builtin);
}

#[test]
fn from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    let text = ReferenceData::builtin().to_toml_string().expect("export");
    file.write_all(text.as_bytes()).expect("write");
    let loaded = ReferenceData::from_path(file.path()).expect("load");
    assert_eq!(loaded.compressors().len(), 9);
}

fn compressor(model: &str, low: f64, mid: f64) -> CompressorModel {
    CompressorModel {
        model: model.to_string(),
        low_temp_capacity_kw: low,
        mid_temp_capacity_kw: mid,
        input_power_kw: 1.0,
        price: 100,
    }
}

fn evaporator(model: &str, capacity: f64) -> EvaporatorModel {
    EvaporatorModel {
        model: model.to_string(),
        capacity_kw: capacity,
        price: 10,
    }
}

fn build(
    compressors: Vec<CompressorModel>,
    evaporators: Vec<EvaporatorModel>,
) -> Result<ReferenceData, ReferenceError> {
    let doc = ReferenceData::builtin().to_document();
    ReferenceData::new(doc.products, doc.insulation, compressors, evaporators)
}

#[test]
fn descending_compressor_catalog_rejected() {
    let err = build(
        vec![compressor("BIG", 2.0, 4.0), compressor("SMALL", 1.0, 2.0)],
        vec![evaporator("E", 1.0)],
    )
    .unwrap_err();
    match err {
        ReferenceError::CatalogOrder {
            catalog,
            model,
            previous,
            ..
        } => {
            assert_eq!(catalog, "compressor");
            assert_eq!(model, "SMALL");
            assert_eq!(previous, "BIG");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn mid_temp_column_order_checked_too() {
    let err = build(
        vec![compressor("A", 1.0, 3.0), compressor("B", 2.0, 2.5)],
        vec![evaporator("E", 1.0)],
    )
    .unwrap_err();
    assert!(matches!(err, ReferenceError::CatalogOrder { column: "중온", .. }));
}

#[test]
fn descending_evaporator_catalog_rejected() {
    let err = build(
        vec![compressor("A", 1.0, 2.0)],
        vec![evaporator("E-5", 5.0), evaporator("E-3", 3.0)],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ReferenceError::CatalogOrder {
            catalog: "evaporator",
            ..
        }
    ));
}

#[test]
fn equal_capacities_are_allowed() {
    build(
        vec![compressor("A", 1.0, 2.0), compressor("B", 1.0, 2.0)],
        vec![evaporator("E-1", 1.0), evaporator("E-2", 1.0)],
    )
    .expect("non-decreasing is fine");
}

#[test]
fn invalid_entries_rejected() {
    assert!(matches!(
        build(vec![], vec![evaporator("E", 1.0)]),
        Err(ReferenceError::EmptyCatalog { .. })
    ));
    assert!(matches!(
        build(
            vec![compressor("A", 1.0, 2.0), compressor("A", 2.0, 3.0)],
            vec![evaporator("E", 1.0)]
        ),
        Err(ReferenceError::DuplicateEntry { .. })
    ));
    assert!(matches!(
        build(vec![compressor("A", 0.0, 2.0)], vec![evaporator("E", 1.0)]),
        Err(ReferenceError::NonPositive { .. })
    ));
    assert!(matches!(
        build(vec![compressor(" ", 1.0, 2.0)], vec![evaporator("E", 1.0)]),
        Err(ReferenceError::EmptyModelName { .. })
    ));
}

#[test]
fn duplicate_insulation_grade_rejected() {
    let err = ReferenceData::from_toml_str(
        r#"
        [[products]]
        kind = "fish"
        name = "Fish"
        specific_heat_kj_per_kgk = 3.78
        freezing_point_c = -2.0

        [[insulation]]
        thickness_mm = 100
        u_value_w_m2k = 0.22

        [[insulation]]
        thickness_mm = 100
        u_value_w_m2k = 0.25

        [[compressors]]
        model = "A"
        low_temp_capacity_kw = 1.0
        mid_temp_capacity_kw = 2.0
        input_power_kw = 1.0
        price = 1

        [[evaporators]]
        model = "E"
        capacity_kw = 1.0
        price = 1
        "#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ReferenceError::DuplicateEntry {
            table: "insulation",
            ..
        }
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = ReferenceData::from_toml_str("products = 3").unwrap_err();
    assert!(matches!(err, ReferenceError::Parse(_)));
}

#[test]
fn product_kind_parsing() {
    assert_eq!("Meat".parse::<ProductKind>(), Ok(ProductKind::Meat));
    assert_eq!(" frozen ".parse::<ProductKind>(), Ok(ProductKind::Frozen));
    assert!("cheese".parse::<ProductKind>().is_err());
}
