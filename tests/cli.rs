//! 설정 파일, 명령행 파싱, 텍스트 보고서, 대화형 입력 테스트.
use clap::Parser;
use cold_room_toolbox::app::{Cli, Command, InputArgs};
use cold_room_toolbox::config::{self, Config};
use cold_room_toolbox::reference::{ProductKind, ReferenceData};
use cold_room_toolbox::refrigeration::{
    InputError, RefrigerantKind, SizingEngine, SizingInput,
};
use cold_room_toolbox::ui_cli;
use std::io::Cursor;

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default(&path).expect("create");
    assert!(path.exists());
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.defaults, SizingInput::default());

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
}

#[test]
fn config_reference_path_is_relative_to_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = ReferenceData::builtin().with_compressor_manufacturer("ACME");
    std::fs::write(
        dir.path().join("catalog.toml"),
        data.to_toml_string().expect("export"),
    )
    .expect("write catalog");

    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "reference_data = \"catalog.toml\"\n").expect("write config");
    let cfg = config::load_or_default(&cfg_path).expect("load");
    assert_eq!(cfg.defaults, SizingInput::default());

    let loaded = cfg.load_reference_data(&cfg_path).expect("reference");
    assert_eq!(loaded.compressor_manufacturer(), Some("ACME"));
}

#[test]
fn partial_defaults_section_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults.chamber]\nlength_m = 4.0\n").expect("write");
    assert!(config::load_or_default(&path).is_err());
}

#[test]
fn size_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "cold_room_toolbox",
        "size",
        "--internal",
        "-20",
        "--evaporating",
        "-27",
        "--product",
        "fish",
        "--run-hours",
        "20",
        "--refrigerant",
        "r449a",
        "--json",
    ])
    .expect("parse");

    let Command::Size { input, json, report } = cli.command else {
        panic!("expected size command");
    };
    assert!(json);
    assert!(report.is_none());

    let applied = input.apply(SizingInput::default());
    assert_eq!(applied.thermal.internal_temp_c, -20.0);
    assert_eq!(applied.thermal.evaporating_temp_c, -27.0);
    assert_eq!(applied.thermal.ambient_temp_c, 35.0);
    assert_eq!(applied.product.kind, ProductKind::Fish);
    assert_eq!(applied.operating.daily_run_hours, 20);
    assert_eq!(applied.operating.refrigerant, RefrigerantKind::R449A);
    assert_eq!(applied.chamber, SizingInput::default().chamber);
}

#[test]
fn empty_overrides_keep_defaults() {
    let base = SizingInput::default();
    assert_eq!(InputArgs::default().apply(base), base);
}

#[test]
fn unknown_product_flag_rejected() {
    assert!(Cli::try_parse_from(["cold_room_toolbox", "size", "--product", "cheese"]).is_err());
}

#[test]
fn input_validation() {
    assert_eq!(SizingInput::default().validate(), Ok(()));

    let mut input = SizingInput::default();
    input.chamber.width_m = 0.0;
    assert_eq!(
        input.validate(),
        Err(InputError::NotPositive {
            field: "width_m",
            value: 0.0
        })
    );

    let mut input = SizingInput::default();
    input.operating.daily_run_hours = 10;
    assert_eq!(input.validate(), Err(InputError::RunHoursOutOfRange(10)));

    let mut input = SizingInput::default();
    input.product.daily_throughput_kg = -1.0;
    assert!(matches!(input.validate(), Err(InputError::Negative { .. })));

    let mut input = SizingInput::default();
    input.thermal.ambient_temp_c = f64::NAN;
    assert!(matches!(input.validate(), Err(InputError::NotFinite { .. })));
}

#[test]
fn text_report_lists_selection_and_loads() {
    let engine = SizingEngine::builtin();
    let report = engine.size(&SizingInput::default()).expect("size");
    let text = ui_cli::render_report(&report, engine.reference_data());

    assert!(text.contains("BITZER 2JES-07Y"), "{text}");
    assert!(text.contains("ECO-3"));
    assert!(text.contains("필요 냉동능력: 0.94 kW"));
    assert!(text.contains("+15%"));
    assert!(text.contains("합계: 800"));
    assert!(!text.contains("[검토 사항]"));
}

#[test]
fn text_report_explains_missing_equipment() {
    let engine = SizingEngine::builtin();
    let mut input = SizingInput::default();
    input.product.daily_throughput_kg = 2_000_000.0;
    let report = engine.size(&input).expect("size");
    let text = ui_cli::render_report(&report, engine.reference_data());

    assert!(text.contains("압축기: 적합한 모델 없음"));
    assert!(text.contains("증발기: 적합한 모델 없음"));
    assert!(text.contains("카탈로그 범위를 초과합니다"));
    assert!(text.contains("[검토 사항]"));
    assert!(!text.contains("합계"));
}

#[test]
fn json_report_uses_band_names() {
    let report = SizingEngine::builtin()
        .size(&SizingInput::default())
        .expect("size");
    let json = serde_json::to_value(&report).expect("json");
    assert_eq!(json["load"]["capacity_band"], "MID_TEMP");
    assert_eq!(json["selection"]["compressor"]["model"], "2JES-07Y");
    assert_eq!(json["input"]["product"]["kind"], "meat");
}

#[test]
fn catalog_listing_contains_all_models() {
    let data = ReferenceData::builtin();
    let text = ui_cli::render_catalog(&data);
    for c in data.compressors() {
        assert!(text.contains(&c.model));
    }
    for e in data.evaporators() {
        assert!(text.contains(&e.model));
    }
    assert!(text.contains("frozen"));
}

#[test]
fn interactive_prompts_use_defaults_and_retry() {
    let answers = "abc\n4\n\n\n120\n\n-20\n-28\n\nfrozen\n\n-18\n24\nr449a\n";
    let mut reader = Cursor::new(answers.as_bytes());
    let mut output = Vec::new();
    let input = ui_cli::prompt_input_from(
        &mut reader,
        &mut output,
        &SizingInput::default(),
        &ReferenceData::builtin(),
    )
    .expect("prompt");

    assert_eq!(input.chamber.length_m, 4.0);
    assert_eq!(input.chamber.width_m, 2.0);
    assert_eq!(input.chamber.insulation_thickness_mm, 120);
    assert_eq!(input.thermal.ambient_temp_c, 35.0);
    assert_eq!(input.thermal.internal_temp_c, -20.0);
    assert_eq!(input.thermal.evaporating_temp_c, -28.0);
    assert_eq!(input.product.kind, ProductKind::Frozen);
    assert_eq!(input.product.daily_throughput_kg, 500.0);
    assert_eq!(input.product.incoming_temp_c, -18.0);
    assert_eq!(input.operating.daily_run_hours, 24);
    assert_eq!(input.operating.refrigerant, RefrigerantKind::R449A);

    let shown = String::from_utf8(output).expect("utf8");
    assert!(shown.contains("잘못된 입력입니다"));
}

#[test]
fn interactive_eof_keeps_remaining_defaults() {
    let mut reader = Cursor::new("5\n".as_bytes());
    let mut output = Vec::new();
    let input = ui_cli::prompt_input_from(
        &mut reader,
        &mut output,
        &SizingInput::default(),
        &ReferenceData::builtin(),
    )
    .expect("prompt");
    let mut expected = SizingInput::default();
    expected.chamber.length_m = 5.0;
    assert_eq!(input, expected);
}
