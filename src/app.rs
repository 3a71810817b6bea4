use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{self, ConfigError, DEFAULT_CONFIG_FILE};
use crate::reference::{LookupError, ProductKind, ReferenceError};
use crate::refrigeration::{InputError, RefrigerantKind, SizingEngine, SizingInput};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("참조 데이터 오류: {0}")]
    Reference(#[from] ReferenceError),
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
    #[error("계산 오류: {0}")]
    Lookup(#[from] LookupError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "냉장실 열부하 계산 및 냉동기 선정 도구")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// 계산 과정 로그(debug)를 출력한다
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 옵션으로 입력을 받아 부하를 계산하고 장비를 선정한다.
    Size {
        #[command(flatten)]
        input: InputArgs,
        /// 결과를 JSON으로 출력한다
        #[arg(long)]
        json: bool,
        /// 텍스트 보고서를 파일로 저장한다
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// 값을 하나씩 입력받아 계산한다.
    Interactive {
        /// 텍스트 보고서를 파일로 저장한다
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// 제품/단열/장비 카탈로그를 출력한다.
    Catalog {
        /// 편집 가능한 TOML 참조 데이터 형식으로 출력한다
        #[arg(long)]
        toml: bool,
    },
}

/// 설정 기본값을 덮어쓰는 입력 옵션.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// 길이 [m]
    #[arg(long)]
    pub length: Option<f64>,
    /// 폭 [m]
    #[arg(long)]
    pub width: Option<f64>,
    /// 높이 [m]
    #[arg(long)]
    pub height: Option<f64>,
    /// 단열 두께 [mm]
    #[arg(long)]
    pub insulation: Option<u32>,
    /// 외기온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub ambient: Option<f64>,
    /// 실내온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub internal: Option<f64>,
    /// 증발온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub evaporating: Option<f64>,
    /// 응축온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub condensing: Option<f64>,
    /// 제품 종류 (meat, fish, dairy, vegetables, fruits, frozen)
    #[arg(long)]
    pub product: Option<ProductKind>,
    /// 일일 입고량 [kg/day]
    #[arg(long)]
    pub throughput: Option<f64>,
    /// 입고 온도 [°C]
    #[arg(long, allow_negative_numbers = true)]
    pub incoming: Option<f64>,
    /// 일일 운전시간 [h]
    #[arg(long)]
    pub run_hours: Option<u32>,
    /// 냉매 (R404A, R449A)
    #[arg(long)]
    pub refrigerant: Option<RefrigerantKind>,
}

impl InputArgs {
    /// 지정된 항목만 기본 입력에 덮어쓴다.
    pub fn apply(&self, base: SizingInput) -> SizingInput {
        let mut input = base;
        let c = &mut input.chamber;
        c.length_m = self.length.unwrap_or(c.length_m);
        c.width_m = self.width.unwrap_or(c.width_m);
        c.height_m = self.height.unwrap_or(c.height_m);
        c.insulation_thickness_mm = self.insulation.unwrap_or(c.insulation_thickness_mm);

        let t = &mut input.thermal;
        t.ambient_temp_c = self.ambient.unwrap_or(t.ambient_temp_c);
        t.internal_temp_c = self.internal.unwrap_or(t.internal_temp_c);
        t.evaporating_temp_c = self.evaporating.unwrap_or(t.evaporating_temp_c);
        t.condensing_temp_c = self.condensing.unwrap_or(t.condensing_temp_c);

        let p = &mut input.product;
        p.kind = self.product.unwrap_or(p.kind);
        p.daily_throughput_kg = self.throughput.unwrap_or(p.daily_throughput_kg);
        p.incoming_temp_c = self.incoming.unwrap_or(p.incoming_temp_c);

        let o = &mut input.operating;
        o.daily_run_hours = self.run_hours.unwrap_or(o.daily_run_hours);
        o.refrigerant = self.refrigerant.unwrap_or(o.refrigerant);
        input
    }
}

/// 설정과 참조 데이터를 로드한 뒤 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    let engine = SizingEngine::new(cfg.load_reference_data(&cli.config)?);

    match cli.command {
        Command::Size {
            input,
            json,
            report,
        } => {
            let input = input.apply(cfg.defaults);
            size_and_print(&engine, &input, json, report)
        }
        Command::Interactive { report } => {
            let input = ui_cli::prompt_input(&cfg.defaults, engine.reference_data())?;
            size_and_print(&engine, &input, false, report)
        }
        Command::Catalog { toml } => {
            if toml {
                print!("{}", engine.reference_data().to_toml_string()?);
            } else {
                print!("{}", ui_cli::render_catalog(engine.reference_data()));
            }
            Ok(())
        }
    }
}

fn size_and_print(
    engine: &SizingEngine,
    input: &SizingInput,
    json: bool,
    report_path: Option<PathBuf>,
) -> Result<(), AppError> {
    input.validate()?;
    let report = engine.size(input)?;
    let text = ui_cli::render_report(&report, engine.reference_data());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{text}");
    }
    if let Some(path) = report_path {
        fs::write(&path, &text)?;
        tracing::info!(path = %path.display(), "saved report");
    }
    Ok(())
}
