use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::reference::{ProductKind, ReferenceData};
use crate::refrigeration::{
    CapacityBand, RefrigerantKind, Severity, SizingInput, SizingReport,
};

fn band_label(band: CapacityBand) -> &'static str {
    match band {
        CapacityBand::LowTemp => "저온",
        CapacityBand::MidTemp => "중온",
    }
}

/// 계산 결과를 텍스트 보고서로 만든다.
pub fn render_report(report: &SizingReport, data: &ReferenceData) -> String {
    let mut out = String::new();
    // String에 대한 write!는 실패하지 않는다.
    let _ = write_report(&mut out, report, data);
    out
}

fn write_report(
    out: &mut String,
    report: &SizingReport,
    data: &ReferenceData,
) -> std::fmt::Result {
    let SizingReport {
        input,
        load,
        selection,
        advisories,
    } = report;
    let (c, t, p, o) = (&input.chamber, &input.thermal, &input.product, &input.operating);

    writeln!(out, "=== 냉장실 냉동부하 계산 보고서 ===")?;

    if !advisories.is_empty() {
        writeln!(out, "\n[검토 사항]")?;
        for a in advisories {
            let tag = match a.severity() {
                Severity::Warning => "경고",
                Severity::Info => "참고",
            };
            writeln!(out, " [{tag}] {a}")?;
        }
    }

    let product_name = data
        .product(p.kind)
        .map(|props| props.name.as_str())
        .unwrap_or_else(|_| p.kind.key());
    writeln!(out, "\n[입력 조건]")?;
    writeln!(
        out,
        " 치수: {:.2} × {:.2} × {:.2} m (단열 {} mm, U={:.3} W/m²K)",
        c.length_m, c.width_m, c.height_m, c.insulation_thickness_mm, load.u_value_w_m2k
    )?;
    writeln!(
        out,
        " 온도: 외기 {:.1} °C / 실내 {:.1} °C / 증발 {:.1} °C / 응축 {:.1} °C",
        t.ambient_temp_c, t.internal_temp_c, t.evaporating_temp_c, t.condensing_temp_c
    )?;
    writeln!(
        out,
        " 제품: {product_name} {:.1} kg/day, 입고 {:.1} °C",
        p.daily_throughput_kg, p.incoming_temp_c
    )?;
    writeln!(out, " 운전: {} h/day, {}", o.daily_run_hours, o.refrigerant)?;

    writeln!(out, "\n[부하 계산]")?;
    writeln!(
        out,
        " 체적: {:.1} m³, 표면적: {:.2} m², ΔT: {:.1} K",
        load.volume_m3, load.surface_area_m2, load.delta_t_k
    )?;
    writeln!(out, " Q1 전도 부하: {:.2} kW", load.transmission_load_kw)?;
    writeln!(out, " Q2 제품 부하: {:.2} kW", load.product_load_kw)?;
    writeln!(
        out,
        " Q3 부가 부하: {:.2} kW (조명 {:.2} + 작업자 {:.2} + 문 개폐 {:.2})",
        load.auxiliary_load_kw,
        load.lighting_load_kw,
        load.people_load_kw,
        load.door_opening_load_kw
    )?;
    writeln!(
        out,
        " 안전율: {:.2} (+{:.0}%)",
        load.applied_safety_factor,
        load.safety_margin_percent()
    )?;
    writeln!(out, " 연속 부하: {:.2} kW", load.total_continuous_load_kw)?;
    writeln!(
        out,
        " 필요 냉동능력: {:.2} kW ({} 기준)",
        load.required_capacity_kw,
        band_label(load.capacity_band)
    )?;

    writeln!(out, "\n[추천 장비]")?;
    match (&selection.compressor, selection.compressor_capacity_kw) {
        (Some(comp), Some(cap)) => {
            let maker = data
                .compressor_manufacturer()
                .map(|m| format!("{m} "))
                .unwrap_or_default();
            write!(out, " 압축기: {maker}{}, {cap:.2} kW", comp.model)?;
            if let Some(eer) = selection.efficiency_ratio {
                write!(out, ", EER {eer:.1}")?;
            }
            writeln!(out, ", 가격 {}", comp.price)?;
        }
        _ => writeln!(out, " 압축기: 적합한 모델 없음")?,
    }
    match &selection.evaporator {
        Some(evap) => writeln!(
            out,
            " 증발기: {}, {:.2} kW, 가격 {}",
            evap.model, evap.capacity_kw, evap.price
        )?,
        None => writeln!(out, " 증발기: 적합한 모델 없음")?,
    }
    if selection.compressor.is_some() || selection.evaporator.is_some() {
        writeln!(out, " 합계: {}", selection.combined_price)?;
        writeln!(
            out,
            " * 가격에는 응축기, 배관, 제어반, 설치비가 포함되지 않습니다."
        )?;
    }
    if !selection.is_complete() {
        writeln!(
            out,
            " 필요 냉동능력 {:.2} kW가 카탈로그 범위를 초과합니다. 입력 조건을 줄여 보세요.",
            load.required_capacity_kw
        )?;
    }
    Ok(())
}

/// 참조 데이터 목록을 텍스트로 만든다.
pub fn render_catalog(data: &ReferenceData) -> String {
    let mut out = String::new();
    let _ = write_catalog(&mut out, data);
    out
}

fn write_catalog(out: &mut String, data: &ReferenceData) -> std::fmt::Result {
    writeln!(out, "-- 제품 --")?;
    for (kind, p) in data.products() {
        writeln!(
            out,
            " {:<11} {:<14} cp={:.2} kJ/kgK, 동결점 {:.0} °C",
            kind.key(),
            p.name,
            p.specific_heat_kj_per_kgk,
            p.freezing_point_c
        )?;
    }
    writeln!(out, "-- 단열 --")?;
    for thickness in data.insulation_grades() {
        if let Ok(u) = data.u_value(thickness) {
            writeln!(out, " {thickness:>4} mm  U={u:.3} W/m²K")?;
        }
    }
    let maker = data.compressor_manufacturer().unwrap_or("-");
    writeln!(out, "-- 압축기 ({maker}) --")?;
    for c in data.compressors() {
        writeln!(
            out,
            " {:<10} 저온 {:>5.1} kW  중온 {:>5.1} kW  전력 {:>5.1} kW  가격 {}",
            c.model, c.low_temp_capacity_kw, c.mid_temp_capacity_kw, c.input_power_kw, c.price
        )?;
    }
    writeln!(out, "-- 증발기 --")?;
    for e in data.evaporators() {
        writeln!(out, " {:<10} {:>5.1} kW  가격 {}", e.model, e.capacity_kw, e.price)?;
    }
    Ok(())
}

/// 표준 입출력으로 계산 입력을 받는다. 빈 입력은 기본값을 사용한다.
pub fn prompt_input(defaults: &SizingInput, data: &ReferenceData) -> Result<SizingInput, AppError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    prompt_input_from(&mut reader, &mut writer, defaults, data)
}

/// [`prompt_input`]의 입출력 주입 버전.
pub fn prompt_input_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    defaults: &SizingInput,
    data: &ReferenceData,
) -> Result<SizingInput, AppError> {
    let mut input = *defaults;
    let mut p = Prompter { reader, writer };

    writeln!(p.writer, "\n-- 냉장실 치수 --")?;
    input.chamber.length_m = p.read_f64("길이 [m]", input.chamber.length_m)?;
    input.chamber.width_m = p.read_f64("폭 [m]", input.chamber.width_m)?;
    input.chamber.height_m = p.read_f64("높이 [m]", input.chamber.height_m)?;
    writeln!(p.writer, "단열 두께 선택지: {:?} mm", data.insulation_grades())?;
    input.chamber.insulation_thickness_mm =
        p.read_parsed("단열 두께 [mm]", input.chamber.insulation_thickness_mm)?;

    writeln!(p.writer, "\n-- 온도 --")?;
    input.thermal.ambient_temp_c = p.read_f64("외기 [°C]", input.thermal.ambient_temp_c)?;
    input.thermal.internal_temp_c = p.read_f64("실내 [°C]", input.thermal.internal_temp_c)?;
    input.thermal.evaporating_temp_c =
        p.read_f64("증발 [°C]", input.thermal.evaporating_temp_c)?;
    input.thermal.condensing_temp_c = p.read_f64("응축 [°C]", input.thermal.condensing_temp_c)?;

    writeln!(p.writer, "\n-- 제품 --")?;
    let kinds: Vec<&str> = ProductKind::ALL.iter().map(|k| k.key()).collect();
    writeln!(p.writer, "제품 종류: {}", kinds.join(", "))?;
    input.product.kind = p.read_parsed("제품", input.product.kind)?;
    input.product.daily_throughput_kg =
        p.read_f64("일일 입고량 [kg/day]", input.product.daily_throughput_kg)?;
    input.product.incoming_temp_c = p.read_f64("입고 온도 [°C]", input.product.incoming_temp_c)?;

    writeln!(p.writer, "\n-- 운전 --")?;
    input.operating.daily_run_hours =
        p.read_parsed("일일 운전시간 [h] (12~24)", input.operating.daily_run_hours)?;
    input.operating.refrigerant =
        p.read_parsed::<RefrigerantKind>("냉매 (R404A/R449A)", input.operating.refrigerant)?;
    Ok(input)
}

struct Prompter<'a, R, W> {
    reader: &'a mut R,
    writer: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    fn read_f64(&mut self, label: &str, default: f64) -> Result<f64, AppError> {
        self.read_parsed(label, default)
    }

    /// 파싱에 실패하면 다시 묻는다. 빈 입력이나 입력 종료 시 기본값을 쓴다.
    fn read_parsed<T>(&mut self, label: &str, default: T) -> Result<T, AppError>
    where
        T: std::str::FromStr + std::fmt::Display,
    {
        let prompt = format!("{label} [{default}]");
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(default);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(default);
            }
            match trimmed.parse::<T>() {
                Ok(v) => return Ok(v),
                Err(_) => writeln!(self.writer, "잘못된 입력입니다. 다시 입력하세요.")?,
            }
        }
    }
}
