use serde::{Deserialize, Serialize};

use super::input::SizingInput;
use crate::reference::{CompressorModel, LookupError, ReferenceData};

/// 조명 부하 밀도 [W/m³]
pub const LIGHTING_W_PER_M3: f64 = 5.0;
/// 작업자 부하 [kW]
pub const PEOPLE_LOAD_KW: f64 = 0.3;
/// 문 개폐 부하: 전도 부하 대비 비율
pub const DOOR_OPENING_FRACTION: f64 = 0.10;
/// 기본 안전율
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.15;
/// 실내온도 기준 안전율 구간 (임계온도 °C, 안전율). 실내온도가 임계값 미만이면 적용되며,
/// 해당하는 구간 중 임계값이 가장 낮은 구간이 우선한다.
pub const SAFETY_FACTOR_TIERS: &[(f64, f64)] = &[(-15.0, 1.25), (-25.0, 1.30)];
/// 증발온도가 이 값 미만이면 저온 용량 열로 선정한다 [°C]
pub const LOW_TEMP_EVAPORATING_THRESHOLD_C: f64 = -15.0;

/// 압축기 카탈로그에서 비교할 용량 열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityBand {
    LowTemp,
    MidTemp,
}

impl CapacityBand {
    pub fn for_evaporating_temp(evaporating_temp_c: f64) -> Self {
        if evaporating_temp_c < LOW_TEMP_EVAPORATING_THRESHOLD_C {
            CapacityBand::LowTemp
        } else {
            CapacityBand::MidTemp
        }
    }

    /// 해당 열의 압축기 냉동능력 [kW]
    pub fn compressor_capacity_kw(self, model: &CompressorModel) -> f64 {
        match self {
            CapacityBand::LowTemp => model.low_temp_capacity_kw,
            CapacityBand::MidTemp => model.mid_temp_capacity_kw,
        }
    }
}

/// 항목별 열부하와 필요 냉동능력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    pub volume_m3: f64,
    pub surface_area_m2: f64,
    /// 적용한 U값 [W/m²K]
    pub u_value_w_m2k: f64,
    /// 외기-실내 온도차 [K]
    pub delta_t_k: f64,
    /// 벽체 전도 부하 [kW]
    pub transmission_load_kw: f64,
    /// 제품 냉각 부하 [kW]
    pub product_load_kw: f64,
    pub lighting_load_kw: f64,
    pub people_load_kw: f64,
    pub door_opening_load_kw: f64,
    /// 조명 + 작업자 + 문 개폐 [kW]
    pub auxiliary_load_kw: f64,
    pub applied_safety_factor: f64,
    /// 안전율 적용 후 24시간 연속 기준 부하 [kW]
    pub total_continuous_load_kw: f64,
    /// 운전시간 보정 후 필요 냉동능력 [kW]
    pub required_capacity_kw: f64,
    pub capacity_band: CapacityBand,
}

impl LoadResult {
    /// 안전율 여유분 [%]. 1.15 → 15
    pub fn safety_margin_percent(&self) -> f64 {
        (self.applied_safety_factor - 1.0) * 100.0
    }
}

/// 실내온도에 따른 안전율.
pub fn safety_factor(internal_temp_c: f64) -> f64 {
    SAFETY_FACTOR_TIERS
        .iter()
        .filter(|(threshold, _)| internal_temp_c < *threshold)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map_or(DEFAULT_SAFETY_FACTOR, |&(_, factor)| factor)
}

/// 냉장실 열부하를 계산한다.
///
/// 치수가 0 이하인 경우 등 입력 범위 검사는 호출 측 책임이며([`SizingInput::validate`]),
/// 여기서는 참조 테이블 조회 실패만 오류로 반환한다.
pub fn compute_load(input: &SizingInput, data: &ReferenceData) -> Result<LoadResult, LookupError> {
    let chamber = &input.chamber;
    let thermal = &input.thermal;
    let product = &input.product;

    let volume = chamber.volume_m3();
    let area = chamber.surface_area_m2();
    let u_value = data.u_value(chamber.insulation_thickness_mm)?;
    let delta_t = thermal.ambient_temp_c - thermal.internal_temp_c;

    // W → kW
    let q_transmission = u_value * area * delta_t / 1000.0;

    // 일일 입고량의 냉각 열량(kJ)을 연속 부하로 환산. 기존 산식과 호환되도록 그대로 유지한다.
    let cp = data.product(product.kind)?.specific_heat_kj_per_kgk;
    let q_product = product.daily_throughput_kg * cp
        * (product.incoming_temp_c - thermal.internal_temp_c)
        / (3600.0 * 1000.0);

    let q_lighting = LIGHTING_W_PER_M3 * volume / 1000.0;
    let q_people = PEOPLE_LOAD_KW;
    let q_door = q_transmission * DOOR_OPENING_FRACTION;
    let q_auxiliary = q_lighting + q_people + q_door;

    let sf = safety_factor(thermal.internal_temp_c);
    let total_continuous = (q_transmission + q_product + q_auxiliary) * sf;
    let required = total_continuous * 24.0 / f64::from(input.operating.daily_run_hours);
    let band = CapacityBand::for_evaporating_temp(thermal.evaporating_temp_c);

    tracing::debug!(
        volume_m3 = volume,
        transmission_kw = q_transmission,
        product_kw = q_product,
        auxiliary_kw = q_auxiliary,
        safety_factor = sf,
        required_kw = required,
        band = ?band,
        "computed refrigeration load"
    );

    Ok(LoadResult {
        volume_m3: volume,
        surface_area_m2: area,
        u_value_w_m2k: u_value,
        delta_t_k: delta_t,
        transmission_load_kw: q_transmission,
        product_load_kw: q_product,
        lighting_load_kw: q_lighting,
        people_load_kw: q_people,
        door_opening_load_kw: q_door,
        auxiliary_load_kw: q_auxiliary,
        applied_safety_factor: sf,
        total_continuous_load_kw: total_continuous,
        required_capacity_kw: required,
        capacity_band: band,
    })
}
