use serde::{Deserialize, Serialize};
use std::fmt;

use super::input::SizingInput;
use super::load::LoadResult;

/// 대용량 경고 기준 체적 [m³]
pub const LARGE_VOLUME_M3: f64 = 100.0;
/// 적재 밀도 경고 기준 [kg/day per m³]
pub const MAX_LOADING_DENSITY_KG_PER_M3: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

/// 입력/결과 일관성 검토 메시지. 계산을 막지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// 실내온도가 외기온도 이상
    InternalNotBelowAmbient { internal_temp_c: f64, ambient_temp_c: f64 },
    /// 제품 입고온도가 실내온도보다 낮음
    ProductColderThanChamber { incoming_temp_c: f64, internal_temp_c: f64 },
    /// 증발온도가 실내온도 이상
    EvaporatorNotBelowChamber { evaporating_temp_c: f64, internal_temp_c: f64 },
    LargeVolume { volume_m3: f64 },
    ExcessiveLoadingDensity { kg_per_m3: f64 },
}

impl Advisory {
    pub fn severity(&self) -> Severity {
        match self {
            Advisory::LargeVolume { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::InternalNotBelowAmbient {
                internal_temp_c,
                ambient_temp_c,
            } => write!(
                f,
                "실내온도 {internal_temp_c} °C가 외기온도 {ambient_temp_c} °C보다 낮지 않습니다."
            ),
            Advisory::ProductColderThanChamber {
                incoming_temp_c,
                internal_temp_c,
            } => write!(
                f,
                "제품 입고온도 {incoming_temp_c} °C가 실내온도 {internal_temp_c} °C보다 낮습니다. 입력을 확인하세요."
            ),
            Advisory::EvaporatorNotBelowChamber {
                evaporating_temp_c,
                internal_temp_c,
            } => write!(
                f,
                "증발온도 {evaporating_temp_c} °C가 실내온도 {internal_temp_c} °C 이상입니다. 실내보다 5~8 °C 낮게 설정하세요."
            ),
            Advisory::LargeVolume { volume_m3 } => write!(
                f,
                "체적 {volume_m3:.1} m³: 대용량 냉장실은 여러 대의 냉동기가 필요할 수 있습니다."
            ),
            Advisory::ExcessiveLoadingDensity { kg_per_m3 } => write!(
                f,
                "제품 적재 밀도 {kg_per_m3:.0} kg/m³가 너무 높습니다."
            ),
        }
    }
}

/// 입력과 계산 결과의 일관성을 검토한다. 모든 항목을 정해진 순서로 매번 검사한다.
pub fn compute_warnings(input: &SizingInput, load: &LoadResult) -> Vec<Advisory> {
    let t = &input.thermal;
    let p = &input.product;
    let mut advisories = Vec::new();

    if t.internal_temp_c >= t.ambient_temp_c {
        advisories.push(Advisory::InternalNotBelowAmbient {
            internal_temp_c: t.internal_temp_c,
            ambient_temp_c: t.ambient_temp_c,
        });
    }
    if p.incoming_temp_c < t.internal_temp_c {
        advisories.push(Advisory::ProductColderThanChamber {
            incoming_temp_c: p.incoming_temp_c,
            internal_temp_c: t.internal_temp_c,
        });
    }
    if t.evaporating_temp_c >= t.internal_temp_c {
        advisories.push(Advisory::EvaporatorNotBelowChamber {
            evaporating_temp_c: t.evaporating_temp_c,
            internal_temp_c: t.internal_temp_c,
        });
    }
    if load.volume_m3 > LARGE_VOLUME_M3 {
        advisories.push(Advisory::LargeVolume {
            volume_m3: load.volume_m3,
        });
    }
    let density = p.daily_throughput_kg / load.volume_m3;
    if density > MAX_LOADING_DENSITY_KG_PER_M3 {
        advisories.push(Advisory::ExcessiveLoadingDensity { kg_per_m3: density });
    }
    advisories
}
