use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::reference::ProductKind;

/// 냉장실 치수와 단열 두께.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChamberSpec {
    /// 길이 [m]
    pub length_m: f64,
    /// 폭 [m]
    pub width_m: f64,
    /// 높이 [m]
    pub height_m: f64,
    /// 단열 패널 두께 [mm]. 단열 테이블에 있는 값이어야 한다.
    pub insulation_thickness_mm: u32,
}

impl ChamberSpec {
    /// 내부 체적 [m³]
    pub fn volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }

    /// 벽·천장·바닥 전체 표면적 [m²]
    pub fn surface_area_m2(&self) -> f64 {
        let (l, w, h) = (self.length_m, self.width_m, self.height_m);
        2.0 * (l * w + l * h + w * h)
    }
}

/// 운전 온도 조건. 모두 °C.
///
/// 실내 < 외기, 증발온도는 실내보다 5~8°C 낮게, 응축온도 35~50°C가 권장 조건이지만
/// 여기서는 강제하지 않고 경고로만 알린다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalSpec {
    pub ambient_temp_c: f64,
    pub internal_temp_c: f64,
    pub evaporating_temp_c: f64,
    pub condensing_temp_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub kind: ProductKind,
    /// 일일 입고량 [kg/day]
    pub daily_throughput_kg: f64,
    /// 입고 온도 [°C]
    pub incoming_temp_c: f64,
}

/// 냉매 종류. 표시용이며 계산식에는 영향을 주지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefrigerantKind {
    R404A,
    R449A,
}

impl fmt::Display for RefrigerantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefrigerantKind::R404A => f.write_str("R404A"),
            RefrigerantKind::R449A => f.write_str("R449A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("알 수 없는 냉매: {0} (R404A, R449A 중 선택)")]
pub struct ParseRefrigerantError(pub String);

impl FromStr for RefrigerantKind {
    type Err = ParseRefrigerantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R404A" => Ok(RefrigerantKind::R404A),
            "R449A" => Ok(RefrigerantKind::R449A),
            other => Err(ParseRefrigerantError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingSpec {
    /// 압축기 일일 운전시간 [h/day]
    pub daily_run_hours: u32,
    pub refrigerant: RefrigerantKind,
}

/// 일일 운전시간 허용 범위 [h].
pub const RUN_HOURS_RANGE: std::ops::RangeInclusive<u32> = 12..=24;

/// 한 번의 계산 요청에 필요한 전체 입력. 값으로 전달되는 불변 구조체다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    pub chamber: ChamberSpec,
    pub thermal: ThermalSpec,
    pub product: ProductSpec,
    pub operating: OperatingSpec,
}

impl Default for SizingInput {
    /// 표준 예제 조건: 3×2×2.5 m, 100 mm 패널, 육류 500 kg/day.
    fn default() -> Self {
        Self {
            chamber: ChamberSpec {
                length_m: 3.0,
                width_m: 2.0,
                height_m: 2.5,
                insulation_thickness_mm: 100,
            },
            thermal: ThermalSpec {
                ambient_temp_c: 35.0,
                internal_temp_c: 0.0,
                evaporating_temp_c: -8.0,
                condensing_temp_c: 45.0,
            },
            product: ProductSpec {
                kind: ProductKind::Meat,
                daily_throughput_kg: 500.0,
                incoming_temp_c: 25.0,
            },
            operating: OperatingSpec {
                daily_run_hours: 18,
                refrigerant: RefrigerantKind::R404A,
            },
        }
    }
}

/// 입력 범위 오류. 계산 엔진이 아니라 입력을 모으는 쪽에서 검사한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} 값은 0보다 커야 합니다: {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} 값은 0 이상이어야 합니다: {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} 값이 유한한 숫자가 아닙니다")]
    NotFinite { field: &'static str },
    #[error("일일 운전시간은 12~24 h 범위여야 합니다: {0}")]
    RunHoursOutOfRange(u32),
}

fn finite(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field })
    }
}

impl SizingInput {
    /// 입력값 범위를 확인한다. 테이블 조회 가능 여부는 계산 시점에 판단한다.
    pub fn validate(&self) -> Result<(), InputError> {
        let c = &self.chamber;
        for (field, value) in [
            ("length_m", c.length_m),
            ("width_m", c.width_m),
            ("height_m", c.height_m),
        ] {
            if finite(field, value)? <= 0.0 {
                return Err(InputError::NotPositive { field, value });
            }
        }

        let t = &self.thermal;
        finite("ambient_temp_c", t.ambient_temp_c)?;
        finite("internal_temp_c", t.internal_temp_c)?;
        finite("evaporating_temp_c", t.evaporating_temp_c)?;
        finite("condensing_temp_c", t.condensing_temp_c)?;
        finite("incoming_temp_c", self.product.incoming_temp_c)?;

        let throughput = finite("daily_throughput_kg", self.product.daily_throughput_kg)?;
        if throughput < 0.0 {
            return Err(InputError::Negative {
                field: "daily_throughput_kg",
                value: throughput,
            });
        }

        let hours = self.operating.daily_run_hours;
        if !RUN_HOURS_RANGE.contains(&hours) {
            return Err(InputError::RunHoursOutOfRange(hours));
        }
        Ok(())
    }
}
