use serde::{Deserialize, Serialize};

/// 기본 압축기 카탈로그의 제조사 표기.
pub const BUILTIN_COMPRESSOR_MANUFACTURER: &str = "BITZER";

/// 압축기 모델 한 행.
///
/// 카탈로그는 용량 오름차순이어야 한다. 선정은 조건을 만족하는 첫 모델을 고른다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressorModel {
    pub model: String,
    /// 저온(증발온도 -15°C 미만) 냉동능력 [kW]
    pub low_temp_capacity_kw: f64,
    /// 중온 냉동능력 [kW]
    pub mid_temp_capacity_kw: f64,
    /// 소비전력 [kW]
    pub input_power_kw: f64,
    /// 가격 (통화 단위는 표시 측 책임)
    pub price: u32,
}

/// 증발기(유닛쿨러) 모델 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaporatorModel {
    pub model: String,
    /// 냉각능력 [kW]
    pub capacity_kw: f64,
    pub price: u32,
}

// (모델, 저온 kW, 중온 kW, 소비전력 kW, 가격)
const BUILTIN_COMPRESSORS: &[(&str, f64, f64, f64, u32)] = &[
    ("2KES-05Y", 0.5, 0.9, 0.4, 450),
    ("2JES-07Y", 0.8, 1.5, 0.6, 520),
    ("2HES-2Y", 1.5, 2.8, 1.2, 680),
    ("4FES-3Y", 2.2, 4.5, 2.0, 950),
    ("4EES-4Y", 3.5, 6.8, 3.0, 1200),
    ("4DES-5Y", 4.8, 9.5, 4.5, 1450),
    ("4CES-6Y", 6.5, 12.0, 6.0, 1700),
    ("4TES-9Y", 8.5, 16.0, 8.0, 2100),
    ("4PES-12Y", 10.5, 20.0, 10.5, 2400),
];

// (모델, kW, 가격)
const BUILTIN_EVAPORATORS: &[(&str, f64, u32)] = &[
    ("ECO-3", 1.5, 280),
    ("ECO-5", 3.0, 380),
    ("ECO-8", 5.0, 480),
    ("ECO-12", 8.0, 650),
    ("ECO-18", 12.0, 850),
    ("ECO-25", 18.0, 1100),
];

/// 기본 압축기 카탈로그 (용량 오름차순).
pub fn builtin_compressors() -> Vec<CompressorModel> {
    BUILTIN_COMPRESSORS
        .iter()
        .map(|&(model, low, mid, power, price)| CompressorModel {
            model: model.to_string(),
            low_temp_capacity_kw: low,
            mid_temp_capacity_kw: mid,
            input_power_kw: power,
            price,
        })
        .collect()
}

/// 기본 증발기 카탈로그 (용량 오름차순).
pub fn builtin_evaporators() -> Vec<EvaporatorModel> {
    BUILTIN_EVAPORATORS
        .iter()
        .map(|&(model, capacity, price)| EvaporatorModel {
            model: model.to_string(),
            capacity_kw: capacity,
            price,
        })
        .collect()
}
