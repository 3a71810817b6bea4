use serde::{Deserialize, Serialize};

use super::load::CapacityBand;
use crate::reference::{CompressorModel, EvaporatorModel, ReferenceData};

/// 장비 선정 결과.
///
/// 조건을 만족하는 모델이 없으면 해당 필드가 `None`이다. 오류가 아니라 "카탈로그 범위 초과"라는
/// 정상적인 결과로 취급한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub compressor: Option<CompressorModel>,
    /// 선정 압축기의 해당 용량 열 값 [kW]
    pub compressor_capacity_kw: Option<f64>,
    pub evaporator: Option<EvaporatorModel>,
    /// 냉동능력 / 소비전력 (EER 성격의 참고값)
    pub efficiency_ratio: Option<f64>,
    /// 선정된 장비 가격 합계. 선정되지 않은 장비는 0으로 본다.
    pub combined_price: u32,
}

impl SelectionResult {
    /// 압축기와 증발기가 모두 선정되었는지 여부.
    pub fn is_complete(&self) -> bool {
        self.compressor.is_some() && self.evaporator.is_some()
    }
}

/// 오름차순 카탈로그에서 `capacity(entry) >= required`를 만족하는 첫 항목.
fn first_fit<T>(catalog: &[T], required_kw: f64, capacity: impl Fn(&T) -> f64) -> Option<&T> {
    catalog.iter().find(|&entry| capacity(entry) >= required_kw)
}

/// 필요 냉동능력에 맞는 압축기와 증발기를 카탈로그에서 고른다.
pub fn select_equipment(
    required_capacity_kw: f64,
    band: CapacityBand,
    data: &ReferenceData,
) -> SelectionResult {
    let compressor = first_fit(data.compressors(), required_capacity_kw, |c| {
        band.compressor_capacity_kw(c)
    });
    let evaporator = first_fit(data.evaporators(), required_capacity_kw, |e| e.capacity_kw);

    match compressor {
        Some(c) => tracing::debug!(model = %c.model, ?band, "selected compressor"),
        None => tracing::warn!(
            required_kw = required_capacity_kw,
            ?band,
            "required capacity exceeds compressor catalog range"
        ),
    }
    match evaporator {
        Some(e) => tracing::debug!(model = %e.model, "selected evaporator"),
        None => tracing::warn!(
            required_kw = required_capacity_kw,
            "required capacity exceeds evaporator catalog range"
        ),
    }

    let compressor_capacity_kw = compressor.map(|c| band.compressor_capacity_kw(c));
    let efficiency_ratio = compressor
        .zip(compressor_capacity_kw)
        .map(|(c, cap)| cap / c.input_power_kw);
    let combined_price =
        compressor.map_or(0, |c| c.price) + evaporator.map_or(0, |e| e.price);

    SelectionResult {
        compressor: compressor.cloned(),
        compressor_capacity_kw,
        evaporator: evaporator.cloned(),
        efficiency_ratio,
        combined_price,
    }
}
