use serde::{Deserialize, Serialize};

use super::advisory::{compute_warnings, Advisory};
use super::input::SizingInput;
use super::load::{compute_load, LoadResult};
use super::selection::{select_equipment, SelectionResult};
use crate::reference::{LookupError, ReferenceData};

/// 한 번의 계산 요청에 대한 전체 결과. 보고서 출력 측이 그대로 소비한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingReport {
    pub input: SizingInput,
    pub load: LoadResult,
    pub selection: SelectionResult,
    pub advisories: Vec<Advisory>,
}

/// 참조 데이터를 주입받아 부하 계산 → 장비 선정 → 검토를 수행한다.
///
/// 내부 상태를 바꾸지 않으므로 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone, Default)]
pub struct SizingEngine {
    data: ReferenceData,
}

impl SizingEngine {
    pub fn new(data: ReferenceData) -> Self {
        Self { data }
    }

    pub fn builtin() -> Self {
        Self::new(ReferenceData::builtin())
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn compute_load(&self, input: &SizingInput) -> Result<LoadResult, LookupError> {
        compute_load(input, &self.data)
    }

    pub fn select_equipment(&self, load: &LoadResult) -> SelectionResult {
        select_equipment(load.required_capacity_kw, load.capacity_band, &self.data)
    }

    /// 전체 계산. 조회 오류가 나면 부분 결과 없이 즉시 반환한다.
    pub fn size(&self, input: &SizingInput) -> Result<SizingReport, LookupError> {
        let load = self.compute_load(input)?;
        let selection = self.select_equipment(&load);
        let advisories = compute_warnings(input, &load);
        Ok(SizingReport {
            input: *input,
            load,
            selection,
            advisories,
        })
    }
}
