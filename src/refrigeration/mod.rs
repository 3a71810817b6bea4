//! 냉장실 열부하 계산과 냉동 장비 선정.
//! 전도·제품·부가 부하 → 안전율 → 운전시간 보정 → 카탈로그 선정 순으로 진행하며,
//! 모든 함수는 순수 함수라 상태를 공유하지 않는다.

pub mod advisory;
pub mod engine;
pub mod input;
pub mod load;
pub mod selection;

pub use advisory::{compute_warnings, Advisory, Severity};
pub use engine::{SizingEngine, SizingReport};
pub use input::{
    ChamberSpec, InputError, OperatingSpec, ProductSpec, RefrigerantKind, SizingInput,
    ThermalSpec,
};
pub use load::{compute_load, safety_factor, CapacityBand, LoadResult};
pub use selection::{select_equipment, SelectionResult};
