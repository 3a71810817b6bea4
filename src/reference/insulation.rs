use serde::{Deserialize, Serialize};

/// 단열 패널 등급: 두께별 열관류율.
///
/// 값은 보간하지 않는 고정 상수이며, 테이블에 없는 두께는 호출 측 오류로 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsulationGrade {
    /// 패널 두께 [mm]
    pub thickness_mm: u32,
    /// 열관류율 U [W/m²K]
    pub u_value_w_m2k: f64,
}

impl InsulationGrade {
    pub const fn new(thickness_mm: u32, u_value_w_m2k: f64) -> Self {
        Self {
            thickness_mm,
            u_value_w_m2k,
        }
    }
}

const BUILTIN_GRADES: &[InsulationGrade] = &[
    InsulationGrade::new(60, 0.367),
    InsulationGrade::new(80, 0.275),
    InsulationGrade::new(100, 0.220),
    InsulationGrade::new(120, 0.183),
    InsulationGrade::new(150, 0.147),
    InsulationGrade::new(200, 0.110),
];

/// 기본 단열 등급 테이블.
pub fn builtin_insulation() -> Vec<InsulationGrade> {
    BUILTIN_GRADES.to_vec()
}
