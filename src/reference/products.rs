use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 저장 제품 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Meat,
    Fish,
    Dairy,
    Vegetables,
    Fruits,
    Frozen,
}

impl ProductKind {
    pub const ALL: [ProductKind; 6] = [
        ProductKind::Meat,
        ProductKind::Fish,
        ProductKind::Dairy,
        ProductKind::Vegetables,
        ProductKind::Fruits,
        ProductKind::Frozen,
    ];

    /// 설정 파일/CLI에서 쓰는 키 문자열.
    pub fn key(self) -> &'static str {
        match self {
            ProductKind::Meat => "meat",
            ProductKind::Fish => "fish",
            ProductKind::Dairy => "dairy",
            ProductKind::Vegetables => "vegetables",
            ProductKind::Fruits => "fruits",
            ProductKind::Frozen => "frozen",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 알 수 없는 제품 키.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("알 수 없는 제품 종류: {0} (meat, fish, dairy, vegetables, fruits, frozen 중 선택)")]
pub struct ParseProductKindError(pub String);

impl FromStr for ProductKind {
    type Err = ParseProductKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ProductKind::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseProductKindError(key.to_string()))
    }
}

/// 제품 열물성.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProperties {
    /// 표시용 이름
    pub name: String,
    /// 비열 cp [kJ/kgK]
    pub specific_heat_kj_per_kgk: f64,
    /// 동결점 [°C]. 표시용 메타데이터이며 부하 계산에는 쓰지 않는다.
    pub freezing_point_c: f64,
}

/// TOML 참조 데이터의 `[[products]]` 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub kind: ProductKind,
    #[serde(flatten)]
    pub properties: ProductProperties,
}

// (종류, 이름, cp, 동결점)
const BUILTIN_PRODUCTS: &[(ProductKind, &str, f64, f64)] = &[
    (ProductKind::Meat, "Meat", 3.14, -2.0),
    (ProductKind::Fish, "Fish", 3.78, -2.0),
    (ProductKind::Dairy, "Dairy", 3.85, -1.0),
    (ProductKind::Vegetables, "Vegetables", 3.98, -1.0),
    (ProductKind::Fruits, "Fruits", 3.60, -2.0),
    (ProductKind::Frozen, "Frozen goods", 2.05, -18.0),
];

/// 기본 제품 물성 테이블.
pub fn builtin_products() -> Vec<ProductEntry> {
    BUILTIN_PRODUCTS
        .iter()
        .map(|&(kind, name, cp, freezing)| ProductEntry {
            kind,
            properties: ProductProperties {
                name: name.to_string(),
                specific_heat_kj_per_kgk: cp,
                freezing_point_c: freezing,
            },
        })
        .collect()
}
