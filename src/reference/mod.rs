//! 부하 계산과 장비 선정에 쓰는 참조 데이터.
//! 제품 열물성, 단열 등급별 U값, 압축기/증발기 카탈로그를 묶어 한 번 로드한 뒤 읽기 전용으로 공유한다.
//! 카탈로그 오름차순 조건은 로드 시점에 검사하고 조회 시점에는 다시 검사하지 않는다.

pub mod equipment;
pub mod insulation;
pub mod products;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use equipment::{CompressorModel, EvaporatorModel, BUILTIN_COMPRESSOR_MANUFACTURER};
pub use insulation::InsulationGrade;
pub use products::{ParseProductKindError, ProductEntry, ProductKind, ProductProperties};

/// 참조 테이블 조회 실패. 해당 계산 요청 전체를 중단시킨다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// 단열 테이블에 없는 두께
    #[error("지원하지 않는 단열 두께: {thickness_mm} mm (지원 두께: {available:?})")]
    UnknownInsulation {
        thickness_mm: u32,
        available: Vec<u32>,
    },
    /// 제품 물성 테이블에 없는 제품
    #[error("제품 물성 테이블에 없는 제품: {kind}")]
    UnknownProduct { kind: ProductKind },
}

/// 참조 데이터 로드/검증 오류.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("{catalog} 카탈로그가 비어 있습니다")]
    EmptyCatalog { catalog: &'static str },
    #[error("{table} 테이블이 비어 있습니다")]
    EmptyTable { table: &'static str },
    /// 카탈로그가 용량 오름차순이 아님
    #[error("{catalog} 카탈로그 순서 오류: {model}의 {column} 용량이 앞 모델 {previous}보다 작습니다")]
    CatalogOrder {
        catalog: &'static str,
        column: &'static str,
        model: String,
        previous: String,
    },
    #[error("{what} 값은 0보다 큰 유한값이어야 합니다: {value}")]
    NonPositive { what: String, value: f64 },
    #[error("{catalog} 카탈로그에 이름 없는 모델이 있습니다")]
    EmptyModelName { catalog: &'static str },
    #[error("{table} 테이블에 중복 항목: {key}")]
    DuplicateEntry { table: &'static str, key: String },
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("참조 데이터 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("참조 데이터 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// TOML 참조 데이터 파일 구조.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compressor_manufacturer: Option<String>,
    pub products: Vec<ProductEntry>,
    pub insulation: Vec<InsulationGrade>,
    pub compressors: Vec<CompressorModel>,
    pub evaporators: Vec<EvaporatorModel>,
}

/// 검증을 통과한 불변 참조 데이터 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    compressor_manufacturer: Option<String>,
    products: BTreeMap<ProductKind, ProductProperties>,
    insulation: BTreeMap<u32, f64>,
    compressors: Vec<CompressorModel>,
    evaporators: Vec<EvaporatorModel>,
}

impl ReferenceData {
    /// 테이블을 검증한 뒤 참조 데이터를 구성한다.
    pub fn new(
        products: Vec<ProductEntry>,
        insulation: Vec<InsulationGrade>,
        compressors: Vec<CompressorModel>,
        evaporators: Vec<EvaporatorModel>,
    ) -> Result<Self, ReferenceError> {
        let products = build_products(products)?;
        let insulation = build_insulation(insulation)?;
        validate_compressors(&compressors)?;
        validate_evaporators(&evaporators)?;
        tracing::debug!(
            products = products.len(),
            insulation_grades = insulation.len(),
            compressors = compressors.len(),
            evaporators = evaporators.len(),
            "reference data validated"
        );
        Ok(Self {
            compressor_manufacturer: None,
            products,
            insulation,
            compressors,
            evaporators,
        })
    }

    /// 내장 기본 테이블.
    pub fn builtin() -> Self {
        Self {
            compressor_manufacturer: Some(BUILTIN_COMPRESSOR_MANUFACTURER.to_string()),
            products: products::builtin_products()
                .into_iter()
                .map(|e| (e.kind, e.properties))
                .collect(),
            insulation: insulation::builtin_insulation()
                .into_iter()
                .map(|g| (g.thickness_mm, g.u_value_w_m2k))
                .collect(),
            compressors: equipment::builtin_compressors(),
            evaporators: equipment::builtin_evaporators(),
        }
    }

    /// 제조사 표기를 지정한다.
    pub fn with_compressor_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.compressor_manufacturer = Some(manufacturer.into());
        self
    }

    pub fn from_document(doc: ReferenceDocument) -> Result<Self, ReferenceError> {
        let data = Self::new(doc.products, doc.insulation, doc.compressors, doc.evaporators)?;
        Ok(match doc.compressor_manufacturer {
            Some(m) => data.with_compressor_manufacturer(m),
            None => data,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ReferenceError> {
        let doc: ReferenceDocument = toml::from_str(content)?;
        Self::from_document(doc)
    }

    /// TOML 참조 데이터 파일을 로드한다.
    pub fn from_path(path: &Path) -> Result<Self, ReferenceError> {
        let content = fs::read_to_string(path)?;
        let data = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded reference data");
        Ok(data)
    }

    pub fn to_document(&self) -> ReferenceDocument {
        ReferenceDocument {
            compressor_manufacturer: self.compressor_manufacturer.clone(),
            products: self
                .products
                .iter()
                .map(|(kind, props)| ProductEntry {
                    kind: *kind,
                    properties: props.clone(),
                })
                .collect(),
            insulation: self
                .insulation
                .iter()
                .map(|(&t, &u)| InsulationGrade::new(t, u))
                .collect(),
            compressors: self.compressors.clone(),
            evaporators: self.evaporators.clone(),
        }
    }

    /// 편집용 TOML 문자열로 내보낸다.
    pub fn to_toml_string(&self) -> Result<String, ReferenceError> {
        Ok(toml::to_string_pretty(&self.to_document())?)
    }

    pub fn product(&self, kind: ProductKind) -> Result<&ProductProperties, LookupError> {
        self.products
            .get(&kind)
            .ok_or(LookupError::UnknownProduct { kind })
    }

    /// 두께에 해당하는 U값 [W/m²K]. 보간하지 않는다.
    pub fn u_value(&self, thickness_mm: u32) -> Result<f64, LookupError> {
        self.insulation
            .get(&thickness_mm)
            .copied()
            .ok_or_else(|| LookupError::UnknownInsulation {
                thickness_mm,
                available: self.insulation_grades(),
            })
    }

    /// 지원 두께 목록(오름차순).
    pub fn insulation_grades(&self) -> Vec<u32> {
        self.insulation.keys().copied().collect()
    }

    pub fn products(&self) -> impl Iterator<Item = (ProductKind, &ProductProperties)> {
        self.products.iter().map(|(k, p)| (*k, p))
    }

    pub fn compressors(&self) -> &[CompressorModel] {
        &self.compressors
    }

    pub fn evaporators(&self) -> &[EvaporatorModel] {
        &self.evaporators
    }

    pub fn compressor_manufacturer(&self) -> Option<&str> {
        self.compressor_manufacturer.as_deref()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_positive(what: impl FnOnce() -> String, value: f64) -> Result<(), ReferenceError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ReferenceError::NonPositive {
            what: what(),
            value,
        })
    }
}

fn build_products(
    entries: Vec<ProductEntry>,
) -> Result<BTreeMap<ProductKind, ProductProperties>, ReferenceError> {
    if entries.is_empty() {
        return Err(ReferenceError::EmptyTable { table: "products" });
    }
    let mut map = BTreeMap::new();
    for entry in entries {
        let cp = entry.properties.specific_heat_kj_per_kgk;
        check_positive(|| format!("{} 비열", entry.kind), cp)?;
        if map.insert(entry.kind, entry.properties).is_some() {
            return Err(ReferenceError::DuplicateEntry {
                table: "products",
                key: entry.kind.to_string(),
            });
        }
    }
    Ok(map)
}

fn build_insulation(grades: Vec<InsulationGrade>) -> Result<BTreeMap<u32, f64>, ReferenceError> {
    if grades.is_empty() {
        return Err(ReferenceError::EmptyTable { table: "insulation" });
    }
    let mut map = BTreeMap::new();
    for g in grades {
        check_positive(|| format!("{} mm U값", g.thickness_mm), g.u_value_w_m2k)?;
        if map.insert(g.thickness_mm, g.u_value_w_m2k).is_some() {
            return Err(ReferenceError::DuplicateEntry {
                table: "insulation",
                key: format!("{} mm", g.thickness_mm),
            });
        }
    }
    Ok(map)
}

fn check_model_names<'a>(
    catalog: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ReferenceError> {
    let mut seen = std::collections::BTreeSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(ReferenceError::EmptyModelName { catalog });
        }
        if !seen.insert(name) {
            return Err(ReferenceError::DuplicateEntry {
                table: catalog,
                key: name.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_compressors(catalog: &[CompressorModel]) -> Result<(), ReferenceError> {
    if catalog.is_empty() {
        return Err(ReferenceError::EmptyCatalog {
            catalog: "compressor",
        });
    }
    check_model_names("compressor", catalog.iter().map(|c| c.model.as_str()))?;
    for c in catalog {
        check_positive(|| format!("{} 저온 용량", c.model), c.low_temp_capacity_kw)?;
        check_positive(|| format!("{} 중온 용량", c.model), c.mid_temp_capacity_kw)?;
        check_positive(|| format!("{} 소비전력", c.model), c.input_power_kw)?;
    }
    for win in catalog.windows(2) {
        let (prev, next) = (&win[0], &win[1]);
        let column = if next.low_temp_capacity_kw < prev.low_temp_capacity_kw {
            Some("저온")
        } else if next.mid_temp_capacity_kw < prev.mid_temp_capacity_kw {
            Some("중온")
        } else {
            None
        };
        if let Some(column) = column {
            return Err(ReferenceError::CatalogOrder {
                catalog: "compressor",
                column,
                model: next.model.clone(),
                previous: prev.model.clone(),
            });
        }
    }
    Ok(())
}

fn validate_evaporators(catalog: &[EvaporatorModel]) -> Result<(), ReferenceError> {
    if catalog.is_empty() {
        return Err(ReferenceError::EmptyCatalog {
            catalog: "evaporator",
        });
    }
    check_model_names("evaporator", catalog.iter().map(|e| e.model.as_str()))?;
    for e in catalog {
        check_positive(|| format!("{} 냉각능력", e.model), e.capacity_kw)?;
    }
    for win in catalog.windows(2) {
        if win[1].capacity_kw < win[0].capacity_kw {
            return Err(ReferenceError::CatalogOrder {
                catalog: "evaporator",
                column: "냉각",
                model: win[1].model.clone(),
                previous: win[0].model.clone(),
            });
        }
    }
    Ok(())
}
