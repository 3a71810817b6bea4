use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::reference::{ReferenceData, ReferenceError};
use crate::refrigeration::SizingInput;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// 참조 데이터(제품/단열/카탈로그) TOML 파일. 없으면 내장 테이블을 쓴다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_data: Option<PathBuf>,
    /// CLI에서 값을 지정하지 않은 항목의 기본 입력값
    #[serde(default)]
    pub defaults: SizingInput,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("참조 데이터 오류: {0}")]
    Reference(#[from] ReferenceError),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정에 지정된 참조 데이터를 로드한다. 상대 경로는 설정 파일 위치 기준이다.
    pub fn load_reference_data(&self, config_path: &Path) -> Result<ReferenceData, ConfigError> {
        match &self.reference_data {
            Some(p) => {
                let resolved = if p.is_relative() {
                    config_path
                        .parent()
                        .map(|dir| dir.join(p))
                        .unwrap_or_else(|| p.clone())
                } else {
                    p.clone()
                };
                Ok(ReferenceData::from_path(&resolved)?)
            }
            None => Ok(ReferenceData::builtin()),
        }
    }
}
