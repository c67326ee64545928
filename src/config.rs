use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::electrical::{Diversities, FeederInput};
use crate::hvac::VentilationCategory;
use crate::project::SummaryOptions;
use crate::reference_data::{ReferenceData, ReferenceDataError};

/// 간선/부하 관련 기본 가정값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectricalSettings {
    pub line_voltage_v: f64,
    pub power_factor: f64,
    pub efficiency: f64,
    pub feeder_length_m: f64,
    pub max_vdrop_pct: f64,
    pub diversity_lighting: f64,
    pub diversity_sockets: f64,
    pub diversity_other: f64,
    pub diversity_hvac: f64,
    pub diversity_lifts: f64,
}

impl Default for ElectricalSettings {
    fn default() -> Self {
        Self {
            line_voltage_v: defaults::LINE_VOLTAGE_V,
            power_factor: defaults::POWER_FACTOR,
            efficiency: defaults::EFFICIENCY,
            feeder_length_m: defaults::FEEDER_LENGTH_M,
            max_vdrop_pct: defaults::MAX_VOLTAGE_DROP_PCT,
            diversity_lighting: defaults::DIVERSITY_LIGHTING,
            diversity_sockets: defaults::DIVERSITY_SOCKETS,
            diversity_other: defaults::DIVERSITY_OTHER,
            diversity_hvac: defaults::DIVERSITY_HVAC,
            diversity_lifts: defaults::DIVERSITY_LIFTS,
        }
    }
}

impl ElectricalSettings {
    pub fn diversities(&self) -> Diversities {
        Diversities {
            lighting: self.diversity_lighting,
            sockets: self.diversity_sockets,
            hvac: self.diversity_hvac,
            lifts: self.diversity_lifts,
            other: self.diversity_other,
        }
    }

    /// 수용전력 0, 전동기 없음으로 간선 입력을 만든다.
    pub fn feeder_input(&self) -> FeederInput {
        FeederInput {
            demand_kw: 0.0,
            line_voltage_v: self.line_voltage_v,
            power_factor: self.power_factor,
            efficiency: self.efficiency,
            length_m: self.feeder_length_m,
            max_vdrop_pct: self.max_vdrop_pct,
            motor: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HvacSettings {
    pub diversity: f64,
    pub category: VentilationCategory,
}

impl Default for HvacSettings {
    fn default() -> Self {
        Self {
            diversity: defaults::HVAC_DIVERSITY,
            category: VentilationCategory::CatII,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlumbingSettings {
    pub simultaneity: f64,
    pub max_velocity_m_s: f64,
}

impl Default for PlumbingSettings {
    fn default() -> Self {
        Self {
            simultaneity: defaults::PLUMBING_SIMULTANEITY,
            max_velocity_m_s: defaults::PIPE_VELOCITY_M_S,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrainageSettings {
    pub runoff_coefficient: f64,
    pub pipe_velocity_m_s: f64,
}

impl Default for DrainageSettings {
    fn default() -> Self {
        Self {
            runoff_coefficient: defaults::RUNOFF_COEFFICIENT,
            pipe_velocity_m_s: defaults::PIPE_VELOCITY_M_S,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 참조 데이터 TOML 경로. 없으면 내장 데이터를 쓴다
    pub reference_data: Option<PathBuf>,
    pub electrical: ElectricalSettings,
    pub hvac: HvacSettings,
    pub plumbing: PlumbingSettings,
    pub drainage: DrainageSettings,
}

impl Config {
    /// 설정 파일 또는 내장 데이터에서 참조 데이터를 로드한다.
    pub fn load_reference_data(&self) -> Result<ReferenceData, ReferenceDataError> {
        match &self.reference_data {
            Some(path) => ReferenceData::load(path),
            None => ReferenceData::builtin(),
        }
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            feeder: self.electrical.feeder_input(),
            diversities: self.electrical.diversities(),
            hvac_diversity: self.hvac.diversity,
            plumbing_simultaneity: self.plumbing.simultaneity,
            runoff_coeff: self.drainage.runoff_coefficient,
            pipe_velocity_m_s: self.drainage.pipe_velocity_m_s,
        }
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}
