//! 용도 프로필, 도시 기후 프리셋, 출처 목록 등 읽기 전용 참조 데이터.
//!
//! 값은 참고용이며 설계 시 최신 규격으로 검증해야 한다. 프로세스 시작 시 한 번
//! 로드한 뒤 계산 함수에 참조로 전달한다.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::defaults::{self, or_default};

const BUILTIN_REFERENCE: &str = include_str!("../data/reference.toml");

/// 용도별 면적당 원단위 벤치마크.
///
/// 모든 필드는 생략 가능하며 생략 시 [`crate::defaults`]의 값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UseProfile {
    pub lighting_w_m2: f64,
    pub sockets_w_m2: f64,
    pub other_w_m2: f64,
    pub heating_w_m2: f64,
    pub cooling_w_m2: f64,
    /// 냉방 EER. 0이면 기본값으로 대체
    pub hvac_eer_cooling: f64,
    /// 송풍기/보조기기 [W/m²]. 0이면 기본값으로 대체
    pub hvac_fans_w_m2: f64,
    /// 승강기 1대당 담당 면적 [m²]. 0이면 기본값으로 대체
    pub lift_area_m2_per_lift: f64,
    pub lift_power_kw_per_lift: f64,
    pub lift_diversity: f64,
    /// 재실 밀도 [m²/인]. 0이면 기본값(10)으로 대체
    pub occupancy_m2_per_person: f64,
    pub tech_rooms_ratio: f64,
    pub shafts_ratio: f64,
}

impl Default for UseProfile {
    fn default() -> Self {
        Self {
            lighting_w_m2: defaults::LIGHTING_W_M2,
            sockets_w_m2: defaults::SOCKETS_W_M2,
            other_w_m2: defaults::OTHER_W_M2,
            heating_w_m2: defaults::HEATING_W_M2,
            cooling_w_m2: defaults::COOLING_W_M2,
            hvac_eer_cooling: defaults::HVAC_EER_COOLING,
            hvac_fans_w_m2: defaults::HVAC_FANS_W_M2,
            lift_area_m2_per_lift: defaults::LIFT_AREA_M2_PER_LIFT,
            lift_power_kw_per_lift: defaults::LIFT_POWER_KW_PER_LIFT,
            lift_diversity: defaults::LIFT_DIVERSITY,
            occupancy_m2_per_person: defaults::OCCUPANCY_M2_PER_PERSON,
            tech_rooms_ratio: defaults::TECH_ROOMS_RATIO,
            shafts_ratio: defaults::SHAFTS_RATIO,
        }
    }
}

impl UseProfile {
    /// 0 이하이거나 비어 있으면 기본 재실 밀도를 쓴다.
    pub fn occupancy_density(&self) -> f64 {
        let d = or_default(self.occupancy_m2_per_person, defaults::OCCUPANCY_M2_PER_PERSON);
        if d <= 0.0 {
            defaults::OCCUPANCY_M2_PER_PERSON
        } else {
            d
        }
    }

    pub fn eer(&self) -> f64 {
        or_default(self.hvac_eer_cooling, defaults::HVAC_EER_COOLING)
    }

    pub fn fans_w_m2(&self) -> f64 {
        or_default(self.hvac_fans_w_m2, defaults::HVAC_FANS_W_M2)
    }

    pub fn area_per_lift(&self) -> f64 {
        or_default(self.lift_area_m2_per_lift, defaults::LIFT_AREA_M2_PER_LIFT)
    }

    pub fn tech_ratio(&self) -> f64 {
        or_default(self.tech_rooms_ratio, defaults::TECH_ROOMS_RATIO)
    }

    pub fn shaft_ratio(&self) -> f64 {
        or_default(self.shafts_ratio, defaults::SHAFTS_RATIO)
    }

    /// 원단위는 0 이상, 비율은 [0,1] 범위인지 확인한다.
    pub fn validate(&self, name: &str) -> Result<(), ReferenceDataError> {
        let intensities = [
            ("lighting_w_m2", self.lighting_w_m2),
            ("sockets_w_m2", self.sockets_w_m2),
            ("other_w_m2", self.other_w_m2),
            ("heating_w_m2", self.heating_w_m2),
            ("cooling_w_m2", self.cooling_w_m2),
            ("hvac_eer_cooling", self.hvac_eer_cooling),
            ("hvac_fans_w_m2", self.hvac_fans_w_m2),
            ("lift_area_m2_per_lift", self.lift_area_m2_per_lift),
            ("lift_power_kw_per_lift", self.lift_power_kw_per_lift),
            ("occupancy_m2_per_person", self.occupancy_m2_per_person),
        ];
        for (field, v) in intensities {
            if !v.is_finite() || v < 0.0 {
                return Err(ReferenceDataError::invalid(name, field, "0 이상의 유한한 값이어야 합니다."));
            }
        }
        let ratios = [
            ("lift_diversity", self.lift_diversity),
            ("tech_rooms_ratio", self.tech_rooms_ratio),
            ("shafts_ratio", self.shafts_ratio),
        ];
        for (field, v) in ratios {
            if !(0.0..=1.0).contains(&v) {
                return Err(ReferenceDataError::invalid(name, field, "0~1 범위여야 합니다."));
            }
        }
        Ok(())
    }
}

/// 도시별 설계 외기온도와 강우강도.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityPreset {
    /// 동계 설계 외기온도 [°C]
    pub design_temp_c: f64,
    /// 하계 설계 외기온도 [°C]
    pub design_summer_c: f64,
    /// 강우강도 [L/(s·ha)]
    pub rain_r_l_s_ha: f64,
}

impl Default for CityPreset {
    fn default() -> Self {
        Self {
            design_temp_c: defaults::DESIGN_WINTER_C,
            design_summer_c: defaults::DESIGN_SUMMER_C,
            rain_r_l_s_ha: defaults::RAIN_L_S_HA,
        }
    }
}

impl CityPreset {
    pub fn validate(&self, name: &str) -> Result<(), ReferenceDataError> {
        if !self.design_temp_c.is_finite() {
            return Err(ReferenceDataError::invalid(name, "design_temp_c", "유한한 값이어야 합니다."));
        }
        if !self.design_summer_c.is_finite() {
            return Err(ReferenceDataError::invalid(name, "design_summer_c", "유한한 값이어야 합니다."));
        }
        if !self.rain_r_l_s_ha.is_finite() || self.rain_r_l_s_ha < 0.0 {
            return Err(ReferenceDataError::invalid(name, "rain_r_l_s_ha", "0 이상이어야 합니다."));
        }
        Ok(())
    }
}

/// 보고서에 인용하는 출처.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub id: String,
    pub title: String,
    /// "Standard/Law" | "Guideline/Recommendation" | "Context"
    pub kind: String,
    pub url: String,
}

/// 참조 데이터 로드/검증 오류.
#[derive(Debug)]
pub enum ReferenceDataError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
    /// 값 검증 실패
    Invalid {
        entry: String,
        field: &'static str,
        reason: &'static str,
    },
}

impl ReferenceDataError {
    fn invalid(entry: &str, field: &'static str, reason: &'static str) -> Self {
        ReferenceDataError::Invalid {
            entry: entry.to_string(),
            field,
            reason,
        }
    }
}

impl std::fmt::Display for ReferenceDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceDataError::Io(e) => write!(f, "참조 데이터 입출력 오류: {e}"),
            ReferenceDataError::Parse(e) => write!(f, "참조 데이터 파싱 오류: {e}"),
            ReferenceDataError::Invalid {
                entry,
                field,
                reason,
            } => write!(f, "잘못된 참조 데이터 {entry}.{field}: {reason}"),
        }
    }
}

impl std::error::Error for ReferenceDataError {}

impl From<std::io::Error> for ReferenceDataError {
    fn from(value: std::io::Error) -> Self {
        ReferenceDataError::Io(value)
    }
}

impl From<toml::de::Error> for ReferenceDataError {
    fn from(value: toml::de::Error) -> Self {
        ReferenceDataError::Parse(value)
    }
}

/// 참조 데이터 전체 묶음.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub use_profiles: BTreeMap<String, UseProfile>,
    pub city_presets: BTreeMap<String, CityPreset>,
    pub sources: Vec<SourceRef>,
}

impl ReferenceData {
    /// 바이너리에 내장된 기본 데이터를 로드한다.
    pub fn builtin() -> Result<Self, ReferenceDataError> {
        Self::from_toml_str(BUILTIN_REFERENCE)
    }

    /// TOML 파일에서 로드한다.
    pub fn load(path: &Path) -> Result<Self, ReferenceDataError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ReferenceDataError> {
        let data: ReferenceData = toml::from_str(content)?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<(), ReferenceDataError> {
        for (name, profile) in &self.use_profiles {
            profile.validate(name)?;
        }
        for (name, city) in &self.city_presets {
            city.validate(name)?;
        }
        Ok(())
    }

    pub fn use_profile(&self, use_type: &str) -> Option<&UseProfile> {
        self.use_profiles.get(use_type)
    }

    /// 용도 프로필을 찾고, 없으면 기본 프로필을 돌려준다.
    pub fn use_profile_or_default(&self, use_type: &str) -> UseProfile {
        match self.use_profiles.get(use_type) {
            Some(p) => p.clone(),
            None => {
                warn!("알 수 없는 용도 '{use_type}', 기본 원단위를 사용합니다.");
                UseProfile::default()
            }
        }
    }

    /// 도시 프리셋을 찾는다. 없으면 "Custom", 그것도 없으면 기본값을 쓴다.
    pub fn city(&self, name: &str) -> CityPreset {
        if let Some(c) = self.city_presets.get(name) {
            return c.clone();
        }
        warn!("알 수 없는 도시 '{name}', {} 프리셋을 사용합니다.", defaults::CUSTOM_CITY);
        self.city_presets
            .get(defaults::CUSTOM_CITY)
            .cloned()
            .unwrap_or_default()
    }

    pub fn source(&self, id: &str) -> Option<&SourceRef> {
        self.sources.iter().find(|s| s.id == id)
    }
}
