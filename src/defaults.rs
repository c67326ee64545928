//! 모든 추정 모듈이 공유하는 기본값 테이블.
//!
//! 원단위/비율이 비어 있거나 0일 때 대체하는 값은 여기에서만 정의한다.

/// 재실 밀도 기본값 [m²/인]
pub const OCCUPANCY_M2_PER_PERSON: f64 = 10.0;
/// 기계실 면적 비율 기본값 (연면적 대비)
pub const TECH_ROOMS_RATIO: f64 = 0.015;
/// 샤프트 면적 비율 기본값 (연면적 대비)
pub const SHAFTS_RATIO: f64 = 0.008;

pub const LIGHTING_W_M2: f64 = 8.0;
pub const SOCKETS_W_M2: f64 = 15.0;
pub const OTHER_W_M2: f64 = 5.0;
pub const HEATING_W_M2: f64 = 50.0;
pub const COOLING_W_M2: f64 = 70.0;

/// 냉방 EER 기본값
pub const HVAC_EER_COOLING: f64 = 3.0;
/// 송풍기/보조기기 원단위 [W/m²]
pub const HVAC_FANS_W_M2: f64 = 5.0;

/// 승강기 1대당 담당 면적 [m²]
pub const LIFT_AREA_M2_PER_LIFT: f64 = 5000.0;
/// 승강기 1대당 전력 [kW]
pub const LIFT_POWER_KW_PER_LIFT: f64 = 15.0;
pub const LIFT_DIVERSITY: f64 = 0.6;

/// 동계 설계 외기온도 [°C]
pub const DESIGN_WINTER_C: f64 = -10.0;
/// 하계 설계 외기온도 [°C]
pub const DESIGN_SUMMER_C: f64 = 32.0;
/// 강우강도 [L/(s·ha)]
pub const RAIN_L_S_HA: f64 = 300.0;
/// 도시 프리셋이 없을 때 사용하는 항목 이름
pub const CUSTOM_CITY: &str = "Custom";

/// 위생기구 유량표에 없는 기구의 유량 [L/s]
pub const FIXTURE_FLOW_LPS: f64 = 0.1;
pub const PLUMBING_SIMULTANEITY: f64 = 0.35;
/// 배관 내 최대 유속 기준 [m/s]
pub const PIPE_VELOCITY_M_S: f64 = 2.0;
pub const RUNOFF_COEFFICIENT: f64 = 0.9;
pub const WASTEWATER_K: f64 = 0.5;

/// 급탕 온도차 [K]
pub const DHW_DELTA_T_K: f64 = 35.0;
pub const DHW_EFFICIENCY: f64 = 0.9;

pub const HVAC_DIVERSITY: f64 = 0.8;

pub const LINE_VOLTAGE_V: f64 = 400.0;
pub const POWER_FACTOR: f64 = 0.9;
pub const EFFICIENCY: f64 = 0.95;
pub const FEEDER_LENGTH_M: f64 = 50.0;
pub const MAX_VOLTAGE_DROP_PCT: f64 = 3.0;

pub const DIVERSITY_LIGHTING: f64 = 0.9;
pub const DIVERSITY_SOCKETS: f64 = 0.8;
pub const DIVERSITY_OTHER: f64 = 0.8;
pub const DIVERSITY_HVAC: f64 = 0.9;
pub const DIVERSITY_LIFTS: f64 = 0.6;

/// 0이거나 유한하지 않은 값을 기본값으로 대체한다.
pub fn or_default(value: f64, default: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        default
    }
}
