use crate::physics::clamp;

/// 하계 실내 설정온도 [°C]
pub const INDOOR_SUMMER_C: f64 = 26.0;
/// 동계 실내 설정온도 [°C]
pub const INDOOR_WINTER_C: f64 = 20.0;
/// 냉방 원단위가 기준으로 삼는 하계 외기온도 [°C]
pub const REFERENCE_SUMMER_C: f64 = 32.0;
/// 난방 원단위가 기준으로 삼는 동계 외기온도 [°C]
pub const REFERENCE_WINTER_C: f64 = -10.0;

pub const MIN_CLIMATE_FACTOR: f64 = 0.7;
pub const MAX_CLIMATE_FACTOR: f64 = 1.4;

/// 하계 설계온도에 따른 냉방부하 보정계수. 결과는 [0.7, 1.4]로 제한된다.
pub fn cooling_climate_factor(summer_temp_c: f64) -> f64 {
    cooling_climate_factor_with_reference(summer_temp_c, REFERENCE_SUMMER_C)
}

/// 기준 하계온도를 지정한 냉방 보정계수.
///
/// factor = (T_summer − 26) / (T_ref − 26). 기준온도가 실내온도 이하이면 1.0.
pub fn cooling_climate_factor_with_reference(summer_temp_c: f64, reference_summer_c: f64) -> f64 {
    let denom = reference_summer_c - INDOOR_SUMMER_C;
    if denom <= 0.0 {
        return 1.0;
    }
    let factor = (summer_temp_c - INDOOR_SUMMER_C) / denom;
    clamp(factor, MIN_CLIMATE_FACTOR, MAX_CLIMATE_FACTOR)
}

/// 동계 설계온도에 따른 난방부하 보정계수. 결과는 [0.7, 1.4]로 제한된다.
pub fn heating_climate_factor(design_temp_c: f64) -> f64 {
    heating_climate_factor_with_reference(design_temp_c, REFERENCE_WINTER_C)
}

/// 기준 동계온도를 지정한 난방 보정계수.
///
/// factor = (20 − T_design) / (20 − T_ref). 기준온도가 실내온도 이상이면 1.0.
pub fn heating_climate_factor_with_reference(design_temp_c: f64, reference_temp_c: f64) -> f64 {
    let denom = INDOOR_WINTER_C - reference_temp_c;
    if denom <= 0.0 {
        return 1.0;
    }
    let factor = (INDOOR_WINTER_C - design_temp_c) / denom;
    clamp(factor, MIN_CLIMATE_FACTOR, MAX_CLIMATE_FACTOR)
}
