use serde::Serialize;

use crate::advisory::Advisory;
use crate::defaults;
use crate::hvac::climate::{
    cooling_climate_factor, heating_climate_factor, INDOOR_SUMMER_C, INDOOR_WINTER_C,
};
use crate::hvac::ventilation::{
    ventilation_flow, ventilation_sensible_load_kw, VentilationCategory,
};
use crate::physics::{clamp, non_negative};
use crate::reference_data::{CityPreset, UseProfile};
use crate::table::Table;

/// 냉난방 용량 산정에 쓰는 수용률 하한/상한
pub const MIN_HVAC_DIVERSITY: f64 = 0.3;
pub const MAX_HVAC_DIVERSITY: f64 = 1.0;

/// 면적 원단위만으로 구한 냉난방 용량.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HvacPredim {
    pub q_heat_kw: f64,
    pub q_cool_kw: f64,
    /// 제한 후 적용된 수용률
    pub diversity: f64,
}

/// 면적 × 원단위 × 수용률로 냉난방 용량을 개략 산정한다. 수용률은 [0.3, 1.0]으로 제한한다.
pub fn hvac_predim(area_m2: f64, heat_w_m2: f64, cool_w_m2: f64, diversity: f64) -> HvacPredim {
    let diversity = clamp(diversity, MIN_HVAC_DIVERSITY, MAX_HVAC_DIVERSITY);
    let area = non_negative(area_m2);
    HvacPredim {
        q_heat_kw: area * non_negative(heat_w_m2) / 1000.0 * diversity,
        q_cool_kw: area * non_negative(cool_w_m2) / 1000.0 * diversity,
        diversity,
    }
}

/// 기후/외기 보정을 포함한 냉난방 용량 입력값.
#[derive(Debug, Clone, PartialEq)]
pub struct HvacCapacityInput {
    pub area_m2: f64,
    pub heating_w_m2: f64,
    pub cooling_w_m2: f64,
    pub diversity: f64,
    /// 동계 설계 외기온도 [°C]
    pub design_winter_c: f64,
    /// 하계 설계 외기온도 [°C]
    pub design_summer_c: f64,
    pub persons: u32,
    pub category: VentilationCategory,
}

impl Default for HvacCapacityInput {
    fn default() -> Self {
        Self {
            area_m2: 0.0,
            heating_w_m2: defaults::HEATING_W_M2,
            cooling_w_m2: defaults::COOLING_W_M2,
            diversity: defaults::HVAC_DIVERSITY,
            design_winter_c: defaults::DESIGN_WINTER_C,
            design_summer_c: defaults::DESIGN_SUMMER_C,
            persons: 0,
            category: VentilationCategory::CatII,
        }
    }
}

impl HvacCapacityInput {
    /// 용도 프로필과 도시 프리셋으로 입력을 구성한다.
    pub fn from_profile(
        area_m2: f64,
        profile: &UseProfile,
        city: &CityPreset,
        persons: u32,
        category: VentilationCategory,
    ) -> Self {
        Self {
            area_m2,
            heating_w_m2: profile.heating_w_m2,
            cooling_w_m2: profile.cooling_w_m2,
            diversity: defaults::HVAC_DIVERSITY,
            design_winter_c: city.design_temp_c,
            design_summer_c: city.design_summer_c,
            persons,
            category,
        }
    }
}

/// 냉난방 용량 추정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HvacCapacityEstimate {
    /// 외기부하 포함 난방 용량 [kW]
    pub heating_kw: f64,
    /// 외기부하 포함 냉방 용량 [kW]
    pub cooling_kw: f64,
    pub heat_w_m2: f64,
    pub cool_w_m2: f64,
    pub diversity: f64,
    pub design_winter_c: f64,
    pub design_summer_c: f64,
    pub heating_factor: f64,
    pub cooling_factor: f64,
    pub category: VentilationCategory,
    pub vent_m3h: f64,
    /// 외기 난방 추가분 [kW], 0 이상
    pub vent_heat_kw: f64,
    /// 외기 냉방 추가분 [kW], 0 이상
    pub vent_cool_kw: f64,
}

impl HvacCapacityEstimate {
    pub fn table(&self) -> Table {
        let mut t = Table::new(&["Item", "Value"]);
        t.push_row(vec!["Heating capacity (kW)".into(), self.heating_kw.into()]);
        t.push_row(vec!["Cooling capacity (kW)".into(), self.cooling_kw.into()]);
        t.push_row(vec!["Heating specific load (W/m²)".into(), self.heat_w_m2.into()]);
        t.push_row(vec!["Cooling specific load (W/m²)".into(), self.cool_w_m2.into()]);
        t.push_row(vec!["Diversity".into(), self.diversity.into()]);
        t.push_row(vec!["Heating climate factor".into(), self.heating_factor.into()]);
        t.push_row(vec!["Cooling climate factor".into(), self.cooling_factor.into()]);
        t.push_row(vec!["Ventilation flow (m³/h)".into(), self.vent_m3h.into()]);
        t.push_row(vec!["Vent heating add-on (kW)".into(), self.vent_heat_kw.into()]);
        t.push_row(vec!["Vent cooling add-on (kW)".into(), self.vent_cool_kw.into()]);
        t.push_row(vec!["Winter design temp (°C)".into(), self.design_winter_c.into()]);
        t.push_row(vec!["Summer design temp (°C)".into(), self.design_summer_c.into()]);
        t
    }
}

/// 면적 원단위, 기후 보정, 외기 현열부하로 냉난방 용량을 추정한다.
///
/// DIN EN 12831 / VDI 2078 상세 부하계산을 대신하지 않는다. 외기부하는 각 모드에
/// 해당하는 방향(난방=열손실, 냉방=열취득)만 더한다.
pub fn estimate_hvac_capacities(input: &HvacCapacityInput) -> HvacCapacityEstimate {
    let heat_w_m2 = non_negative(input.heating_w_m2);
    let cool_w_m2 = non_negative(input.cooling_w_m2);
    let diversity = clamp(input.diversity, MIN_HVAC_DIVERSITY, MAX_HVAC_DIVERSITY);
    let area = non_negative(input.area_m2);

    let heating_factor = heating_climate_factor(input.design_winter_c);
    let cooling_factor = cooling_climate_factor(input.design_summer_c);

    let vent = ventilation_flow(area, input.persons, input.category);
    let q_m3h = vent.q_outdoor_m3h;

    // 난방: 외기가 실내보다 차가우면 음수이므로 부호를 뒤집어 열손실 크기로 본다
    let vent_heat_kw =
        non_negative(-ventilation_sensible_load_kw(q_m3h, INDOOR_WINTER_C, input.design_winter_c));
    let vent_cool_kw =
        non_negative(ventilation_sensible_load_kw(q_m3h, INDOOR_SUMMER_C, input.design_summer_c));

    let base_heat_kw = area * heat_w_m2 / 1000.0 * diversity * heating_factor;
    let base_cool_kw = area * cool_w_m2 / 1000.0 * diversity * cooling_factor;

    HvacCapacityEstimate {
        heating_kw: base_heat_kw + vent_heat_kw,
        cooling_kw: base_cool_kw + vent_cool_kw,
        heat_w_m2,
        cool_w_m2,
        diversity,
        design_winter_c: input.design_winter_c,
        design_summer_c: input.design_summer_c,
        heating_factor,
        cooling_factor,
        category: input.category,
        vent_m3h: q_m3h,
        vent_heat_kw,
        vent_cool_kw,
    }
}

/// 공조 개략 산정에 항상 붙는 권고. 데이터/IT 용도는 경고를 하나 더 추가한다.
pub fn hvac_advisories(use_type: &str) -> Vec<Advisory> {
    let mut adv = vec![
        Advisory::info("조정 가능한 면적 원단위(W/m²) 기반의 개략 산정입니다."),
        Advisory::warning(
            "최종 설계: 난방부하는 DIN EN 12831-1 / DIN/TS 12831-1, 냉방부하는 VDI 2078에 따라 상세 계산하세요.",
        ),
    ];
    if use_type.to_lowercase().starts_with("data") {
        adv.push(Advisory::warning(
            "IT실: 발열부하와 N+1 이중화는 일반적으로 상세 엔지니어링이 필요합니다.",
        ));
    }
    adv
}
