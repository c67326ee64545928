use serde::Serialize;

use crate::defaults;
use crate::electrical::demand::LoadItem;
use crate::hvac::climate::cooling_climate_factor;
use crate::physics::non_negative;
use crate::reference_data::UseProfile;
use crate::table::Table;

/// 공조 전력 추정 결과와 가정값.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HvacElectricalEstimate {
    pub kw: f64,
    pub cooling_w_m2: f64,
    pub eer: f64,
    pub fans_w_m2: f64,
    /// 공조 전력 원단위 [W/m²]
    pub hvac_elec_w_m2: f64,
    pub cooling_factor: f64,
}

/// 공조 전력을 개략 추정한다.
///
/// P = A · ((냉방원단위 · 기후보정) / EER + 송풍기원단위) / 1000
pub fn estimate_hvac_electrical_kw(
    area_above_m2: f64,
    profile: &UseProfile,
    design_summer_c: f64,
) -> HvacElectricalEstimate {
    let cooling_w_m2 = non_negative(profile.cooling_w_m2);
    let eer = profile.eer();
    let fans_w_m2 = profile.fans_w_m2();
    let cooling_factor = cooling_climate_factor(design_summer_c);
    let hvac_elec_w_m2 = cooling_w_m2 * cooling_factor / eer + fans_w_m2;
    HvacElectricalEstimate {
        kw: non_negative(area_above_m2) * hvac_elec_w_m2 / 1000.0,
        cooling_w_m2,
        eer,
        fans_w_m2,
        hvac_elec_w_m2,
        cooling_factor,
    }
}

/// 승강기 전력 추정 결과와 가정값.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftEstimate {
    pub kw: f64,
    pub n_lifts: u32,
    pub area_m2_per_lift: f64,
    pub power_kw_per_lift: f64,
    pub diversity: f64,
}

/// 승강기 대수와 전력을 추정한다.
///
/// 대수 = ceil(면적 / 대당 면적), 최소 1대. 변수 중 하나라도 0 이하이면 0 kW.
pub fn estimate_lifts_kw(area_above_m2: f64, profile: &UseProfile) -> LiftEstimate {
    let area_per_lift = profile.area_per_lift();
    let power_per_lift = profile.lift_power_kw_per_lift;
    let diversity = profile.lift_diversity;
    let invalid = !(power_per_lift > 0.0
        && diversity > 0.0
        && area_above_m2 > 0.0
        && area_per_lift > 0.0);
    if invalid {
        return LiftEstimate {
            kw: 0.0,
            n_lifts: 0,
            area_m2_per_lift: area_per_lift,
            power_kw_per_lift: power_per_lift,
            diversity,
        };
    }
    let n_lifts = ((area_above_m2 / area_per_lift).ceil() as u32).max(1);
    LiftEstimate {
        kw: f64::from(n_lifts) * power_per_lift * diversity,
        n_lifts,
        area_m2_per_lift: area_per_lift,
        power_kw_per_lift: power_per_lift,
        diversity,
    }
}

/// 접속부하 항목별 수용률.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diversities {
    pub lighting: f64,
    pub sockets: f64,
    pub hvac: f64,
    pub lifts: f64,
    pub other: f64,
}

impl Default for Diversities {
    fn default() -> Self {
        Self {
            lighting: defaults::DIVERSITY_LIGHTING,
            sockets: defaults::DIVERSITY_SOCKETS,
            hvac: defaults::DIVERSITY_HVAC,
            lifts: defaults::DIVERSITY_LIFTS,
            other: defaults::DIVERSITY_OTHER,
        }
    }
}

/// 항목별 접속부하 [kW].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectedLoads {
    pub lighting_kw: f64,
    pub sockets_kw: f64,
    pub hvac_kw: f64,
    pub lifts_kw: f64,
    pub other_kw: f64,
    pub hvac: HvacElectricalEstimate,
    pub lifts: LiftEstimate,
}

impl ConnectedLoads {
    pub fn total_kw(&self) -> f64 {
        self.lighting_kw + self.sockets_kw + self.hvac_kw + self.lifts_kw + self.other_kw
    }

    /// `Component`/`kW` 표. 마지막 행은 합계.
    pub fn table(&self) -> Table {
        let mut t = Table::new(&["Component", "kW"]);
        t.push_row(vec!["Lighting".into(), self.lighting_kw.into()]);
        t.push_row(vec!["Sockets/small power".into(), self.sockets_kw.into()]);
        t.push_row(vec!["HVAC (electric)".into(), self.hvac_kw.into()]);
        t.push_row(vec!["Lifts".into(), self.lifts_kw.into()]);
        t.push_row(vec!["Other".into(), self.other_kw.into()]);
        t.push_row(vec!["TOTAL connected (kW)".into(), self.total_kw().into()]);
        t
    }

    /// 항목별 수용률을 적용한 부하 목록으로 변환한다.
    pub fn load_items(&self, diversities: &Diversities) -> Vec<LoadItem> {
        vec![
            LoadItem::new("Lighting", self.lighting_kw, diversities.lighting),
            LoadItem::new("Sockets / small power", self.sockets_kw, diversities.sockets),
            LoadItem::new("HVAC", self.hvac_kw, diversities.hvac),
            LoadItem::new("Lifts", self.lifts_kw, diversities.lifts),
            LoadItem::new("Other", self.other_kw, diversities.other),
        ]
    }
}

/// 지상층 면적과 용도 원단위로 접속부하를 추정한다. 공조/승강기는 각 추정기로 계산해 합산한다.
pub fn estimate_electrical_loads(
    area_above_m2: f64,
    profile: &UseProfile,
    design_summer_c: f64,
) -> ConnectedLoads {
    let area = non_negative(area_above_m2);
    let hvac = estimate_hvac_electrical_kw(area, profile, design_summer_c);
    let lifts = estimate_lifts_kw(area, profile);
    ConnectedLoads {
        lighting_kw: area * non_negative(profile.lighting_w_m2) / 1000.0,
        sockets_kw: area * non_negative(profile.sockets_w_m2) / 1000.0,
        hvac_kw: hvac.kw,
        lifts_kw: lifts.kw,
        other_kw: area * non_negative(profile.other_w_m2) / 1000.0,
        hvac,
        lifts,
    }
}
