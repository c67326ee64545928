use serde::{Deserialize, Serialize};

use crate::hvac::VentilationCategory;
use crate::physics::non_negative;
use crate::reference_data::{CityPreset, ReferenceData, UseProfile};
use crate::table::Table;

/// 자동 추정값을 쓸지, 사용자가 지정한 값을 쓸지.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Estimate<T> {
    #[default]
    Auto,
    Manual(T),
}

impl<T> Estimate<T> {
    /// 수동값이 있으면 그 값을, 없으면 자동 추정값을 돌려준다.
    pub fn resolve(self, auto: T) -> T {
        match self {
            Estimate::Auto => auto,
            Estimate::Manual(v) => v,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Estimate::Auto)
    }
}

impl<T> From<Option<T>> for Estimate<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Estimate::Manual(v),
            None => Estimate::Auto,
        }
    }
}

/// 면적과 용도 재실 밀도로 재실인원을 추정한다. 0.5는 짝수 쪽으로 반올림한다.
pub fn estimate_occupancy(area_above_m2: f64, profile: &UseProfile) -> u32 {
    let persons = (non_negative(area_above_m2) / profile.occupancy_density()).round_ties_even();
    persons as u32
}

/// 지붕 면적 = 지상 면적 / max(1, 지상층수)
pub fn estimate_roof_area(area_above_m2: f64, floors_above: u32) -> f64 {
    non_negative(area_above_m2) / f64::from(floors_above.max(1))
}

/// 기계실/샤프트 면적 추정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceAllowances {
    pub tech_rooms_m2: f64,
    pub shafts_m2: f64,
    pub shafts_m2_per_floor: f64,
}

/// 연면적과 용도 비율로 기계실/샤프트 면적을 추정한다.
pub fn estimate_tech_rooms_and_shafts(
    area_total_m2: f64,
    floors_above: u32,
    profile: &UseProfile,
) -> SpaceAllowances {
    let area = non_negative(area_total_m2);
    let tech_rooms_m2 = non_negative(area * profile.tech_ratio());
    let shafts_m2 = non_negative(area * profile.shaft_ratio());
    SpaceAllowances {
        tech_rooms_m2,
        shafts_m2,
        shafts_m2_per_floor: shafts_m2 / f64::from(floors_above.max(1)),
    }
}

/// 프로젝트 기본 입력. UI 등 호출 측이 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInput {
    pub city: String,
    pub use_type: String,
    pub area_above_m2: f64,
    pub area_below_m2: f64,
    pub floors_above: u32,
    pub floors_below: u32,
    pub category: VentilationCategory,
    /// 하계 설계온도 수동 지정. 없으면 도시 프리셋을 쓴다
    pub design_summer_c: Option<f64>,
    pub occupancy: Estimate<u32>,
    pub roof_area_m2: Estimate<f64>,
    pub tech_rooms_m2: Estimate<f64>,
    pub shafts_m2: Estimate<f64>,
}

impl Default for ProjectInput {
    fn default() -> Self {
        Self {
            city: crate::defaults::CUSTOM_CITY.to_string(),
            use_type: "Office".to_string(),
            area_above_m2: 10_000.0,
            area_below_m2: 0.0,
            floors_above: 8,
            floors_below: 0,
            category: VentilationCategory::CatII,
            design_summer_c: None,
            occupancy: Estimate::Auto,
            roof_area_m2: Estimate::Auto,
            tech_rooms_m2: Estimate::Auto,
            shafts_m2: Estimate::Auto,
        }
    }
}

/// 자동/수동 값을 모두 확정한 불변 프로젝트 컨텍스트. 모든 추정기에 전달된다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectContext {
    pub city: String,
    pub use_type: String,
    pub profile: UseProfile,
    pub climate: CityPreset,
    pub area_above_m2: f64,
    pub area_below_m2: f64,
    pub floors_above: u32,
    pub floors_below: u32,
    pub category: VentilationCategory,
    pub design_summer_c: f64,
    pub persons: u32,
    pub roof_area_m2: f64,
    pub tech_rooms_m2: f64,
    pub shafts_m2: f64,
    /// 자동 추정값 (수동 지정과 비교용)
    pub allowances: SpaceAllowances,
}

impl ProjectContext {
    /// 참조 데이터로 프로필/기후를 찾고 자동 추정값을 채운다.
    pub fn resolve(input: &ProjectInput, data: &ReferenceData) -> Self {
        let profile = data.use_profile_or_default(&input.use_type);
        let climate = data.city(&input.city);
        let area_above = non_negative(input.area_above_m2);
        let area_below = non_negative(input.area_below_m2);

        let persons = input
            .occupancy
            .resolve(estimate_occupancy(area_above, &profile));
        let roof_area = non_negative(
            input
                .roof_area_m2
                .resolve(estimate_roof_area(area_above, input.floors_above)),
        );
        let allowances =
            estimate_tech_rooms_and_shafts(area_above + area_below, input.floors_above, &profile);
        let tech_rooms = non_negative(input.tech_rooms_m2.resolve(allowances.tech_rooms_m2));
        let shafts = non_negative(input.shafts_m2.resolve(allowances.shafts_m2));
        let design_summer_c = input.design_summer_c.unwrap_or(climate.design_summer_c);

        Self {
            city: input.city.clone(),
            use_type: input.use_type.clone(),
            profile,
            climate,
            area_above_m2: area_above,
            area_below_m2: area_below,
            floors_above: input.floors_above,
            floors_below: input.floors_below,
            category: input.category,
            design_summer_c,
            persons,
            roof_area_m2: roof_area,
            tech_rooms_m2: tech_rooms,
            shafts_m2: shafts,
            allowances,
        }
    }

    pub fn area_total_m2(&self) -> f64 {
        self.area_above_m2 + self.area_below_m2
    }

    pub fn shafts_m2_per_floor(&self) -> f64 {
        self.shafts_m2 / f64::from(self.floors_above.max(1))
    }

    /// `Item`/`Estimated`/`Used` 표.
    pub fn space_table(&self) -> Table {
        let mut t = Table::new(&["Item", "Estimated", "Used"]);
        t.push_row(vec![
            "Technical rooms (m²)".into(),
            self.allowances.tech_rooms_m2.into(),
            self.tech_rooms_m2.into(),
        ]);
        t.push_row(vec![
            "Shafts total (m²)".into(),
            self.allowances.shafts_m2.into(),
            self.shafts_m2.into(),
        ]);
        t.push_row(vec![
            "Shafts per storey (m²)".into(),
            self.allowances.shafts_m2_per_floor.into(),
            self.shafts_m2_per_floor().into(),
        ]);
        t
    }
}
