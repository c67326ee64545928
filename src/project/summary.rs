use serde::Serialize;

use crate::advisory::{advisories_table, Advisory};
use crate::defaults;
use crate::drainage::{drainage_advisories, estimate_rainwater, RainwaterEstimate};
use crate::electrical::{
    compute_demand, estimate_electrical_loads, size_feeder, ConnectedLoads, DemandSummary,
    Diversities, FeederInput, FeederSizingResult,
};
use crate::fire::{fire_predim, FireAssessment, FireInput};
use crate::hvac::{estimate_hvac_capacities, hvac_advisories, HvacCapacityEstimate, HvacCapacityInput};
use crate::plumbing::{
    estimate_fixtures_from_occupancy, fixtures_table, peak_flow_lps, plumbing_advisories,
    FixtureCount, PeakFlow,
};
use crate::project::context::ProjectContext;
use crate::report::{ReportBundle, ReportSection};
use crate::table::Table;

/// 요약에서 인용하는 출처 id
const SUMMARY_SOURCE_IDS: [&str; 6] = [
    "IEC60364_G52_WIK",
    "REHVA_EN16798_PDF",
    "VDI_2078_PAGE",
    "DIN1988_300_PDF",
    "EN12056_INTERTEK",
    "VDS_DIN14675",
];

/// 요약 계산에 쓰는 설비 가정값.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    pub feeder: FeederInput,
    pub diversities: Diversities,
    pub hvac_diversity: f64,
    pub plumbing_simultaneity: f64,
    pub runoff_coeff: f64,
    pub pipe_velocity_m_s: f64,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            feeder: FeederInput::default(),
            diversities: Diversities::default(),
            hvac_diversity: defaults::HVAC_DIVERSITY,
            plumbing_simultaneity: defaults::PLUMBING_SIMULTANEITY,
            runoff_coeff: defaults::RUNOFF_COEFFICIENT,
            pipe_velocity_m_s: defaults::PIPE_VELOCITY_M_S,
        }
    }
}

/// 프로젝트 전체 개략 산정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub connected: ConnectedLoads,
    pub demand: DemandSummary,
    pub feeder: FeederSizingResult,
    pub hvac: HvacCapacityEstimate,
    pub fixtures: Vec<FixtureCount>,
    pub water_peak: PeakFlow,
    pub rainwater: RainwaterEstimate,
    pub fire: FireAssessment,
    /// 모든 모듈의 권고 (감지 순서)
    pub advisories: Vec<Advisory>,
}

impl ProjectSummary {
    /// 컨텍스트 하나로 모든 추정기를 실행한다. 입력을 변경하지 않는다.
    pub fn compute(ctx: &ProjectContext, options: &SummaryOptions) -> Self {
        let connected =
            estimate_electrical_loads(ctx.area_above_m2, &ctx.profile, ctx.design_summer_c);
        let demand = compute_demand(&connected.load_items(&options.diversities));
        let feeder = size_feeder(&FeederInput {
            demand_kw: demand.total_demand_kw,
            ..options.feeder.clone()
        });

        let hvac = estimate_hvac_capacities(&HvacCapacityInput {
            diversity: options.hvac_diversity,
            design_summer_c: ctx.design_summer_c,
            ..HvacCapacityInput::from_profile(
                ctx.area_above_m2,
                &ctx.profile,
                &ctx.climate,
                ctx.persons,
                ctx.category,
            )
        });

        let fixtures = estimate_fixtures_from_occupancy(&ctx.use_type, ctx.persons);
        let water_peak = peak_flow_lps(&fixtures, options.plumbing_simultaneity);
        let rainwater = estimate_rainwater(
            ctx.roof_area_m2,
            ctx.climate.rain_r_l_s_ha,
            options.runoff_coeff,
            options.pipe_velocity_m_s,
        );
        let fire = fire_predim(&FireInput {
            building_use: ctx.use_type.clone(),
            gross_area_m2: ctx.area_total_m2(),
            storeys: ctx.floors_above,
            underground: ctx.floors_below > 0 || ctx.area_below_m2 > 0.0,
        });

        let mut advisories = Vec::new();
        advisories.extend(feeder.advisories.iter().cloned());
        advisories.extend(hvac_advisories(&ctx.use_type));
        advisories.extend(plumbing_advisories());
        advisories.extend(drainage_advisories());
        advisories.extend(fire.advisories.iter().cloned());

        Self {
            connected,
            demand,
            feeder,
            hvac,
            fixtures,
            water_peak,
            rainwater,
            fire,
            advisories,
        }
    }

    fn feeder_table(&self) -> Table {
        let mut t = Table::new(&["Item", "Value"]);
        t.push_row(vec!["Demand power (kW)".into(), self.feeder.demand_kw.into()]);
        t.push_row(vec!["Design current (A)".into(), self.feeder.design_current_a.into()]);
        t.push_row(vec!["Suggested section (mm²)".into(), self.feeder.section_mm2.into()]);
        t.push_row(vec!["Voltage drop (%)".into(), self.feeder.vdrop_pct.into()]);
        t.push_row(vec!["End short-circuit approx. (A)".into(), self.feeder.ik_end_a.into()]);
        t
    }

    fn water_table(&self) -> Table {
        let mut t = Table::new(&["Item", "Value"]);
        t.push_row(vec!["Σ nominal flows (L/s)".into(), self.water_peak.q_sum_lps.into()]);
        t.push_row(vec!["Simultaneity".into(), self.water_peak.simultaneity.into()]);
        t.push_row(vec!["Peak flow (L/s)".into(), self.water_peak.q_peak_lps.into()]);
        t
    }

    fn rain_table(&self) -> Table {
        let mut t = Table::new(&["Item", "Value"]);
        t.push_row(vec!["Roof area (m²)".into(), self.rainwater.roof_area_m2.into()]);
        t.push_row(vec!["Rain intensity (L/s·ha)".into(), self.rainwater.r_l_s_ha.into()]);
        t.push_row(vec!["Runoff coefficient".into(), self.rainwater.runoff_coeff.into()]);
        t.push_row(vec!["Rainwater flow (L/s)".into(), self.rainwater.q_lps.into()]);
        t.push_row(vec!["Equivalent diameter (mm)".into(), self.rainwater.pipe_d_mm.into()]);
        t
    }

    fn fire_table(&self) -> Table {
        let mut t = Table::new(&["Reason"]);
        for r in &self.fire.reasons {
            t.push_row(vec![r.to_string().into()]);
        }
        t
    }

    /// 외부 보고서 렌더러용 묶음을 만든다.
    pub fn report(&self, ctx: &ProjectContext) -> ReportBundle {
        let mut bundle = ReportBundle::default();
        let exec = &mut bundle.executive;
        exec.insert("City".into(), ctx.city.clone());
        exec.insert("Use".into(), ctx.use_type.clone());
        exec.insert("Above-ground area (m²)".into(), format!("{:.0}", ctx.area_above_m2));
        exec.insert("Occupancy (persons)".into(), ctx.persons.to_string());
        exec.insert(
            "Electrical connected (kW)".into(),
            format!("{:.0}", self.connected.total_kw()),
        );
        exec.insert("Heating (kW)".into(), format!("{:.0}", self.hvac.heating_kw));
        exec.insert("Cooling (kW)".into(), format!("{:.0}", self.hvac.cooling_kw));
        exec.insert("Rainwater Q (L/s)".into(), format!("{:.2}", self.rainwater.q_lps));
        exec.insert(
            "Note".into(),
            "Pre-sizing only, not a design project.".into(),
        );

        bundle.sections = vec![
            ReportSection::new("Space allowances", ctx.space_table()),
            ReportSection::new("Electrical connected loads", self.connected.table()),
            ReportSection::new("Electrical demand", self.demand.breakdown.clone()),
            ReportSection::new("Feeder sizing", self.feeder_table()),
            ReportSection::new("HVAC capacities", self.hvac.table()),
            ReportSection::new("Plumbing fixtures", fixtures_table(&self.fixtures)),
            ReportSection::new("Plumbing peak flow", self.water_table()),
            ReportSection::new("Rainwater", self.rain_table()),
            ReportSection::new("Fire safety escalation", self.fire_table()),
            ReportSection::new("Advisories", advisories_table(&self.advisories)),
        ];
        bundle.source_ids = SUMMARY_SOURCE_IDS.iter().map(|s| s.to_string()).collect();
        bundle
    }
}
