use serde::Serialize;

use crate::physics::{clamp, non_negative};
use crate::table::Table;

/// 수용률이 적용되는 개별 부하.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadItem {
    pub name: String,
    /// 설비용량 [kW]
    pub kw: f64,
    /// 수용률 (0~1)
    pub simultaneity: f64,
}

impl LoadItem {
    /// 음수 용량은 0으로, 수용률은 [0,1]로 제한해 생성한다.
    pub fn new(name: impl Into<String>, kw: f64, simultaneity: f64) -> Self {
        Self {
            name: name.into(),
            kw: non_negative(kw),
            simultaneity: clamp(simultaneity, 0.0, 1.0),
        }
    }

    /// 수용전력 = 설비용량 × 수용률
    pub fn demand_kw(&self) -> f64 {
        self.kw * self.simultaneity
    }
}

/// 수용부하 합산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandSummary {
    pub total_installed_kw: f64,
    pub total_demand_kw: f64,
    /// `Load`, `Installed (kW)`, `Simultaneity`, `Demand (kW)` 열
    pub breakdown: Table,
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// 부하 목록의 설비용량/수용전력 합계와 내역표를 만든다.
pub fn compute_demand(loads: &[LoadItem]) -> DemandSummary {
    let mut breakdown = Table::new(&["Load", "Installed (kW)", "Simultaneity", "Demand (kW)"]);
    let mut total_installed_kw = 0.0;
    let mut total_demand_kw = 0.0;
    for load in loads {
        let demand = load.demand_kw();
        total_installed_kw += load.kw;
        total_demand_kw += demand;
        breakdown.push_row(vec![
            load.name.as_str().into(),
            round3(load.kw).into(),
            round3(load.simultaneity).into(),
            round3(demand).into(),
        ]);
    }
    DemandSummary {
        total_installed_kw,
        total_demand_kw,
        breakdown,
    }
}
