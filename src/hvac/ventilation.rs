use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::physics::non_negative;
use crate::table::Table;

/// 공기 밀도 [kg/m³]
pub const AIR_DENSITY_KG_M3: f64 = 1.2;
/// 공기 정압비열 [kJ/(kg·K)]
pub const AIR_CP_KJ_KGK: f64 = 1.005;

/// 실내공기질 등급 (EN 16798-1 예시값).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VentilationCategory {
    #[serde(rename = "Cat I")]
    CatI,
    #[default]
    #[serde(rename = "Cat II")]
    CatII,
    #[serde(rename = "Cat III")]
    CatIII,
}

impl VentilationCategory {
    pub const ALL: [VentilationCategory; 3] = [
        VentilationCategory::CatI,
        VentilationCategory::CatII,
        VentilationCategory::CatIII,
    ];

    /// 1인당 외기량 qp [L/(s·인)]
    pub fn qp_ls_per_person(&self) -> f64 {
        match self {
            VentilationCategory::CatI => 10.0,
            VentilationCategory::CatII => 7.0,
            VentilationCategory::CatIII => 4.0,
        }
    }

    /// 면적당 외기량 qB [L/(s·m²)]
    pub fn qb_ls_per_m2(&self) -> f64 {
        match self {
            VentilationCategory::CatI => 1.0,
            VentilationCategory::CatII => 0.7,
            VentilationCategory::CatIII => 0.4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VentilationCategory::CatI => "Cat I",
            VentilationCategory::CatII => "Cat II",
            VentilationCategory::CatIII => "Cat III",
        }
    }

    /// 라벨로 등급을 찾는다. 알 수 없으면 Cat II.
    pub fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            warn!("알 수 없는 실내공기질 등급 '{label}', Cat II를 사용합니다.");
            VentilationCategory::CatII
        })
    }
}

impl fmt::Display for VentilationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VentilationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match key.as_str() {
            "cati" | "i" | "1" => Ok(VentilationCategory::CatI),
            "catii" | "ii" | "2" => Ok(VentilationCategory::CatII),
            "catiii" | "iii" | "3" => Ok(VentilationCategory::CatIII),
            _ => Err(format!("알 수 없는 실내공기질 등급: {s}")),
        }
    }
}

/// 외기 도입량 추정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VentilationEstimate {
    pub category: VentilationCategory,
    pub qp_ls_per_person: f64,
    pub qb_ls_per_m2: f64,
    /// 외기량 [L/s]
    pub q_outdoor_lps: f64,
    /// 외기량 [m³/h]
    pub q_outdoor_m3h: f64,
}

impl VentilationEstimate {
    pub fn table(&self) -> Table {
        let mut t = Table::new(&["Item", "Value"]);
        t.push_row(vec!["Indoor air category".into(), self.category.label().into()]);
        t.push_row(vec!["qp (L/s·person)".into(), self.qp_ls_per_person.into()]);
        t.push_row(vec!["qB (L/s·m²)".into(), self.qb_ls_per_m2.into()]);
        t.push_row(vec!["Outdoor air flow (L/s)".into(), self.q_outdoor_lps.into()]);
        t.push_row(vec!["Outdoor air flow (m³/h)".into(), self.q_outdoor_m3h.into()]);
        t
    }
}

/// 인원+면적 방식으로 외기량을 계산한다.
///
/// q = n·qp + A·qB [L/s], 1 L/s = 3.6 m³/h
pub fn ventilation_flow(
    area_m2: f64,
    persons: u32,
    category: VentilationCategory,
) -> VentilationEstimate {
    let area = non_negative(area_m2);
    let qp = category.qp_ls_per_person();
    let qb = category.qb_ls_per_m2();
    let q_lps = f64::from(persons) * qp + area * qb;
    VentilationEstimate {
        category,
        qp_ls_per_person: qp,
        qb_ls_per_m2: qb,
        q_outdoor_lps: q_lps,
        q_outdoor_m3h: q_lps * 3.6,
    }
}

/// 외기 현열부하[kW]. 부호는 (t_out − t_in)를 따른다.
///
/// kW = ρ · (q/3600) · cp · ΔT
pub fn ventilation_sensible_load_kw(q_m3h: f64, t_in_c: f64, t_out_c: f64) -> f64 {
    let m_dot = AIR_DENSITY_KG_M3 * non_negative(q_m3h) / 3600.0;
    m_dot * AIR_CP_KJ_KGK * (t_out_c - t_in_c)
}
