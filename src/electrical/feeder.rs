use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::advisory::Advisory;
use crate::defaults;
use crate::physics::{
    non_negative, three_phase_current, voltage_drop_percent, COPPER_RESISTIVITY_OHM_MM2_PER_M,
};

/// 표준 구리 도체 단면적 [mm²], 오름차순.
pub const STANDARD_CU_SECTIONS_MM2: [f64; 15] = [
    1.5, 2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0,
];

/// 단면적별 단순 허용전류 [A]. 다심 구리 케이블, 전선관/트레이 포설 기준의 보수적 값.
/// 실제 설계는 VDE 0298-4 / IEC 60364-5-52 보정계수를 적용해야 한다.
pub const SIMPLIFIED_AMPACITY_A: [f64; 15] = [
    16.0, 20.0, 26.0, 34.0, 46.0, 61.0, 80.0, 99.0, 119.0, 151.0, 182.0, 210.0, 240.0, 273.0,
    320.0,
];

/// 단면 선정에서 단락전류 경고를 내는 하한 [A]
pub const MIN_SHORT_CIRCUIT_A: f64 = 1000.0;

/// 단면적의 단순 허용전류를 조회한다. 표에 없는 단면적은 `None`.
pub fn ampacity_a(section_mm2: f64) -> Option<f64> {
    STANDARD_CU_SECTIONS_MM2
        .iter()
        .position(|s| *s == section_mm2)
        .map(|i| SIMPLIFIED_AMPACITY_A[i])
}

/// 전동기 기동 방식. 각각 고정된 기동전류 배수를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartMethod {
    DirectOnLine,
    StarDelta,
    SoftStarter,
    Vfd,
}

impl StartMethod {
    pub const ALL: [StartMethod; 4] = [
        StartMethod::DirectOnLine,
        StartMethod::StarDelta,
        StartMethod::SoftStarter,
        StartMethod::Vfd,
    ];

    /// 정격전류 대비 기동전류 배수
    pub fn multiplier(&self) -> f64 {
        match self {
            StartMethod::DirectOnLine => 6.0,
            StartMethod::StarDelta => 2.5,
            StartMethod::SoftStarter => 3.0,
            StartMethod::Vfd => 1.2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StartMethod::DirectOnLine => "Direct on line (DOL)",
            StartMethod::StarDelta => "Star-delta",
            StartMethod::SoftStarter => "Soft-starter",
            StartMethod::Vfd => "VFD (inverter)",
        }
    }

    /// 라벨로 기동 방식을 찾는다. 알 수 없으면 직입기동으로 본다.
    pub fn from_label_or_dol(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            debug!("알 수 없는 기동 방식 '{label}', 직입기동(x6.0)으로 처리");
            StartMethod::DirectOnLine
        })
    }
}

impl FromStr for StartMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "dol" | "direct on line" | "direct on line (dol)" => Ok(StartMethod::DirectOnLine),
            "star-delta" | "star delta" | "yd" => Ok(StartMethod::StarDelta),
            "soft-starter" | "soft starter" | "soft" => Ok(StartMethod::SoftStarter),
            "vfd" | "vfd (inverter)" | "inverter" => Ok(StartMethod::Vfd),
            _ => Err(format!("알 수 없는 기동 방식: {s}")),
        }
    }
}

/// 전동기 정격/기동 전류.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotorStart {
    pub motor_kw: f64,
    pub method: StartMethod,
    /// 정격전류 [A]
    pub nominal_current_a: f64,
    /// 기동전류 [A]
    pub starting_current_a: f64,
    pub multiplier: f64,
}

/// 전동기 정격전류와 기동전류를 계산한다.
pub fn motor_design_current(
    kw: f64,
    v_ll: f64,
    pf: f64,
    eff: f64,
    method: StartMethod,
) -> MotorStart {
    let nominal = three_phase_current(kw, v_ll, pf, eff);
    let multiplier = method.multiplier();
    MotorStart {
        motor_kw: kw,
        method,
        nominal_current_a: nominal,
        starting_current_a: nominal * multiplier,
        multiplier,
    }
}

/// 간선에 함께 검토할 전동기.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorInput {
    pub kw: f64,
    pub method: StartMethod,
}

/// 간선 사이징 입력값.
#[derive(Debug, Clone, PartialEq)]
pub struct FeederInput {
    /// 수용전력 [kW]
    pub demand_kw: f64,
    /// 선간전압 [V]
    pub line_voltage_v: f64,
    pub power_factor: f64,
    pub efficiency: f64,
    /// 간선 길이 [m]
    pub length_m: f64,
    /// 허용 전압강하 [%]
    pub max_vdrop_pct: f64,
    pub motor: Option<MotorInput>,
}

impl Default for FeederInput {
    fn default() -> Self {
        Self {
            demand_kw: 0.0,
            line_voltage_v: defaults::LINE_VOLTAGE_V,
            power_factor: defaults::POWER_FACTOR,
            efficiency: defaults::EFFICIENCY,
            length_m: defaults::FEEDER_LENGTH_M,
            max_vdrop_pct: defaults::MAX_VOLTAGE_DROP_PCT,
            motor: None,
        }
    }
}

/// 간선 사이징 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeederSizingResult {
    pub demand_kw: f64,
    /// 설계전류 [A]
    pub design_current_a: f64,
    /// 선정 단면적 [mm²]
    pub section_mm2: f64,
    /// 전압강하 [%]
    pub vdrop_pct: f64,
    /// 말단 단락전류 근사값 [A]
    pub ik_end_a: f64,
    pub motor: Option<MotorStart>,
    pub advisories: Vec<Advisory>,
}

/// 허용전류와 전압강하를 모두 만족하는 가장 작은 표준 단면을 고른다.
///
/// 만족하는 단면이 없으면 최대 단면과 그 전압강하(한계 초과일 수 있음)를 돌려준다.
pub fn pick_cable_section(
    i_design_a: f64,
    max_vdrop_pct: f64,
    length_m: f64,
    v_ll: f64,
) -> (f64, f64) {
    for (section, ampacity) in STANDARD_CU_SECTIONS_MM2
        .iter()
        .zip(SIMPLIFIED_AMPACITY_A.iter())
    {
        if i_design_a <= *ampacity {
            let vd = voltage_drop_percent(i_design_a, length_m, v_ll, *section);
            if vd <= max_vdrop_pct {
                return (*section, vd);
            }
            debug!("{section} mm²: 전압강하 {vd:.2}% > {max_vdrop_pct}%");
        }
    }
    let largest = STANDARD_CU_SECTIONS_MM2[STANDARD_CU_SECTIONS_MM2.len() - 1];
    debug!("만족하는 단면 없음, 최대 단면 {largest} mm² 사용");
    (
        largest,
        voltage_drop_percent(i_design_a, length_m, v_ll, largest),
    )
}

/// 말단 단락전류를 대략 추정한다.
///
/// 루프 저항 R = 2·ρ·L/S (상+보호도체, 구리), Ik ≈ V_LL / (√3·R)
pub fn short_circuit_end_current(v_ll: f64, length_m: f64, section_mm2: f64) -> f64 {
    if section_mm2 <= 0.0 {
        return f64::NAN;
    }
    let r_loop = 2.0 * COPPER_RESISTIVITY_OHM_MM2_PER_M * length_m / section_mm2;
    if r_loop > 0.0 {
        v_ll / (3f64.sqrt() * r_loop)
    } else {
        f64::NAN
    }
}

/// 수용전력으로 간선 단면을 선정하고 전압강하/단락전류를 검토한다.
///
/// 전동기 기동전류는 권고로만 보고하며 단면 선정(열적 사이징)에는 정상 설계전류만 쓴다.
/// 음수 수용전력, 길이, 허용 전압강하, 전동기 출력은 0으로 본다.
pub fn size_feeder(input: &FeederInput) -> FeederSizingResult {
    let mut advisories = Vec::new();
    let demand_kw = non_negative(input.demand_kw);
    let length_m = non_negative(input.length_m);
    let max_vdrop_pct = non_negative(input.max_vdrop_pct);
    let design_current_a = three_phase_current(
        demand_kw,
        input.line_voltage_v,
        input.power_factor,
        input.efficiency,
    );
    if !design_current_a.is_finite() {
        advisories.push(Advisory::danger(
            "전압, 역률, 효율은 0보다 커야 합니다. 설계전류를 계산할 수 없습니다.",
        ));
    }

    let motor = input.motor.filter(|m| non_negative(m.kw) > 0.0).map(|m| {
        motor_design_current(
            m.kw,
            input.line_voltage_v,
            input.power_factor,
            input.efficiency,
            m.method,
        )
    });
    if let Some(ref m) = motor {
        advisories.push(Advisory::warning(format!(
            "전동기 포함: 기동전류 ≈{:.0} A (정격전류의 x{:.1}). 차단기 순시 트립, 기동 전압강하, 보호협조를 확인하세요.",
            m.starting_current_a, m.multiplier
        )));
    }

    let (section_mm2, vdrop_pct) = pick_cable_section(
        design_current_a,
        max_vdrop_pct,
        length_m,
        input.line_voltage_v,
    );
    let ik_end_a = short_circuit_end_current(input.line_voltage_v, length_m, section_mm2);

    let over_ampacity = ampacity_a(section_mm2).is_some_and(|a| design_current_a > a);
    if over_ampacity {
        advisories.push(Advisory::danger(format!(
            "설계전류가 최대 표준 단면({section_mm2} mm²)의 허용전류를 초과합니다. 병렬 케이블, 버스덕트 또는 간선 분할을 검토하세요."
        )));
    }
    if vdrop_pct > max_vdrop_pct {
        advisories.push(Advisory::danger(
            "전압강하가 허용치를 초과합니다. 단면을 키우거나 길이/부하를 줄이세요.",
        ));
    }
    if ik_end_a < MIN_SHORT_CIRCUIT_A {
        advisories.push(Advisory::warning(
            "말단 단락전류 추정값이 낮습니다. 실제 임피던스, 차단 시간, 계통 조건을 확인하세요.",
        ));
    }

    FeederSizingResult {
        demand_kw,
        design_current_a,
        section_mm2,
        vdrop_pct,
        ik_end_a,
        motor,
        advisories,
    }
}
