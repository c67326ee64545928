use serde::Serialize;

use crate::physics::{clamp, non_negative};
use crate::plumbing::pipe_sizing::suggest_pipe_diameter_mm;

/// 면적당 강우강도로 우수 유량[L/s]을 구한다. Q = A · r, r [L/(s·m²)]
pub fn rain_flow_lps(area_m2: f64, r_lps_m2: f64) -> f64 {
    non_negative(area_m2) * non_negative(r_lps_m2)
}

/// 강우강도 [L/(s·ha)], 유출계수, 지붕면적으로 우수 유량[L/s]을 구한다.
///
/// Q = r · C · A[ha]. 유출계수는 [0.1, 1.0]으로 제한한다.
pub fn estimate_rain_flow_lps(roof_area_m2: f64, r_l_s_ha: f64, runoff_coeff: f64) -> f64 {
    let area_ha = non_negative(roof_area_m2) / 10_000.0;
    let r = non_negative(r_l_s_ha);
    let c = clamp(runoff_coeff, 0.1, 1.0);
    r * c * area_ha
}

/// 우수 배관 만관 내경[mm].
pub fn suggest_rain_pipe_d_mm(q_lps: f64, v_m_s: f64) -> f64 {
    suggest_pipe_diameter_mm(q_lps, v_m_s)
}

/// 오수 유량[L/s]. 기구 유량 합에 단순 동시사용 계수를 곱한다.
pub fn wastewater_flow_lps(fixture_flow_sum_lps: f64, k: f64) -> f64 {
    non_negative(fixture_flow_sum_lps) * non_negative(k)
}

/// 지붕 우수 개략 산정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainwaterEstimate {
    pub roof_area_m2: f64,
    pub r_l_s_ha: f64,
    pub runoff_coeff: f64,
    pub q_lps: f64,
    pub pipe_d_mm: f64,
}

/// 지붕 우수 유량과 만관 내경을 한 번에 구한다.
pub fn estimate_rainwater(
    roof_area_m2: f64,
    r_l_s_ha: f64,
    runoff_coeff: f64,
    v_m_s: f64,
) -> RainwaterEstimate {
    let q_lps = estimate_rain_flow_lps(roof_area_m2, r_l_s_ha, runoff_coeff);
    RainwaterEstimate {
        roof_area_m2: non_negative(roof_area_m2),
        r_l_s_ha: non_negative(r_l_s_ha),
        runoff_coeff: clamp(runoff_coeff, 0.1, 1.0),
        q_lps,
        pipe_d_mm: suggest_rain_pipe_d_mm(q_lps, v_m_s),
    }
}

