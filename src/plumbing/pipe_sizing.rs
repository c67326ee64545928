use crate::defaults;
use crate::physics::non_negative;

/// 유량과 최대 유속으로 만관 원형관 내경[mm]을 구한다.
///
/// d = sqrt(4Q / (π·v)), Q [m³/s]. 유속이 0 이하이면 기본 유속(2 m/s)을 쓴다.
pub fn suggest_pipe_diameter_mm(q_lps: f64, v_max_m_s: f64) -> f64 {
    let q_m3s = non_negative(q_lps) / 1000.0;
    let v = if v_max_m_s > 0.0 {
        v_max_m_s
    } else {
        defaults::PIPE_VELOCITY_M_S
    };
    (4.0 * q_m3s / (std::f64::consts::PI * v)).sqrt() * 1000.0
}
