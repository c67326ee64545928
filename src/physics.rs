//! 3상 전류, 전압강하 등 기본 물리식.
//!
//! 분모가 0 이하인 경우 오류 대신 `f64::NAN`을 돌려준다. 표시 계층에서는 NaN을 0과
//! 구분해 보여줘야 한다.

/// 구리 저항률 [Ω·mm²/m] (20°C 근사)
pub const COPPER_RESISTIVITY_OHM_MM2_PER_M: f64 = 0.0175;

/// `x`를 `[lo, hi]` 범위로 포화시킨다. NaN은 하한으로 처리한다.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// 유효전력과 역률로 피상전력[kVA]을 구한다.
pub fn kva_from_kw(kw: f64, pf: f64) -> f64 {
    if pf <= 0.0 {
        return f64::NAN;
    }
    kw / pf
}

/// 3상 부하 전류를 계산한다.
///
/// I = P·1000 / (√3 · V_LL · pf · η)
pub fn three_phase_current(kw: f64, v_ll: f64, pf: f64, eff: f64) -> f64 {
    let denom = 3f64.sqrt() * v_ll * pf * eff;
    if denom <= 0.0 {
        return f64::NAN;
    }
    kw * 1000.0 / denom
}

/// 저항 지배 근사로 3상 전압강하[%]를 계산한다.
///
/// ΔU = √3 · I · (ρ/S) · L, 결과는 ΔU / V_LL · 100
pub fn voltage_drop_percent(i_a: f64, length_m: f64, v_ll: f64, section_mm2: f64) -> f64 {
    voltage_drop_percent_with(
        i_a,
        length_m,
        v_ll,
        section_mm2,
        COPPER_RESISTIVITY_OHM_MM2_PER_M,
    )
}

/// 도체 저항률을 지정해 전압강하[%]를 계산한다.
pub fn voltage_drop_percent_with(
    i_a: f64,
    length_m: f64,
    v_ll: f64,
    section_mm2: f64,
    resistivity_ohm_mm2_per_m: f64,
) -> f64 {
    if section_mm2 <= 0.0 || v_ll <= 0.0 {
        return f64::NAN;
    }
    let r_per_m = resistivity_ohm_mm2_per_m / section_mm2;
    let du = 3f64.sqrt() * i_a * r_per_m * length_m;
    du / v_ll * 100.0
}

/// 음수/NaN 입력을 0으로 바꾼다.
pub(crate) fn non_negative(x: f64) -> f64 {
    x.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_maps_negative_and_nan_to_zero() {
        assert_eq!(non_negative(-3.0), 0.0);
        assert_eq!(non_negative(f64::NAN), 0.0);
        assert_eq!(non_negative(2.5), 2.5);
    }

    #[test]
    fn clamp_sends_nan_to_lower_bound() {
        assert_eq!(clamp(f64::NAN, 0.1, 1.0), 0.1);
        assert_eq!(clamp(5.0, 0.1, 1.0), 1.0);
    }
}
