/// 물 비열 [kJ/(kg·K)]
pub const WATER_CP_KJ_KGK: f64 = 4.186;

/// 하루 급탕 에너지[kWh/일]를 계산한다.
///
/// E = 인원 · L/인·일 · cp · ΔT / 3600 / η (1 L ≈ 1 kg). 효율이 0 이하이면 NaN.
pub fn dhw_energy_kwh_per_day(
    persons: u32,
    liters_per_person_day: f64,
    delta_t_k: f64,
    efficiency: f64,
) -> f64 {
    if efficiency <= 0.0 {
        return f64::NAN;
    }
    let mass_kg = f64::from(persons) * liters_per_person_day.max(0.0);
    let energy_kj = mass_kg * WATER_CP_KJ_KGK * delta_t_k.max(0.0);
    energy_kj / 3600.0 / efficiency
}
