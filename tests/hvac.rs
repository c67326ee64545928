//! 냉난방 용량, 기후 보정, 외기량 회귀 테스트.
use mep_presizing_toolbox::advisory::Severity;
use mep_presizing_toolbox::hvac::{
    cooling_climate_factor, estimate_hvac_capacities, heating_climate_factor, hvac_advisories,
    hvac_predim, ventilation_flow, ventilation_sensible_load_kw, HvacCapacityInput,
    VentilationCategory,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn predim_office_1000m2() {
    let res = hvac_predim(1000.0, 50.0, 70.0, 0.8);
    assert_close(res.q_heat_kw, 40.0, 1e-9);
    assert_close(res.q_cool_kw, 56.0, 1e-9);
}

#[test]
fn predim_clamps_diversity() {
    assert_eq!(hvac_predim(1000.0, 50.0, 70.0, 0.1).diversity, 0.3);
    assert_eq!(hvac_predim(1000.0, 50.0, 70.0, 1.5).diversity, 1.0);
    assert_close(hvac_predim(1000.0, 50.0, 70.0, 1.5).q_heat_kw, 50.0, 1e-9);
}

#[test]
fn climate_factors_at_reference_are_one() {
    assert_close(cooling_climate_factor(32.0), 1.0, 1e-12);
    assert_close(heating_climate_factor(-10.0), 1.0, 1e-12);
}

#[test]
fn climate_factors_are_clamped() {
    assert_close(cooling_climate_factor(29.0), 0.7, 1e-12);
    assert_close(cooling_climate_factor(45.0), 1.4, 1e-12);
    assert_close(heating_climate_factor(-14.0), 34.0 / 30.0, 1e-12);
    assert_close(heating_climate_factor(-40.0), 1.4, 1e-12);
    assert_close(heating_climate_factor(15.0), 0.7, 1e-12);
}

#[test]
fn ventilation_cat_ii_100_persons_1000m2() {
    let v = ventilation_flow(1000.0, 100, VentilationCategory::CatII);
    assert_close(v.q_outdoor_lps, 1400.0, 1e-9);
    assert_close(v.q_outdoor_m3h, 5040.0, 1e-9);
}

#[test]
fn ventilation_categories_order() {
    let q: Vec<f64> = VentilationCategory::ALL
        .iter()
        .map(|c| ventilation_flow(1000.0, 100, *c).q_outdoor_lps)
        .collect();
    assert!(q[0] > q[1] && q[1] > q[2], "{q:?}");
    assert_eq!(
        VentilationCategory::from_label_or_default("Cat III"),
        VentilationCategory::CatIII
    );
    assert_eq!(
        VentilationCategory::from_label_or_default("Cat IV"),
        VentilationCategory::CatII
    );
}

#[test]
fn sensible_load_is_signed() {
    let heat_gain = ventilation_sensible_load_kw(3600.0, 26.0, 32.0);
    assert_close(heat_gain, 1.2 * 1.005 * 6.0, 1e-9);
    assert!(ventilation_sensible_load_kw(3600.0, 20.0, -10.0) < 0.0);
    assert_eq!(ventilation_sensible_load_kw(-100.0, 20.0, -10.0), 0.0);
}

#[test]
fn capacities_include_ventilation_add_on() {
    let input = HvacCapacityInput {
        area_m2: 1000.0,
        heating_w_m2: 50.0,
        cooling_w_m2: 70.0,
        diversity: 0.8,
        design_winter_c: -10.0,
        design_summer_c: 32.0,
        persons: 100,
        category: VentilationCategory::CatII,
    };
    let res = estimate_hvac_capacities(&input);
    // 1.68 kg/s 외기
    assert_close(res.vent_heat_kw, 1.68 * 1.005 * 30.0, 1e-6);
    assert_close(res.vent_cool_kw, 1.68 * 1.005 * 6.0, 1e-6);
    assert_close(res.heating_kw, 40.0 + 50.652, 1e-6);
    assert_close(res.cooling_kw, 56.0 + 10.1304, 1e-6);
}

#[test]
fn capacities_cool_summer_adds_no_cooling_vent_load() {
    let input = HvacCapacityInput {
        area_m2: 1000.0,
        design_summer_c: 24.0,
        persons: 100,
        ..HvacCapacityInput::default()
    };
    let res = estimate_hvac_capacities(&input);
    assert_eq!(res.vent_cool_kw, 0.0);
    assert!(res.vent_heat_kw > 0.0);
    assert_close(res.cooling_factor, 0.7, 1e-12);
}

#[test]
fn capacities_are_deterministic() {
    let input = HvacCapacityInput {
        area_m2: 2500.0,
        persons: 200,
        ..HvacCapacityInput::default()
    };
    assert_eq!(estimate_hvac_capacities(&input), estimate_hvac_capacities(&input));
}

#[test]
fn advisories_flag_data_centres() {
    let office = hvac_advisories("Office");
    assert_eq!(office.len(), 2);
    assert_eq!(office[0].level, Severity::Info);
    assert_eq!(office[1].level, Severity::Warning);
    assert_eq!(hvac_advisories("Data centre").len(), 3);
    assert_eq!(hvac_advisories("DATA hall").len(), 3);
}
