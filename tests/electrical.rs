//! 3상 전류, 간선 선정, 접속부하/수용전력 회귀 테스트.
use mep_presizing_toolbox::advisory::{highest_severity, Severity};
use mep_presizing_toolbox::electrical::{
    ampacity_a, compute_demand, estimate_electrical_loads, estimate_lifts_kw, motor_design_current,
    pick_cable_section, short_circuit_end_current, size_feeder, Diversities, FeederInput,
    LoadItem, MotorInput, StartMethod, STANDARD_CU_SECTIONS_MM2,
};
use mep_presizing_toolbox::physics::{kva_from_kw, three_phase_current, voltage_drop_percent};
use mep_presizing_toolbox::reference_data::{ReferenceData, UseProfile};
use mep_presizing_toolbox::table::Cell;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn feeder(kw: f64, length_m: f64) -> FeederInput {
    FeederInput {
        demand_kw: kw,
        length_m,
        ..FeederInput::default()
    }
}

#[test]
fn three_phase_current_50kw() {
    assert_close(three_phase_current(50.0, 400.0, 0.9, 0.95), 84.41, 0.01);
}

#[test]
fn three_phase_current_rises_with_power_and_falls_with_voltage() {
    let powers = [1.0, 10.0, 50.0, 120.0, 400.0];
    for v in [230.0, 400.0, 690.0] {
        let currents: Vec<f64> = powers
            .iter()
            .map(|kw| three_phase_current(*kw, v, 0.9, 0.95))
            .collect();
        assert!(currents.windows(2).all(|w| w[0] < w[1]), "{v} V: {currents:?}");
    }
    for kw in powers {
        let at_230 = three_phase_current(kw, 230.0, 0.9, 0.95);
        let at_400 = three_phase_current(kw, 400.0, 0.9, 0.95);
        let at_690 = three_phase_current(kw, 690.0, 0.9, 0.95);
        assert!(at_230 > at_400 && at_400 > at_690, "{kw} kW");
    }
}

#[test]
fn three_phase_current_invalid_params_is_nan() {
    assert!(three_phase_current(50.0, 0.0, 0.9, 0.95).is_nan());
    assert!(three_phase_current(50.0, 400.0, -0.9, 0.95).is_nan());
    assert!(kva_from_kw(90.0, 0.0).is_nan());
    assert_close(kva_from_kw(90.0, 0.9), 100.0, 1e-9);
}

#[test]
fn voltage_drop_scales_with_length_and_section() {
    let base = voltage_drop_percent(100.0, 50.0, 400.0, 35.0);
    assert_close(voltage_drop_percent(100.0, 100.0, 400.0, 35.0), 2.0 * base, 1e-9);
    assert_close(voltage_drop_percent(100.0, 50.0, 400.0, 70.0), base / 2.0, 1e-9);
    assert!(voltage_drop_percent(100.0, 50.0, 400.0, 0.0).is_nan());
}

#[test]
fn feeder_50kw_30m_selects_35mm2() {
    let res = size_feeder(&FeederInput {
        max_vdrop_pct: 3.0,
        ..feeder(50.0, 30.0)
    });
    assert_close(res.design_current_a, 84.41, 0.01);
    assert_eq!(res.section_mm2, 35.0);
    assert_close(res.vdrop_pct, 0.548, 0.001);
    assert_close(res.ik_end_a, 7698.0, 1.0);
    assert!(res.advisories.is_empty(), "{:?}", res.advisories);
}

#[test]
fn feeder_first_fit_skips_section_failing_voltage_drop() {
    // 35 mm²는 허용전류는 만족하지만 200 m에서 전압강하 3.65% > 3%
    let (section, vd) = pick_cable_section(84.41, 3.0, 200.0, 400.0);
    assert_eq!(section, 50.0);
    assert!(vd <= 3.0);
    assert_close(vd, 2.557, 0.005);
}

#[test]
fn feeder_selection_is_smallest_feasible() {
    for (kw, length_m) in [(1.0, 20.0), (10.0, 80.0), (40.0, 120.0), (120.0, 60.0)] {
        let i_a = three_phase_current(kw, 400.0, 0.9, 0.95);
        let (section, vd) = pick_cable_section(i_a, 3.0, length_m, 400.0);
        assert!(ampacity_a(section).expect("table section") >= i_a);
        assert!(vd <= 3.0);
        // 더 작은 단면은 모두 허용전류 또는 전압강하 중 하나를 만족하지 못한다
        for smaller in STANDARD_CU_SECTIONS_MM2.iter().filter(|s| **s < section) {
            let fits_current = ampacity_a(*smaller).expect("table section") >= i_a;
            let fits_drop = voltage_drop_percent(i_a, length_m, 400.0, *smaller) <= 3.0;
            assert!(!(fits_current && fits_drop), "{smaller} mm² should have been chosen");
        }
    }
}

#[test]
fn feeder_out_of_table_falls_back_to_largest_with_danger() {
    let res = size_feeder(&feeder(400.0, 50.0));
    assert_eq!(res.section_mm2, 240.0);
    assert!(res.vdrop_pct.is_finite());
    assert_eq!(highest_severity(&res.advisories), Some(Severity::Danger));
}

#[test]
fn feeder_excess_voltage_drop_reports_danger() {
    let res = size_feeder(&feeder(200.0, 400.0));
    assert!(res.vdrop_pct > FeederInput::default().max_vdrop_pct);
    assert!(res
        .advisories
        .iter()
        .any(|a| a.level == Severity::Danger && a.text.contains("전압강하")));
}

#[test]
fn feeder_low_short_circuit_warns() {
    let res = size_feeder(&feeder(1.0, 200.0));
    assert_eq!(res.section_mm2, 1.5);
    assert!(res.ik_end_a < 1000.0);
    assert!(res.advisories.iter().any(|a| a.level == Severity::Warning));
    assert_close(short_circuit_end_current(400.0, 200.0, 1.5), 49.48, 0.05);
}

#[test]
fn feeder_negative_inputs_are_treated_as_zero() {
    let res = size_feeder(&FeederInput {
        demand_kw: -50.0,
        max_vdrop_pct: -1.0,
        motor: Some(MotorInput {
            kw: -11.0,
            method: StartMethod::DirectOnLine,
        }),
        ..FeederInput::default()
    });
    assert_eq!(res.demand_kw, 0.0);
    assert_eq!(res.design_current_a, 0.0);
    assert!(res.vdrop_pct >= 0.0);
    assert_eq!(res.section_mm2, 1.5);
    assert!(res.motor.is_none());
    assert!(res.advisories.iter().all(|a| a.level != Severity::Danger));

    let res = size_feeder(&feeder(50.0, -30.0));
    assert!(res.design_current_a >= 0.0);
    assert!(res.vdrop_pct >= 0.0);
}

#[test]
fn feeder_with_invalid_voltage_does_not_panic() {
    let res = size_feeder(&FeederInput {
        line_voltage_v: 0.0,
        ..feeder(50.0, 30.0)
    });
    assert!(res.design_current_a.is_nan());
    assert_eq!(highest_severity(&res.advisories), Some(Severity::Danger));
}

#[test]
fn motor_start_adds_warning_without_changing_section() {
    let plain = size_feeder(&feeder(50.0, 30.0));
    let with_motor = size_feeder(&FeederInput {
        motor: Some(MotorInput {
            kw: 11.0,
            method: StartMethod::StarDelta,
        }),
        ..feeder(50.0, 30.0)
    });
    assert_eq!(plain.section_mm2, with_motor.section_mm2);
    let m = with_motor.motor.expect("motor result");
    assert_close(m.starting_current_a, 2.5 * m.nominal_current_a, 1e-9);
    assert!(with_motor
        .advisories
        .iter()
        .any(|a| a.level == Severity::Warning));
}

#[test]
fn motor_start_multipliers_and_labels() {
    let m = motor_design_current(15.0, 400.0, 0.9, 0.95, StartMethod::DirectOnLine);
    assert_close(m.starting_current_a, 6.0 * m.nominal_current_a, 1e-9);
    assert_eq!(StartMethod::from_label_or_dol("Soft-starter"), StartMethod::SoftStarter);
    assert_eq!(StartMethod::from_label_or_dol("VFD (inverter)").multiplier(), 1.2);
    assert_eq!(StartMethod::from_label_or_dol("unknown"), StartMethod::DirectOnLine);
    for m in StartMethod::ALL {
        assert_eq!(StartMethod::from_label_or_dol(m.label()), m);
    }
}

#[test]
fn demand_totals_and_table_columns() {
    let loads = vec![
        LoadItem::new("Lighting", 80.0, 0.9),
        LoadItem::new("Sockets", 150.0, 0.8),
        LoadItem::new("Broken", -5.0, 1.7),
    ];
    let d = compute_demand(&loads);
    assert_close(d.total_installed_kw, 230.0, 1e-9);
    assert_close(d.total_demand_kw, 192.0, 1e-9);
    assert_eq!(
        d.breakdown.columns,
        vec!["Load", "Installed (kW)", "Simultaneity", "Demand (kW)"]
    );
    let sim = d.breakdown.column("Simultaneity").expect("column");
    assert_eq!(sim[2], &Cell::Number(1.0));
}

#[test]
fn connected_loads_office_10000m2() {
    let data = ReferenceData::builtin().expect("builtin data");
    let profile = data.use_profile("Office").expect("office profile");
    let loads = estimate_electrical_loads(10_000.0, profile, 32.0);
    assert_close(loads.lighting_kw, 80.0, 1e-9);
    assert_close(loads.sockets_kw, 150.0, 1e-9);
    assert_close(loads.other_kw, 50.0, 1e-9);
    assert_close(loads.hvac_kw, 268.75, 1e-6);
    assert_eq!(loads.lifts.n_lifts, 2);
    assert_close(loads.lifts_kw, 18.0, 1e-9);
    assert_close(loads.total_kw(), 566.75, 1e-6);

    let table = loads.table();
    assert_eq!(table.len(), 6);
    assert_eq!(table.rows[5][0], Cell::from("TOTAL connected (kW)"));

    let demand = compute_demand(&loads.load_items(&Diversities::default()));
    assert_close(demand.total_demand_kw, 484.675, 1e-6);
}

#[test]
fn lifts_zero_when_parameters_invalid() {
    let profile = UseProfile {
        lift_power_kw_per_lift: 0.0,
        ..UseProfile::default()
    };
    let lifts = estimate_lifts_kw(10_000.0, &profile);
    assert_eq!(lifts.n_lifts, 0);
    assert_eq!(lifts.kw, 0.0);

    let small = estimate_lifts_kw(100.0, &UseProfile::default());
    assert_eq!(small.n_lifts, 1);
}
