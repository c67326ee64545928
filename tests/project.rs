//! 참조 데이터, 프로젝트 컨텍스트, 요약/보고서, 설정 파일 테스트.
use std::path::PathBuf;

use mep_presizing_toolbox::advisory::Severity;
use mep_presizing_toolbox::config::{self, Config};
use mep_presizing_toolbox::fire::EscalationReason;
use mep_presizing_toolbox::hvac::VentilationCategory;
use mep_presizing_toolbox::project::{
    estimate_occupancy, estimate_roof_area, Estimate, ProjectContext, ProjectInput, ProjectSummary, SummaryOptions,
};
use mep_presizing_toolbox::reference_data::{ReferenceData, ReferenceDataError, UseProfile};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn builtin() -> ReferenceData {
    ReferenceData::builtin().expect("builtin reference data")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mep_presizing_{}_{name}", std::process::id()))
}

#[test]
fn builtin_data_has_profiles_cities_and_sources() {
    let data = builtin();
    for use_type in ["Office", "Retail", "Residential", "Hotel"] {
        assert!(data.use_profile(use_type).is_some(), "{use_type}");
    }
    assert!(data.city_presets.contains_key("Custom"));
    assert!(data.city_presets.contains_key("Berlin"));
    assert!(data.source("VDS_DIN14675").is_some());
}

#[test]
fn unknown_lookups_fall_back() {
    let data = builtin();
    let custom = data.city("Custom");
    assert_eq!(data.city("Atlantis"), custom);
    assert_eq!(data.use_profile_or_default("Warehouse"), UseProfile::default());

    let empty = ReferenceData::default();
    assert_close(empty.city("Berlin").design_temp_c, -10.0, 1e-12);
}

#[test]
fn missing_fields_take_defaults() {
    let data = ReferenceData::from_toml_str(
        r#"
        [use_profiles.Lab]
        lighting_w_m2 = 12.0
        occupancy_m2_per_person = 0.0
        "#,
    )
    .expect("partial data");
    let lab = data.use_profile("Lab").expect("lab");
    assert_close(lab.lighting_w_m2, 12.0, 1e-12);
    assert_close(lab.cooling_w_m2, 70.0, 1e-12);
    assert_close(lab.occupancy_density(), 10.0, 1e-12);
}

#[test]
fn invalid_data_is_rejected() {
    let err = ReferenceData::from_toml_str(
        r#"
        [use_profiles.Office]
        shafts_ratio = 1.5
        "#,
    )
    .expect_err("ratio out of range");
    assert!(matches!(
        err,
        ReferenceDataError::Invalid {
            field: "shafts_ratio",
            ..
        }
    ));

    let err = ReferenceData::from_toml_str("use_profiles = 3").expect_err("bad toml");
    assert!(matches!(err, ReferenceDataError::Parse(_)));
}

#[test]
fn context_auto_estimates_default_project() {
    let ctx = ProjectContext::resolve(&ProjectInput::default(), &builtin());
    assert_eq!(ctx.persons, 833);
    assert_close(ctx.roof_area_m2, 1250.0, 1e-9);
    assert_close(ctx.tech_rooms_m2, 200.0, 1e-9);
    assert_close(ctx.shafts_m2, 100.0, 1e-9);
    assert_close(ctx.shafts_m2_per_floor(), 12.5, 1e-9);
    assert_close(ctx.design_summer_c, 32.0, 1e-12);
}

#[test]
fn context_manual_values_override_auto() {
    let input = ProjectInput {
        occupancy: Estimate::Manual(500),
        roof_area_m2: Estimate::Manual(-20.0),
        shafts_m2: Some(80.0).into(),
        design_summer_c: Some(35.0),
        ..ProjectInput::default()
    };
    let ctx = ProjectContext::resolve(&input, &builtin());
    assert_eq!(ctx.persons, 500);
    assert_eq!(ctx.roof_area_m2, 0.0);
    assert_close(ctx.shafts_m2, 80.0, 1e-12);
    assert_close(ctx.allowances.shafts_m2, 100.0, 1e-9);
    assert_close(ctx.design_summer_c, 35.0, 1e-12);
    assert!(input.tech_rooms_m2.is_auto());
}

#[test]
fn occupancy_rounds_half_to_even() {
    let profile = UseProfile {
        occupancy_m2_per_person: 10.0,
        ..UseProfile::default()
    };
    assert_eq!(estimate_occupancy(25.0, &profile), 2);
    assert_eq!(estimate_occupancy(35.0, &profile), 4);
    assert_eq!(estimate_occupancy(5.0, &profile), 0);
    assert_eq!(estimate_occupancy(26.0, &profile), 3);
}

#[test]
fn roof_area_with_zero_storeys() {
    assert_close(estimate_roof_area(3000.0, 0), 3000.0, 1e-12);
    assert_close(estimate_roof_area(3000.0, 3), 1000.0, 1e-12);
}

#[test]
fn summary_default_project() {
    let ctx = ProjectContext::resolve(&ProjectInput::default(), &builtin());
    let summary = ProjectSummary::compute(&ctx, &SummaryOptions::default());

    assert_close(summary.connected.total_kw(), 566.75, 1e-6);
    assert_close(summary.demand.total_demand_kw, 484.675, 1e-6);
    assert_eq!(summary.feeder.section_mm2, 240.0);
    assert_close(summary.rainwater.q_lps, 33.75, 1e-9);
    assert_close(summary.water_peak.q_peak_lps, 3.5525, 1e-9);
    assert_eq!(
        summary.fire.reasons,
        vec![EscalationReason::LargeArea, EscalationReason::HighRise]
    );

    // 간선(허용전류 초과) 1 + 공조 2 + 급수 2 + 배수 2 + 방화 2
    assert_eq!(summary.advisories.len(), 9);
    assert_eq!(summary.advisories[0].level, Severity::Danger);
    assert_eq!(summary.advisories[8].level, Severity::Info);
}

#[test]
fn summary_does_not_mutate_context_and_is_deterministic() {
    let ctx = ProjectContext::resolve(&ProjectInput::default(), &builtin());
    let before = ctx.clone();
    let a = ProjectSummary::compute(&ctx, &SummaryOptions::default());
    let b = ProjectSummary::compute(&ctx, &SummaryOptions::default());
    assert_eq!(ctx, before);
    assert_eq!(a, b);
}

#[test]
fn underground_area_escalates_fire() {
    let input = ProjectInput {
        area_above_m2: 2000.0,
        floors_above: 2,
        area_below_m2: 500.0,
        ..ProjectInput::default()
    };
    let ctx = ProjectContext::resolve(&input, &builtin());
    let summary = ProjectSummary::compute(&ctx, &SummaryOptions::default());
    assert_eq!(summary.fire.reasons, vec![EscalationReason::Underground]);
}

#[test]
fn report_bundle_sections_sources_and_exports() {
    let data = builtin();
    let ctx = ProjectContext::resolve(&ProjectInput::default(), &data);
    let bundle = ProjectSummary::compute(&ctx, &SummaryOptions::default()).report(&ctx);

    assert_eq!(bundle.sections.len(), 10);
    assert_eq!(bundle.sections[0].title, "Space allowances");
    assert_eq!(bundle.executive.get("Occupancy (persons)").map(String::as_str), Some("833"));
    for id in &bundle.source_ids {
        assert!(data.source(id).is_some(), "unknown source {id}");
    }

    let files = bundle.csv_files();
    assert_eq!(files.len(), 10);
    assert_eq!(files[0].0, "01_space_allowances.csv");
    assert!(files[1].1.starts_with("Component,kW\n"));
    assert!(files[1].1.contains("TOTAL connected (kW)"));

    let toml = bundle.to_toml().expect("report toml");
    assert!(toml.contains("Space allowances"));
}

#[test]
fn project_input_reads_from_toml() {
    let input: ProjectInput = toml::from_str(
        r#"
        city = "Hamburg"
        use_type = "Hotel"
        area_above_m2 = 6000.0
        floors_above = 5
        category = "Cat I"
        occupancy = { Manual = 250 }
        "#,
    )
    .expect("project toml");
    assert_eq!(input.category, VentilationCategory::CatI);
    assert_eq!(input.occupancy, Estimate::Manual(250));
    assert!(input.roof_area_m2.is_auto());

    let ctx = ProjectContext::resolve(&input, &builtin());
    assert_close(ctx.design_summer_c, 29.0, 1e-12);
    assert_close(ctx.climate.rain_r_l_s_ha, 270.0, 1e-12);
}

#[test]
fn config_created_when_missing_and_reloaded() {
    let path = temp_path("config.toml");
    let _ = std::fs::remove_file(&path);

    let created = config::load_or_default(&path).expect("create config");
    assert_eq!(created, Config::default());
    assert!(path.exists());

    let reloaded = config::load_or_default(&path).expect("reload config");
    assert_eq!(reloaded, created);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn partial_config_keeps_defaults() {
    let cfg: Config = toml::from_str(
        r#"
        [electrical]
        line_voltage_v = 690.0

        [hvac]
        category = "Cat III"
        "#,
    )
    .expect("partial config");
    assert_close(cfg.electrical.line_voltage_v, 690.0, 1e-12);
    assert_close(cfg.electrical.power_factor, 0.9, 1e-12);
    assert_eq!(cfg.hvac.category, VentilationCategory::CatIII);
    assert!(cfg.load_reference_data().is_ok());

    let options = cfg.summary_options();
    assert_close(options.feeder.line_voltage_v, 690.0, 1e-12);
    assert_close(options.diversities.lifts, 0.6, 1e-12);
}
