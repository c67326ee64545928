use clap::{Args, Parser, Subcommand};
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::advisory::{highest_severity, Advisory};
use crate::app::AppError;
use crate::config::Config;
use crate::defaults;
use crate::drainage::{drainage_advisories, estimate_rainwater, wastewater_flow_lps};
use crate::electrical::{
    compute_demand, estimate_electrical_loads, size_feeder, FeederInput, MotorInput, StartMethod,
};
use crate::fire::{fire_predim, FireInput};
use crate::hvac::{
    estimate_hvac_capacities, hvac_advisories, ventilation_flow, HvacCapacityInput,
    VentilationCategory,
};
use crate::physics::kva_from_kw;
use crate::plumbing::{
    dhw_energy_kwh_per_day, estimate_fixtures_from_occupancy, fixtures_table, peak_flow_lps,
    plumbing_advisories, suggest_pipe_diameter_mm, FixtureCount,
};
use crate::project::{estimate_occupancy, Estimate, ProjectContext, ProjectInput, ProjectSummary};
use crate::reference_data::ReferenceData;
use crate::table::{Cell, Table};

/// MEP 개략 산정 CLI.
#[derive(Debug, Parser)]
#[command(name = "mep_presizing_cli")]
#[command(about = "MEP pre-sizing calculator (indicative estimates only)", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로. 없으면 기본값으로 생성한다
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// 디버그 로그 출력
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 프로젝트 전체 개략 산정
    Summary(SummaryArgs),
    /// 접속부하와 수용전력
    Electrical(SiteArgs),
    /// 간선 단면 선정
    Feeder(FeederArgs),
    /// 냉난방 용량과 외기량
    Hvac(HvacArgs),
    /// 위생기구, 순간최대유량, 급탕 에너지
    Plumbing(PlumbingArgs),
    /// 지붕 우수 유량
    Rain(RainArgs),
    /// 방화 전문가 검토 필요 여부
    Fire(FireArgs),
    /// 참조 데이터 목록
    Reference,
}

/// 도시/용도/면적 공통 인자.
#[derive(Debug, Clone, Args)]
pub struct SiteArgs {
    #[arg(long, default_value = defaults::CUSTOM_CITY)]
    pub city: String,
    #[arg(long = "use", default_value = "Office")]
    pub use_type: String,
    /// 지상층 면적 [m²]
    #[arg(long, default_value_t = 10_000.0)]
    pub area: f64,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// 프로젝트 입력 TOML. 지정하면 아래 인자를 무시한다
    #[arg(long)]
    pub project: Option<PathBuf>,
    #[command(flatten)]
    pub site: SiteArgs,
    /// 지하층 면적 [m²]
    #[arg(long, default_value_t = 0.0)]
    pub area_below: f64,
    #[arg(long, default_value_t = 8)]
    pub floors_above: u32,
    #[arg(long, default_value_t = 0)]
    pub floors_below: u32,
    /// 실내공기질 등급 (I, II, III)
    #[arg(long)]
    pub category: Option<String>,
    /// 재실인원 수동 지정
    #[arg(long)]
    pub persons: Option<u32>,
    /// 지붕 면적 수동 지정 [m²]
    #[arg(long)]
    pub roof_area: Option<f64>,
    /// 보고서 묶음을 TOML로 출력
    #[arg(long)]
    pub toml: bool,
    /// 모든 표를 CSV로 저장할 디렉터리
    #[arg(long)]
    pub csv_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FeederArgs {
    /// 수용전력 [kW]
    #[arg(long)]
    pub kw: f64,
    #[arg(long)]
    pub length: Option<f64>,
    #[arg(long)]
    pub voltage: Option<f64>,
    #[arg(long)]
    pub pf: Option<f64>,
    #[arg(long)]
    pub eff: Option<f64>,
    /// 허용 전압강하 [%]
    #[arg(long)]
    pub max_vdrop: Option<f64>,
    /// 함께 검토할 최대 전동기 [kW]
    #[arg(long)]
    pub motor_kw: Option<f64>,
    /// 기동 방식 (DOL, Star-delta, Soft-starter, VFD)
    #[arg(long, default_value = "DOL")]
    pub start: String,
}

#[derive(Debug, Args)]
pub struct HvacArgs {
    #[command(flatten)]
    pub site: SiteArgs,
    #[arg(long)]
    pub persons: Option<u32>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub diversity: Option<f64>,
}

#[derive(Debug, Args)]
pub struct PlumbingArgs {
    #[arg(long = "use", default_value = "Office")]
    pub use_type: String,
    #[arg(long)]
    pub persons: u32,
    /// 기구 수 직접 지정 (반복 가능), 예: --fixture "Washbasin=12"
    #[arg(long = "fixture", value_name = "NAME=COUNT")]
    pub fixtures: Vec<String>,
    #[arg(long)]
    pub simultaneity: Option<f64>,
    /// 1인 1일 급탕량 [L]
    #[arg(long)]
    pub dhw_liters: Option<f64>,
}

#[derive(Debug, Args)]
pub struct RainArgs {
    /// 지붕 면적 [m²]
    #[arg(long)]
    pub roof_area: f64,
    #[arg(long, default_value = defaults::CUSTOM_CITY)]
    pub city: String,
    /// 강우강도 [L/(s·ha)]. 지정하면 도시 값을 무시한다
    #[arg(long)]
    pub intensity: Option<f64>,
    #[arg(long)]
    pub runoff: Option<f64>,
}

#[derive(Debug, Args)]
pub struct FireArgs {
    #[arg(long = "use", default_value = "Office")]
    pub use_type: String,
    /// 연면적 [m²]
    #[arg(long)]
    pub area: f64,
    #[arg(long)]
    pub storeys: u32,
    #[arg(long)]
    pub underground: bool,
}

/// `NAME=COUNT` 형식의 기구 지정값을 해석한다.
pub fn parse_fixture_arg(arg: &str) -> Result<FixtureCount, AppError> {
    let (name, count) = arg
        .split_once('=')
        .ok_or_else(|| AppError::InvalidArgument(format!("NAME=COUNT 형식이 아님: {arg}")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidArgument(format!("기구 이름이 비어 있음: {arg}")));
    }
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidArgument(format!("기구 수가 정수가 아님: {arg}")))?;
    Ok(FixtureCount::new(name, count))
}

fn parse_category(label: Option<&str>, fallback: VentilationCategory) -> VentilationCategory {
    label.map_or(fallback, VentilationCategory::from_label_or_default)
}

/// 표를 열 너비에 맞춰 출력한다.
pub fn print_table(title: &str, table: &Table) {
    println!("\n-- {title} --");
    let rendered: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(render_cell).collect())
        .collect();
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &rendered {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(c, *w))
        .collect();
    println!("{}", header.join("  "));
    for row in &rendered {
        let line: Vec<String> = row.iter().zip(&widths).map(|(c, w)| pad(c, *w)).collect();
        println!("{}", line.join("  "));
    }
}

fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Number(v) if v.is_finite() => format!("{v:.2}"),
        other => other.to_string(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let n = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(n)))
}

/// 권고를 심각도와 함께 출력한다.
pub fn print_advisories(advisories: &[Advisory]) {
    if advisories.is_empty() {
        return;
    }
    println!("\n-- 권고 --");
    for a in advisories {
        println!("{a}");
    }
    if let Some(level) = highest_severity(advisories) {
        println!("최고 심각도: {level}");
    }
}

fn print_item(label: &str, value: f64, unit: &str) {
    println!("{label}: {value:.2} {unit}");
}

/// 프로젝트 요약을 처리한다.
pub fn handle_summary(args: &SummaryArgs, cfg: &Config, data: &ReferenceData) -> Result<(), AppError> {
    let input = match &args.project {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str::<ProjectInput>(&content)
                .map_err(|e| AppError::InvalidArgument(format!("프로젝트 입력 파싱 실패: {e}")))?
        }
        None => ProjectInput {
            city: args.site.city.clone(),
            use_type: args.site.use_type.clone(),
            area_above_m2: args.site.area,
            area_below_m2: args.area_below,
            floors_above: args.floors_above,
            floors_below: args.floors_below,
            category: parse_category(args.category.as_deref(), cfg.hvac.category),
            occupancy: Estimate::from(args.persons),
            roof_area_m2: Estimate::from(args.roof_area),
            ..ProjectInput::default()
        },
    };
    let ctx = ProjectContext::resolve(&input, data);
    let summary = ProjectSummary::compute(&ctx, &cfg.summary_options());
    let bundle = summary.report(&ctx);

    if args.toml {
        println!("{}", bundle.to_toml()?);
    } else {
        println!("\n=== MEP Pre-sizing Summary ===");
        for (k, v) in &bundle.executive {
            println!("{k}: {v}");
        }
        for section in &bundle.sections {
            print_table(&section.title, &section.table);
        }
        println!("\n출처:");
        for id in &bundle.source_ids {
            match data.source(id) {
                Some(s) => println!("- [{}] {} ({})", s.id, s.title, s.url),
                None => println!("- [{id}]"),
            }
        }
    }

    if let Some(dir) = &args.csv_dir {
        fs::create_dir_all(dir)?;
        for (name, csv) in bundle.csv_files() {
            fs::write(dir.join(&name), csv)?;
        }
        info!("CSV {}개를 {}에 저장", bundle.sections.len(), dir.display());
    }
    Ok(())
}

/// 접속부하와 수용전력을 처리한다.
pub fn handle_electrical(args: &SiteArgs, cfg: &Config, data: &ReferenceData) -> Result<(), AppError> {
    let profile = data.use_profile_or_default(&args.use_type);
    let city = data.city(&args.city);
    let connected = estimate_electrical_loads(args.area, &profile, city.design_summer_c);
    let demand = compute_demand(&connected.load_items(&cfg.electrical.diversities()));
    print_table("Electrical connected loads", &connected.table());
    print_table("Electrical demand", &demand.breakdown);
    println!();
    print_item("승강기 대수", f64::from(connected.lifts.n_lifts), "");
    print_item("총 수용전력", demand.total_demand_kw, "kW");
    print_item(
        "피상전력",
        kva_from_kw(demand.total_demand_kw, cfg.electrical.power_factor),
        "kVA",
    );
    Ok(())
}

/// 간선 사이징을 처리한다.
pub fn handle_feeder(args: &FeederArgs, cfg: &Config) -> Result<(), AppError> {
    let base = cfg.electrical.feeder_input();
    let method = StartMethod::from_label_or_dol(&args.start);
    let input = FeederInput {
        demand_kw: args.kw,
        line_voltage_v: args.voltage.unwrap_or(base.line_voltage_v),
        power_factor: args.pf.unwrap_or(base.power_factor),
        efficiency: args.eff.unwrap_or(base.efficiency),
        length_m: args.length.unwrap_or(base.length_m),
        max_vdrop_pct: args.max_vdrop.unwrap_or(base.max_vdrop_pct),
        motor: args.motor_kw.map(|kw| MotorInput { kw, method }),
    };
    let result = size_feeder(&input);

    println!("\n-- Feeder sizing --");
    print_item("설계전류", result.design_current_a, "A");
    print_item("선정 단면", result.section_mm2, "mm²");
    print_item("전압강하", result.vdrop_pct, "%");
    print_item("말단 단락전류(근사)", result.ik_end_a, "A");
    if let Some(m) = &result.motor {
        println!("전동기 {:.1} kW, {}", m.motor_kw, m.method.label());
        print_item("정격전류", m.nominal_current_a, "A");
        print_item("기동전류", m.starting_current_a, "A");
    }
    print_advisories(&result.advisories);
    Ok(())
}

/// 냉난방 용량을 처리한다.
pub fn handle_hvac(args: &HvacArgs, cfg: &Config, data: &ReferenceData) -> Result<(), AppError> {
    let profile = data.use_profile_or_default(&args.site.use_type);
    let city = data.city(&args.site.city);
    let persons = args
        .persons
        .unwrap_or_else(|| estimate_occupancy(args.site.area, &profile));
    let category = parse_category(args.category.as_deref(), cfg.hvac.category);
    let input = HvacCapacityInput {
        diversity: args.diversity.unwrap_or(cfg.hvac.diversity),
        ..HvacCapacityInput::from_profile(args.site.area, &profile, &city, persons, category)
    };
    let estimate = estimate_hvac_capacities(&input);
    let vent = ventilation_flow(args.site.area, persons, category);
    print_table("HVAC capacities", &estimate.table());
    print_table("Ventilation", &vent.table());
    print_advisories(&hvac_advisories(&args.site.use_type));
    Ok(())
}

/// 위생설비를 처리한다.
pub fn handle_plumbing(args: &PlumbingArgs, cfg: &Config) -> Result<(), AppError> {
    let fixtures = if args.fixtures.is_empty() {
        estimate_fixtures_from_occupancy(&args.use_type, args.persons)
    } else {
        args.fixtures
            .iter()
            .map(|f| parse_fixture_arg(f))
            .collect::<Result<Vec<_>, _>>()?
    };
    let peak = peak_flow_lps(
        &fixtures,
        args.simultaneity.unwrap_or(cfg.plumbing.simultaneity),
    );
    print_table("Plumbing fixtures", &fixtures_table(&fixtures));
    println!();
    print_item("기구 유량 합", peak.q_sum_lps, "L/s");
    print_item("동시사용률", peak.simultaneity, "");
    print_item("순간최대유량", peak.q_peak_lps, "L/s");
    print_item(
        "급수관 내경",
        suggest_pipe_diameter_mm(peak.q_peak_lps, cfg.plumbing.max_velocity_m_s),
        "mm",
    );
    print_item(
        "오수 유량",
        wastewater_flow_lps(peak.q_sum_lps, defaults::WASTEWATER_K),
        "L/s",
    );
    if let Some(liters) = args.dhw_liters {
        print_item(
            "급탕 에너지",
            dhw_energy_kwh_per_day(
                args.persons,
                liters,
                defaults::DHW_DELTA_T_K,
                defaults::DHW_EFFICIENCY,
            ),
            "kWh/일",
        );
    }
    let mut advisories = plumbing_advisories();
    advisories.extend(drainage_advisories());
    print_advisories(&advisories);
    Ok(())
}

/// 지붕 우수를 처리한다.
pub fn handle_rain(args: &RainArgs, cfg: &Config, data: &ReferenceData) -> Result<(), AppError> {
    let r = match args.intensity {
        Some(r) => r,
        None => data.city(&args.city).rain_r_l_s_ha,
    };
    let estimate = estimate_rainwater(
        args.roof_area,
        r,
        args.runoff.unwrap_or(cfg.drainage.runoff_coefficient),
        cfg.drainage.pipe_velocity_m_s,
    );
    println!("\n-- Rainwater --");
    print_item("강우강도", estimate.r_l_s_ha, "L/(s·ha)");
    print_item("유출계수", estimate.runoff_coeff, "");
    print_item("우수 유량", estimate.q_lps, "L/s");
    print_item("만관 내경", estimate.pipe_d_mm, "mm");
    print_advisories(&drainage_advisories());
    Ok(())
}

/// 방화 검토를 처리한다.
pub fn handle_fire(args: &FireArgs) -> Result<(), AppError> {
    let assessment = fire_predim(&FireInput {
        building_use: args.use_type.clone(),
        gross_area_m2: args.area,
        storeys: args.storeys,
        underground: args.underground,
    });
    println!("\n-- Fire safety escalation --");
    println!("용도: {}", assessment.building_use);
    println!("전문가 검토 필요: {}", if assessment.needs_specialist { "예" } else { "아니오" });
    for r in &assessment.reasons {
        println!("- {r}");
    }
    print_advisories(&assessment.advisories);
    Ok(())
}

/// 참조 데이터 목록을 출력한다.
pub fn handle_reference(data: &ReferenceData) -> Result<(), AppError> {
    let mut profiles = Table::new(&[
        "Use",
        "Lighting (W/m²)",
        "Sockets (W/m²)",
        "Heating (W/m²)",
        "Cooling (W/m²)",
        "m²/person",
    ]);
    for (name, p) in &data.use_profiles {
        profiles.push_row(vec![
            name.as_str().into(),
            p.lighting_w_m2.into(),
            p.sockets_w_m2.into(),
            p.heating_w_m2.into(),
            p.cooling_w_m2.into(),
            p.occupancy_density().into(),
        ]);
    }
    print_table("Use profiles", &profiles);

    let mut cities = Table::new(&["City", "Winter (°C)", "Summer (°C)", "Rain (L/s·ha)"]);
    for (name, c) in &data.city_presets {
        cities.push_row(vec![
            name.as_str().into(),
            c.design_temp_c.into(),
            c.design_summer_c.into(),
            c.rain_r_l_s_ha.into(),
        ]);
    }
    print_table("City presets", &cities);

    let mut starts = Table::new(&["Start method", "Multiplier"]);
    for m in StartMethod::ALL {
        starts.push_row(vec![m.label().into(), m.multiplier().into()]);
    }
    print_table("Motor start methods", &starts);

    let mut sources = Table::new(&["Id", "Kind", "Title"]);
    for s in &data.sources {
        sources.push_row(vec![s.id.as_str().into(), s.kind.as_str().into(), s.title.as_str().into()]);
    }
    print_table("Sources", &sources);
    Ok(())
}
