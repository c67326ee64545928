use log::warn;
use serde::Serialize;

use crate::defaults;
use crate::physics::clamp;
use crate::table::Table;

/// 유량표에 등록된 위생기구.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fixture {
    Washbasin,
    WcCistern,
    Urinal,
    KitchenSink,
    Shower,
}

impl Fixture {
    pub const ALL: [Fixture; 5] = [
        Fixture::Washbasin,
        Fixture::WcCistern,
        Fixture::Urinal,
        Fixture::KitchenSink,
        Fixture::Shower,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Fixture::Washbasin => "Washbasin",
            Fixture::WcCistern => "WC cistern",
            Fixture::Urinal => "Urinal",
            Fixture::KitchenSink => "Kitchen sink",
            Fixture::Shower => "Shower",
        }
    }

    /// 기구별 공칭 유량 [L/s]
    pub fn nominal_flow_lps(&self) -> f64 {
        match self {
            Fixture::Washbasin => 0.07,
            Fixture::WcCistern => 0.13,
            Fixture::Urinal => 0.10,
            Fixture::KitchenSink => 0.10,
            Fixture::Shower => 0.15,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Fixture::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// 기구 이름으로 공칭 유량을 찾는다. 표에 없으면 0.1 L/s.
pub fn fixture_flow_lps(name: &str) -> f64 {
    match Fixture::from_label(name) {
        Some(f) => f.nominal_flow_lps(),
        None => {
            warn!("유량표에 없는 기구 '{name}', {} L/s로 처리합니다.", defaults::FIXTURE_FLOW_LPS);
            defaults::FIXTURE_FLOW_LPS
        }
    }
}

/// 기구 이름과 개수.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureCount {
    pub name: String,
    pub count: u32,
}

impl FixtureCount {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// 기구 유량 합산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakFlow {
    /// 공칭 유량 합 [L/s]
    pub q_sum_lps: f64,
    /// 동시사용률 적용 첨두유량 [L/s]
    pub q_peak_lps: f64,
    /// 제한 후 적용된 동시사용률
    pub simultaneity: f64,
}

/// 기구 유량을 합산하고 동시사용률([0.1, 1.0]로 제한)을 곱해 첨두유량을 구한다.
pub fn peak_flow_lps(fixtures: &[FixtureCount], simultaneity: f64) -> PeakFlow {
    let simultaneity = clamp(simultaneity, 0.1, 1.0);
    let q_sum: f64 = fixtures
        .iter()
        .map(|f| fixture_flow_lps(&f.name) * f64::from(f.count))
        .sum();
    PeakFlow {
        q_sum_lps: q_sum,
        q_peak_lps: q_sum * simultaneity,
        simultaneity,
    }
}

/// 기구 1개당 인원 수. `None`이면 해당 기구를 두지 않는다.
struct PersonsPerFixture {
    washbasin: Option<u32>,
    wc: Option<u32>,
    urinal: Option<u32>,
    kitchen_sink: Option<u32>,
    shower: Option<u32>,
}

fn ratios_for(use_type: &str) -> Option<PersonsPerFixture> {
    let r = match use_type {
        "Office" => PersonsPerFixture {
            washbasin: Some(25),
            wc: Some(25),
            urinal: Some(50),
            kitchen_sink: Some(100),
            shower: Some(200),
        },
        "Retail" => PersonsPerFixture {
            washbasin: Some(30),
            wc: Some(30),
            urinal: Some(60),
            kitchen_sink: Some(150),
            shower: None,
        },
        "Hotel" => PersonsPerFixture {
            washbasin: Some(10),
            wc: Some(10),
            urinal: Some(30),
            kitchen_sink: Some(50),
            shower: Some(10),
        },
        "Residential" => PersonsPerFixture {
            washbasin: Some(3),
            wc: Some(3),
            urinal: None,
            kitchen_sink: Some(3),
            shower: Some(3),
        },
        _ => return None,
    };
    Some(r)
}

fn count_for(persons: u32, per_fixture: Option<u32>) -> u32 {
    match per_fixture {
        Some(n) if n > 0 => persons.div_ceil(n),
        _ => 0,
    }
}

/// 재실인원과 용도로 초기 위생기구 수를 정한다 (각각 올림).
///
/// 인원이 0이거나 알 수 없는 용도이면 모두 0개.
pub fn estimate_fixtures_from_occupancy(use_type: &str, persons: u32) -> Vec<FixtureCount> {
    let ratios = if persons == 0 {
        None
    } else {
        ratios_for(use_type)
    };
    let counts = match ratios {
        Some(r) => [
            count_for(persons, r.washbasin),
            count_for(persons, r.wc),
            count_for(persons, r.urinal),
            count_for(persons, r.kitchen_sink),
            count_for(persons, r.shower),
        ],
        None => [0; 5],
    };
    Fixture::ALL
        .iter()
        .zip(counts)
        .map(|(f, n)| FixtureCount::new(f.label(), n))
        .collect()
}

/// `Fixture`/`Count (estimated)` 표.
pub fn fixtures_table(fixtures: &[FixtureCount]) -> Table {
    let mut t = Table::new(&["Fixture", "Count (estimated)"]);
    for f in fixtures {
        t.push_row(vec![f.name.as_str().into(), f.count.into()]);
    }
    t
}
