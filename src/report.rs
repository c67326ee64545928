//! 외부 보고서 렌더러(PDF 등)에 넘기는 평범한 데이터 묶음.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::table::Table;

/// 제목이 붙은 표 하나.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub table: Table,
}

impl ReportSection {
    pub fn new(title: impl Into<String>, table: Table) -> Self {
        Self {
            title: title.into(),
            table,
        }
    }
}

/// 요약, 표 목록, 인용 출처 id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportBundle {
    pub source_ids: Vec<String>,
    pub executive: BTreeMap<String, String>,
    pub sections: Vec<ReportSection>,
}

impl ReportBundle {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// 표마다 (파일명용 이름, CSV) 쌍을 만든다.
    pub fn csv_files(&self) -> Vec<(String, String)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| (format!("{:02}_{}.csv", i + 1, slug(&s.title)), s.table.to_csv()))
            .collect()
    }
}

fn slug(title: &str) -> String {
    let mut out = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::slug;

    #[test]
    fn slug_collapses_symbols() {
        assert_eq!(slug("Plumbing peak flow"), "plumbing_peak_flow");
        assert_eq!(slug("Rain (L/s·ha)"), "rain_l_s_ha");
    }
}
