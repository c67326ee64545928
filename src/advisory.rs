use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::Table;

/// 권고 메시지의 심각도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 계산 결과에 덧붙는 권고. 수치 결과를 바꾸지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub level: Severity,
    pub text: String,
}

impl Advisory {
    pub fn new(level: Severity, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(Severity::Danger, text)
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.text)
    }
}

/// 권고 목록을 감지 순서 그대로 `Level`/`Alert` 표로 만든다.
pub fn advisories_table(advisories: &[Advisory]) -> Table {
    let mut table = Table::new(&["Level", "Alert"]);
    for a in advisories {
        table.push_row(vec![a.level.as_str().into(), a.text.as_str().into()]);
    }
    table
}

/// 목록 중 가장 높은 심각도. 비어 있으면 `None`.
pub fn highest_severity(advisories: &[Advisory]) -> Option<Severity> {
    advisories.iter().map(|a| a.level).max()
}
