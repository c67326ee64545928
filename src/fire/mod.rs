//! 방화(Brandschutz) 전문가 검토 필요 여부 판단 보조.
//!
//! 실제 법규 검토기가 아니다. 어떤 조건에서 전문 설계가 필요한지 사유 목록만 정리한다.

use serde::Serialize;
use std::fmt;

use crate::advisory::Advisory;

/// 대면적 기준 [m²]
pub const LARGE_AREA_THRESHOLD_M2: f64 = 5000.0;
/// 고층 기준 지상층 수
pub const HIGH_RISE_STOREYS: u32 = 6;

/// 방화 검토 입력값.
#[derive(Debug, Clone, PartialEq)]
pub struct FireInput {
    /// 건물 용도. 사유 판단에는 쓰지 않고 결과에 그대로 옮긴다
    pub building_use: String,
    /// 연면적 [m²]
    pub gross_area_m2: f64,
    /// 지상층 수
    pub storeys: u32,
    /// 지하 공간 유무
    pub underground: bool,
}

/// 전문가 검토가 필요한 사유.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EscalationReason {
    LargeArea,
    HighRise,
    Underground,
    /// 어떤 기준에도 걸리지 않을 때의 일반 사유
    JurisdictionDependent,
}

impl fmt::Display for EscalationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EscalationReason::LargeArea => "연면적 > 5,000 m² (내부 참고 기준)",
            EscalationReason::HighRise => "고층 건물 (지상 6층 이상, 참고)",
            EscalationReason::Underground => "지하 공간 있음",
            EscalationReason::JurisdictionDependent => {
                "요구사항은 주 건축법(Landesbauordnung), 건물 용도, 방화 개념에 따라 달라집니다."
            }
        };
        f.write_str(s)
    }
}

/// 방화 검토 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FireAssessment {
    pub building_use: String,
    pub needs_specialist: bool,
    pub reasons: Vec<EscalationReason>,
    pub advisories: Vec<Advisory>,
}

/// 방화 전문가 검토 필요 여부와 사유를 정리한다.
///
/// 방화는 항상 이 도구의 범위 밖이므로 `needs_specialist`는 언제나 `true`이고,
/// 임계값은 사유 목록에만 영향을 준다.
pub fn fire_predim(input: &FireInput) -> FireAssessment {
    let mut reasons = Vec::new();
    if input.gross_area_m2 > LARGE_AREA_THRESHOLD_M2 {
        reasons.push(EscalationReason::LargeArea);
    }
    if input.storeys >= HIGH_RISE_STOREYS {
        reasons.push(EscalationReason::HighRise);
    }
    if input.underground {
        reasons.push(EscalationReason::Underground);
    }
    if reasons.is_empty() {
        reasons.push(EscalationReason::JurisdictionDependent);
    }

    let advisories = vec![
        Advisory::danger(
            "방화(Brandschutz)는 거의 항상 별도의 방화 개념과 설계가 필요합니다. 이 모듈은 참고용입니다.",
        ),
        Advisory::info(
            "설비: 경우에 따라 DIN 14675 (화재감지/경보설비), DIN EN 12845 / VdS CEA 4001 (스프링클러)이 관련될 수 있습니다.",
        ),
    ];

    FireAssessment {
        building_use: input.building_use.clone(),
        needs_specialist: true,
        reasons,
        advisories,
    }
}
