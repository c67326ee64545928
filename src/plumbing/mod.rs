//! 급수/급탕 개략 산정 모듈 모음.
//! 위생기구 유량 합산, 유속 기준 관경, 재실인원 기반 기구 수 산정, 급탕 에너지로 구성한다.
//! DIN 1988-300 / EN 806-3 상세 설계를 대신하지 않는다.

pub mod dhw;
pub mod fixtures;
pub mod pipe_sizing;

pub use dhw::*;
pub use fixtures::*;
pub use pipe_sizing::*;

use crate::advisory::Advisory;

/// 급수 모듈에 항상 붙는 권고.
pub fn plumbing_advisories() -> Vec<Advisory> {
    vec![
        Advisory::warning(
            "단순화된 방법입니다. 최종 사이징은 DIN 1988-300 및 EN 806-3 (DVGW 요구사항 포함)을 따르세요.",
        ),
        Advisory::info("건물 내 배관 유속은 보통 제한됩니다 (참고값 2 m/s)."),
    ]
}
