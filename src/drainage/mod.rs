//! 우수/오수 배수 개략 산정 모듈.

pub mod rainwater;

pub use rainwater::*;

use crate::advisory::Advisory;

/// 배수 모듈에 항상 붙는 권고.
pub fn drainage_advisories() -> Vec<Advisory> {
    vec![
        Advisory::warning(
            "최종 설계: DIN EN 12056 (중력식 배수) 및 DIN 1986-100 (대지 내 배수)을 따르세요.",
        ),
        Advisory::info("강우강도 r은 채택한 방법에 맞는 지역 데이터(KOSTRA/DWD 등)에서 가져와야 합니다."),
    ]
}
