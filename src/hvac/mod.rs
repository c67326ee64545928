//! 공조 개략 산정 모듈 모음.
//! 기후 보정계수, 외기 도입량(인원+면적 방식), 냉난방 용량 추정으로 구성한다.

pub mod capacity;
pub mod climate;
pub mod ventilation;

pub use capacity::*;
pub use climate::*;
pub use ventilation::*;
