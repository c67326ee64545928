//! 프로젝트 수준 집계.
//! 면적/용도/재실인원으로 파생값(재실인원, 지붕면적, 기계실/샤프트)을 만들고
//! 각 추정기를 실행해 요약과 보고서 묶음을 만든다.

pub mod context;
pub mod summary;

pub use context::*;
pub use summary::*;
