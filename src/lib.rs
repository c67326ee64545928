//! 건축 설비(MEP) 개략 산정 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 쓸 수 있게 한다.

pub mod advisory;
pub mod app;
pub mod config;
pub mod defaults;
pub mod drainage;
pub mod electrical;
pub mod fire;
pub mod hvac;
pub mod physics;
pub mod plumbing;
pub mod project;
pub mod reference_data;
pub mod report;
pub mod table;
pub mod ui_cli;
