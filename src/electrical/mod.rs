//! 저압 전기 개략 산정 모듈 모음.
//! 수용부하 합산, 간선 케이블 선정, 면적 원단위 기반 접속부하 추정으로 구성한다.

pub mod connected_load;
pub mod demand;
pub mod feeder;

pub use connected_load::*;
pub use demand::*;
pub use feeder::*;
