use crate::config::{Config, ConfigError};
use crate::reference_data::ReferenceDataError;
use crate::ui_cli::{self, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 참조 데이터 로드/검증 오류
    ReferenceData(ReferenceDataError),
    /// 보고서 TOML 직렬화 오류
    Report(toml::ser::Error),
    /// 잘못된 명령행 인자
    InvalidArgument(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::ReferenceData(e) => write!(f, "참조 데이터 오류: {e}"),
            AppError::Report(e) => write!(f, "보고서 직렬화 오류: {e}"),
            AppError::InvalidArgument(msg) => write!(f, "잘못된 인자: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ReferenceDataError> for AppError {
    fn from(value: ReferenceDataError) -> Self {
        AppError::ReferenceData(value)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Report(value)
    }
}

/// 참조 데이터를 로드하고 선택된 하위 명령을 실행한다.
pub fn run(command: &Command, config: &Config) -> Result<(), AppError> {
    let data = config.load_reference_data()?;
    match command {
        Command::Summary(args) => ui_cli::handle_summary(args, config, &data),
        Command::Electrical(args) => ui_cli::handle_electrical(args, config, &data),
        Command::Feeder(args) => ui_cli::handle_feeder(args, config),
        Command::Hvac(args) => ui_cli::handle_hvac(args, config, &data),
        Command::Plumbing(args) => ui_cli::handle_plumbing(args, config),
        Command::Rain(args) => ui_cli::handle_rain(args, config, &data),
        Command::Fire(args) => ui_cli::handle_fire(args),
        Command::Reference => ui_cli::handle_reference(&data),
    }
}
