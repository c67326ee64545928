use clap::Parser;
use log::LevelFilter;
use mep_presizing_toolbox::{app, config, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택된 계산을 실행한다.
fn main() {
    let cli = Cli::parse();
    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load_or_default(&cli.config)?;
    app::run(&cli.command, &cfg)?;
    Ok(())
}
