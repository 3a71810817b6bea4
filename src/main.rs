use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cold_room_toolbox::app::{self, Cli};

/// 프로그램의 엔트리 포인트. 로그를 설정한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

// 보고서는 stdout, 로그는 stderr로 분리한다.
fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
