//! LEARN 데이터베이스 셋업 도구 메인 애플리케이션
//!
//! 커맨드라인 인자를 파싱하고 선택한 셋업 명령을 실행합니다.

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use learn_setup::cli::{Cli, run_command};

#[tokio::main]
async fn main() {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let cli = Cli::parse_args();
    info!("🚀 LEARN 셋업 시작: {:?}", cli.command);

    if let Err(e) = run_command(cli).await {
        error!("❌ 셋업 실패: {}", e);
        std::process::exit(e.exit_code());
    }

    info!("✅ 셋업 완료");
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod learn_setup setup
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => info!(".env.dev 파일 없음, 환경 변수만 사용: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,mongodb=warn")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,mongodb=warn"));
}
