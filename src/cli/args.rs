//! CLI argument definitions using clap
//!
//! Commands:
//! - learn_setup schema
//! - learn_setup seed [--reset] [--force]
//! - learn_setup verify [--json]
//! - learn_setup setup [--reset] [--force]

use clap::{Args, Parser, Subcommand};

use crate::config::SeedConfig;

/// LEARN 데이터베이스 셋업 도구
#[derive(Parser, Debug)]
#[command(name = "learn_setup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// MongoDB 연결 URI (MONGODB_URI 대신 사용)
    #[arg(long, global = true)]
    pub uri: Option<String>,

    /// 데이터베이스 이름 (DATABASE_NAME 대신 사용)
    #[arg(long, global = true)]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// 검증기가 있는 7개 컬렉션과 firebaseUid 고유 인덱스를 생성
    Schema,

    /// 샘플 픽스처 삽입
    Seed(SeedArgs),

    /// 시드된 데이터의 참조 무결성 검사
    Verify {
        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// schema, seed, verify를 순서대로 실행
    Setup(SeedArgs),
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct SeedArgs {
    /// 시드 전에 시드 컬렉션의 문서를 모두 삭제
    #[arg(long)]
    pub reset: bool,

    /// 프로덕션 환경에서도 --reset 허용
    #[arg(long)]
    pub force: bool,
}

impl From<SeedArgs> for SeedConfig {
    fn from(args: SeedArgs) -> Self {
        SeedConfig {
            reset: args.reset,
            force: args.force,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_flags() {
        let cli = Cli::try_parse_from(["learn_setup", "seed", "--reset", "--force"]).unwrap();
        assert_eq!(cli.command, Command::Seed(SeedArgs { reset: true, force: true }));

        let config: SeedConfig = SeedArgs { reset: true, force: false }.into();
        assert!(config.reset && !config.force);
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from(["learn_setup", "verify", "--json", "--database", "LEARN_TEST"]).unwrap();
        assert_eq!(cli.command, Command::Verify { json: true });
        assert_eq!(cli.database.as_deref(), Some("LEARN_TEST"));
        assert!(cli.uri.is_none());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["learn_setup"]).is_err());
    }
}
