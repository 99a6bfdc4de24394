//! CLI 명령 실행
//!
//! 각 명령은 하나의 데이터베이스 연결 위에서 서비스를 순서대로 호출합니다.
//! 어느 단계든 실패하면 이후 단계는 실행하지 않고 에러를 반환합니다.

use std::sync::Arc;

use log::info;

use crate::cli::{Cli, Command};
use crate::config::{DatabaseConfig, Environment, SeedConfig};
use crate::db::Database;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::services::schema::{SchemaReport, SchemaService};
use crate::services::seed::{SeedReport, SeedService};
use crate::services::verify::{IntegrityReport, IntegrityService};
use crate::utils::display_terminal::{
    print_integrity_summary, print_schema_summary, print_seed_summary, print_step_complete, print_step_start,
};

/// 파싱된 CLI 명령을 실행합니다.
pub async fn run_command(cli: Cli) -> AppResult<()> {
    let config = DatabaseConfig::from_env()?.with_overrides(cli.uri, cli.database)?;
    let environment = Environment::current();
    info!("🔧 환경: {}, 데이터베이스: {}", environment.as_str(), config.database_name);

    let database = Arc::new(Database::connect(&config).await?);

    match cli.command {
        Command::Schema => schema(database).await.map(|_| ()),
        Command::Seed(args) => seed(database, environment, &args.into()).await.map(|_| ()),
        Command::Verify { json } => verify(database, json).await.map(|_| ()),
        Command::Setup(args) => setup(database, environment, &args.into()).await,
    }
}

pub async fn schema(database: Arc<Database>) -> AppResult<SchemaReport> {
    let report = SchemaService::new(database).define_all().await?;
    print_schema_summary(&report);
    Ok(report)
}

pub async fn seed(database: Arc<Database>, environment: Environment, options: &SeedConfig) -> AppResult<SeedReport> {
    let report = SeedService::new(database, environment).run(options).await?;
    print_seed_summary(&report);
    Ok(report)
}

/// 무결성 검사를 실행하고, 위반이 있으면 `ValidationError`를 반환합니다.
pub async fn verify(database: Arc<Database>, json: bool) -> AppResult<IntegrityReport> {
    let report = IntegrityService::new(database).run().await?;

    if json {
        let output = serde_json::to_string_pretty(&report).context("failed to encode integrity report")?;
        println!("{}", output);
    } else {
        print_integrity_summary(&report);
    }

    if !report.is_clean() {
        return Err(AppError::ValidationError(format!(
            "{} integrity violation(s) found",
            report.violations.len()
        )));
    }
    Ok(report)
}

pub async fn setup(database: Arc<Database>, environment: Environment, options: &SeedConfig) -> AppResult<()> {
    print_step_start(1, "Defining validated collections");
    let schema_report = schema(database.clone()).await?;
    print_step_complete(1, "Collections defined", schema_report.collections.len());

    print_step_start(2, "Seeding fixtures");
    let seed_report = seed(database.clone(), environment, options).await?;
    print_step_complete(2, "Fixtures seeded", seed_report.total());

    print_step_start(3, "Verifying integrity");
    let integrity_report = verify(database, false).await?;
    print_step_complete(3, "Integrity verified", integrity_report.counts.values().sum());

    Ok(())
}
