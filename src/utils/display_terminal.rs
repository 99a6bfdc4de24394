//! 터미널 출력 포맷팅 유틸리티
//!
//! 셋업 단계 진행과 각 명령의 결과 요약을 사람이 읽기 쉬운 형태로 출력합니다.
//! 로그와 달리 `RUST_LOG` 설정과 무관하게 항상 표준 출력에 표시됩니다.

use crate::services::schema::SchemaReport;
use crate::services::seed::SeedReport;
use crate::services::verify::IntegrityReport;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  LEARN SETUP                     ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Defining collections
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
///
/// ```text
/// ✓ Step 1: Collections defined (7 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 들여쓰기된 하위 항목을 출력합니다
///
/// ```text
///    ├─ users: created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 스키마 정의 결과
pub fn print_schema_summary(report: &SchemaReport) {
    println!();
    print_boxed_title("🗂️  SCHEMA DEFINED");
    for outcome in &report.collections {
        print_sub_task(&outcome.collection, &outcome.action);
    }
    if let Some(index) = &report.unique_index {
        println!("   🔑 Unique index: {}", index);
    }
    println!("   🆕 Created: {}", report.created());
    println!("   ⏭️  Unchanged: {}", report.unchanged());
    println!();
}

/// 시드 결과를 컬렉션별 문서 수로 요약합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 🌱 SEED COMPLETE                 ║
/// ╚══════════════════════════════════════════════════╝
///    ├─ achievements: 26
///    ├─ users: 3
///    📦 Total Documents: 40
/// ```
pub fn print_seed_summary(report: &SeedReport) {
    println!();
    print_boxed_title("🌱 SEED COMPLETE");
    for (collection, deleted) in &report.cleared {
        print_sub_task(collection, &format!("{} cleared", deleted));
    }
    for (collection, count) in report.counts() {
        print_sub_task(collection, &count.to_string());
    }
    println!("   📦 Total Documents: {}", report.total());
    println!();
}

/// 무결성 검사 결과
pub fn print_integrity_summary(report: &IntegrityReport) {
    println!();
    if report.is_clean() {
        print_boxed_title("✅ INTEGRITY OK");
    } else {
        print_boxed_title("❌ INTEGRITY VIOLATIONS");
    }

    let mut counts: Vec<_> = report.counts.iter().collect();
    counts.sort();
    for (collection, count) in counts {
        print_sub_task(collection, &count.to_string());
    }
    for violation in &report.violations {
        println!("   ✗ [{}] {}", violation.collection, violation.detail);
    }
    println!("   🔍 Violations: {}", report.violations.len());
    println!();
}
