//! 업적 마일스톤 카탈로그
//!
//! 업적 문서는 트랙(LESCO/LIBRAS)별로 세 종류의 마일스톤에서 만들어집니다.
//!
//! | 종류 | 값 | 이름 | 내용 |
//! |------|----|------|------|
//! | 레벨 | 2, 3, 4, 5 | `¡Nivel N!` | `Subiste a nivel N.` |
//! | 완료 강좌 수 | 1, 3, 5, 10 | `N cursos completados` | `Completaste N cursos.` |
//! | 업적 수 | 5, 10, 15, 20, 25 | `N logros conseguidos` | `Conseguiste N logros.` |
//!
//! 트랙당 13개, 전체 26개입니다.

use std::collections::HashMap;

use crate::domain::entities::courses::Course;
use crate::domain::entities::enrollments::EnrolledCourse;
use crate::domain::entities::flags::SignLanguage;
use crate::domain::entities::users::UserInformation;

/// 마일스톤 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MilestoneKind {
    Level,
    CompletedCourses,
    AchievementCount,
}

/// 하나의 업적 마일스톤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub language: SignLanguage,
    pub value: i32,
}

impl Milestone {
    pub const LEVELS: &'static [i32] = &[2, 3, 4, 5];
    pub const COMPLETED_COURSES: &'static [i32] = &[1, 3, 5, 10];
    pub const ACHIEVEMENT_COUNTS: &'static [i32] = &[5, 10, 15, 20, 25];

    /// 전체 마일스톤 카탈로그 (LESCO 먼저, 이어서 LIBRAS)
    pub fn catalog() -> Vec<Milestone> {
        let mut catalog = Vec::new();
        for language in SignLanguage::ALL {
            let kinds = [
                (MilestoneKind::Level, Self::LEVELS),
                (MilestoneKind::CompletedCourses, Self::COMPLETED_COURSES),
                (MilestoneKind::AchievementCount, Self::ACHIEVEMENT_COUNTS),
            ];
            for (kind, values) in kinds {
                catalog.extend(values.iter().map(|&value| Milestone { kind, language, value }));
            }
        }
        catalog
    }

    pub fn name(&self) -> String {
        match self.kind {
            MilestoneKind::Level => format!("¡Nivel {}!", self.value),
            MilestoneKind::CompletedCourses => format!("{} cursos completados", self.value),
            MilestoneKind::AchievementCount => format!("{} logros conseguidos", self.value),
        }
    }

    pub fn content(&self) -> String {
        match self.kind {
            MilestoneKind::Level => format!("Subiste a nivel {}.", self.value),
            MilestoneKind::CompletedCourses => format!("Completaste {} cursos.", self.value),
            MilestoneKind::AchievementCount => format!("Conseguiste {} logros.", self.value),
        }
    }
}

/// 마일스톤 달성 여부 판단에 필요한 학습자 진행 상황
#[derive(Debug, Clone, Default)]
pub struct LearnerProgress {
    pub levels: HashMap<SignLanguage, i32>,
    pub completed_courses: HashMap<SignLanguage, i32>,
}

impl LearnerProgress {
    /// 사용자 학습 정보와 트랙별 완료 강좌 수로 진행 상황을 구성합니다.
    pub fn from_information(information: &UserInformation, completed_courses: &[(SignLanguage, i32)]) -> Self {
        Self {
            levels: SignLanguage::ALL
                .iter()
                .map(|&language| (language, information.level(language)))
                .collect(),
            completed_courses: completed_courses.iter().copied().collect(),
        }
    }

    /// 학습자의 수강 기록 중 완료된 것을 강좌 트랙별로 세어 진행 상황을 구성합니다.
    ///
    /// `courses`에 없는 강좌의 수강 기록은 세지 않습니다.
    pub fn from_enrollments(information: &UserInformation, courses: &[Course], enrollments: &[EnrolledCourse]) -> Self {
        let mut progress = Self::from_information(information, &[]);
        for enrollment in enrollments.iter().filter(|e| e.is_completed()) {
            if let Some(course) = courses.iter().find(|c| c.id == Some(enrollment.course_id)) {
                *progress.completed_courses.entry(course.language).or_default() += 1;
            }
        }
        progress
    }

    fn level(&self, language: SignLanguage) -> i32 {
        self.levels.get(&language).copied().unwrap_or(0)
    }

    fn completed(&self, language: SignLanguage) -> i32 {
        self.completed_courses.get(&language).copied().unwrap_or(0)
    }
}

/// 진행 상황으로 달성한 마일스톤의 카탈로그 인덱스를 반환합니다.
///
/// 레벨과 완료 강좌 마일스톤을 먼저 판정하고, 업적 수 마일스톤은
/// 같은 트랙에서 이미 달성한 마일스톤 개수를 기준으로 판정합니다.
pub fn reached_milestones(catalog: &[Milestone], progress: &LearnerProgress) -> Vec<usize> {
    let mut reached: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, m)| match m.kind {
            MilestoneKind::Level => progress.level(m.language) >= m.value,
            MilestoneKind::CompletedCourses => progress.completed(m.language) >= m.value,
            MilestoneKind::AchievementCount => false,
        })
        .map(|(index, _)| index)
        .collect();

    let mut earned: HashMap<SignLanguage, i32> = HashMap::new();
    for &index in &reached {
        *earned.entry(catalog[index].language).or_default() += 1;
    }

    reached.extend(
        catalog
            .iter()
            .enumerate()
            .filter(|(_, m)| {
                m.kind == MilestoneKind::AchievementCount
                    && earned.get(&m.language).copied().unwrap_or(0) >= m.value
            })
            .map(|(index, _)| index),
    );
    reached.sort_unstable();
    reached
}
