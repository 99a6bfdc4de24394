//! 시드된 데이터셋의 무결성 검사
//!
//! 검증기는 타입 형태만 강제하므로, 컬렉션 간 참조와 순서 규칙은
//! 여기서 읽어 온 스냅샷을 대상으로 확인합니다. 위반 사항은 모두 수집합니다.

use std::collections::{HashMap, HashSet};

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::domain::entities::achievements::Achievement;
use crate::domain::entities::catalog::{PremadeComment, Sign};
use crate::domain::entities::collections;
use crate::domain::entities::courses::Course;
use crate::domain::entities::enrollments::EnrolledCourse;
use crate::domain::entities::forums::ForumPost;
use crate::domain::entities::news::NewsPost;
use crate::domain::entities::statistics::TeacherStatistics;
use crate::domain::entities::users::User;

/// 시드 컬렉션 전체를 읽어 온 결과
#[derive(Debug, Clone, Default)]
pub struct DatasetSnapshot {
    pub users: Vec<User>,
    pub achievements: Vec<Achievement>,
    pub news: Vec<NewsPost>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<EnrolledCourse>,
    pub forums: Vec<ForumPost>,
    pub teacher_statistics: Vec<TeacherStatistics>,
    pub premade_comments: Vec<PremadeComment>,
    pub signs: Vec<Sign>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    DuplicateFirebaseUid,
    DanglingReference,
    LessonOrder,
    ForeignLesson,
    AchievementCount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    pub detail: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    /// 컬렉션별 문서 수
    pub counts: HashMap<String, usize>,
    pub violations: Vec<Violation>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    fn push(&mut self, kind: ViolationKind, collection: &str, document: Option<ObjectId>, detail: String) {
        self.violations.push(Violation {
            kind,
            collection: collection.to_string(),
            document: document.map(|id| id.to_hex()),
            detail,
        });
    }
}

fn ids<'a, I>(ids: I) -> HashSet<ObjectId>
where
    I: IntoIterator<Item = &'a Option<ObjectId>>,
{
    ids.into_iter().flatten().copied().collect()
}

struct References<'a> {
    users: HashSet<ObjectId>,
    achievements: HashSet<ObjectId>,
    courses: HashSet<ObjectId>,
    premade_comments: HashSet<ObjectId>,
    signs: HashSet<ObjectId>,
    lessons: HashSet<ObjectId>,
    report: &'a mut IntegrityReport,
}

impl References<'_> {
    fn check<'i>(
        &mut self,
        collection: &str,
        document: Option<ObjectId>,
        field: &str,
        target: &str,
        refs: impl IntoIterator<Item = &'i ObjectId>,
    ) {
        let known = match target {
            collections::USERS => &self.users,
            collections::ACHIEVEMENTS => &self.achievements,
            collections::COURSES => &self.courses,
            collections::PREMADE_COMMENTS => &self.premade_comments,
            collections::SIGNS => &self.signs,
            _ => &self.lessons,
        };
        let dangling: Vec<String> = refs
            .into_iter()
            .filter(|id| !known.contains(*id))
            .map(|id| id.to_hex())
            .collect();

        for id in dangling {
            self.report.push(
                ViolationKind::DanglingReference,
                collection,
                document,
                format!("{} → {} {} does not exist", field, target, id),
            );
        }
    }
}

/// 스냅샷의 무결성을 검사합니다.
///
/// - `firebaseUid` 고유성
/// - 모든 참조 필드가 존재하는 문서를 가리키는지
/// - 강좌 레슨 순서가 1..=n 인지
/// - 수강 기록의 완료 레슨이 해당 강좌에 속하는지
/// - 업적 수가 `expected_achievements`와 같은지
pub fn verify(snapshot: &DatasetSnapshot, expected_achievements: usize) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    for (collection, count) in [
        (collections::USERS, snapshot.users.len()),
        (collections::ACHIEVEMENTS, snapshot.achievements.len()),
        (collections::NEWS, snapshot.news.len()),
        (collections::COURSES, snapshot.courses.len()),
        (collections::ENROLLED_COURSES, snapshot.enrollments.len()),
        (collections::FORUMS, snapshot.forums.len()),
        (collections::TEACHER_STATISTICS, snapshot.teacher_statistics.len()),
        (collections::PREMADE_COMMENTS, snapshot.premade_comments.len()),
        (collections::SIGNS, snapshot.signs.len()),
    ] {
        report.counts.insert(collection.to_string(), count);
    }

    let mut seen_uids: HashMap<&str, ObjectId> = HashMap::new();
    for user in &snapshot.users {
        if let Some(previous) = user.id.and_then(|id| seen_uids.insert(&user.firebase_uid, id)) {
            report.push(
                ViolationKind::DuplicateFirebaseUid,
                collections::USERS,
                user.id,
                format!("firebaseUid '{}' already used by {}", user.firebase_uid, previous),
            );
        }
    }

    if snapshot.achievements.len() != expected_achievements {
        report.push(
            ViolationKind::AchievementCount,
            collections::ACHIEVEMENTS,
            None,
            format!("expected {} achievements, found {}", expected_achievements, snapshot.achievements.len()),
        );
    }

    let courses_by_id: HashMap<ObjectId, &Course> = snapshot
        .courses
        .iter()
        .filter_map(|course| course.id.map(|id| (id, course)))
        .collect();

    for course in &snapshot.courses {
        if !course.has_sequential_lessons() {
            let orders: Vec<i32> = course.lessons.iter().map(|lesson| lesson.order).collect();
            report.push(
                ViolationKind::LessonOrder,
                collections::COURSES,
                course.id,
                format!("lesson orders of '{}' are {:?}, expected 1..={}", course.name, orders, course.lessons.len()),
            );
        }
    }

    for enrollment in &snapshot.enrollments {
        let Some(course) = courses_by_id.get(&enrollment.course_id) else {
            continue;
        };
        for entry in &enrollment.completed_lessons {
            if !course.has_lesson(&entry.lesson_id) {
                report.push(
                    ViolationKind::ForeignLesson,
                    collections::ENROLLED_COURSES,
                    enrollment.id,
                    format!("completed lesson {} is not part of course '{}'", entry.lesson_id, course.name),
                );
            }
        }
    }

    let mut refs = References {
        users: ids(snapshot.users.iter().map(|u| &u.id)),
        achievements: ids(snapshot.achievements.iter().map(|a| &a.id)),
        courses: courses_by_id.keys().copied().collect(),
        premade_comments: ids(snapshot.premade_comments.iter().map(|p| &p.id)),
        signs: ids(snapshot.signs.iter().map(|s| &s.id)),
        lessons: snapshot
            .courses
            .iter()
            .flat_map(|course| course.lessons.iter().map(|lesson| lesson.id))
            .collect(),
        report: &mut report,
    };

    for user in &snapshot.users {
        let info = &user.information;
        refs.check(collections::USERS, user.id, "followers", collections::USERS, &user.followers);
        refs.check(collections::USERS, user.id, "following", collections::USERS, &user.following);
        refs.check(collections::USERS, user.id, "information.achievements", collections::ACHIEVEMENTS, &info.achievements);
        refs.check(collections::USERS, user.id, "information.myCourses", collections::COURSES, &info.my_courses);
    }

    for achievement in &snapshot.achievements {
        refs.check(
            collections::ACHIEVEMENTS,
            achievement.id,
            "premadeId",
            collections::PREMADE_COMMENTS,
            achievement.premade_id.iter(),
        );
    }

    for post in &snapshot.news {
        refs.check(collections::NEWS, post.id, "userId", collections::USERS, [&post.user_id]);
        refs.check(
            collections::NEWS,
            post.id,
            "comments.userId",
            collections::USERS,
            post.comments.iter().map(|c| &c.user_id),
        );
    }

    for course in &snapshot.courses {
        refs.check(collections::COURSES, course.id, "userId", collections::USERS, [&course.user_id]);
        refs.check(collections::COURSES, course.id, "students", collections::USERS, &course.students);
        refs.check(collections::COURSES, course.id, "lessons.sign", collections::SIGNS, course.sign_refs());
    }

    for enrollment in &snapshot.enrollments {
        refs.check(collections::ENROLLED_COURSES, enrollment.id, "userId", collections::USERS, [&enrollment.user_id]);
        refs.check(
            collections::ENROLLED_COURSES,
            enrollment.id,
            "courseId",
            collections::COURSES,
            [&enrollment.course_id],
        );
    }

    for thread in &snapshot.forums {
        refs.check(collections::FORUMS, thread.id, "lessonId", "lessons", [&thread.lesson_id]);
        refs.check(collections::FORUMS, thread.id, "userId", collections::USERS, [&thread.user_id]);
        refs.check(
            collections::FORUMS,
            thread.id,
            "comments.userId",
            collections::USERS,
            thread.comments.iter().map(|c| &c.user_id),
        );
    }

    for statistics in &snapshot.teacher_statistics {
        refs.check(
            collections::TEACHER_STATISTICS,
            statistics.id,
            "userId",
            collections::USERS,
            [&statistics.user_id],
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::achievements::{LearnerProgress, Milestone, MilestoneKind};
    use crate::domain::fixtures::{self, SignRefs};
    use mongodb::bson::DateTime;

    fn with_id<T>(mut value: T, set: impl FnOnce(&mut T, ObjectId)) -> (ObjectId, T) {
        let id = ObjectId::new();
        set(&mut value, id);
        (id, value)
    }

    /// 시더와 같은 방식으로 ID를 연결한 스냅샷
    fn seeded_snapshot() -> DatasetSnapshot {
        let now = DateTime::now();
        let (premade_id, premade) = with_id(fixtures::premade_comment(), |p, id| p.id = Some(id));
        let signs: Vec<Sign> = fixtures::signs()
            .into_iter()
            .map(|mut sign| {
                sign.id = Some(ObjectId::new());
                sign
            })
            .collect();
        let sign_ids: Vec<ObjectId> = signs.iter().filter_map(|s| s.id).collect();
        let sign_refs = SignRefs::from_ids(&sign_ids).unwrap();

        let (student_id, mut student) = with_id(fixtures::student(now), |u, id| u.id = Some(id));
        let (teacher_id, mut teacher) = with_id(fixtures::teacher(now, student_id), |u, id| u.id = Some(id));
        let (carlos_id, mut carlos) = with_id(fixtures::new_student(now), |u, id| u.id = Some(id));
        student.followers = vec![teacher_id];
        student.following = vec![teacher_id];

        let achievements: Vec<Achievement> = fixtures::achievements(&Milestone::catalog(), premade_id)
            .unwrap()
            .into_iter()
            .map(|mut a| {
                a.id = Some(ObjectId::new());
                a
            })
            .collect();

        let (course_id, mut course) = with_id(
            fixtures::greetings_course(teacher_id, student_id, &sign_refs),
            |c, id| c.id = Some(id),
        );
        course.lessons.push(fixtures::formal_greetings_lesson(&sign_refs, 2));
        course.students.push(carlos_id);
        student.information.my_courses.push(course_id);
        teacher.information.my_courses.push(course_id);
        carlos.information.my_courses.push(course_id);

        let mut enrollment = fixtures::student_enrollment(student_id, &course).unwrap();
        enrollment.id = Some(ObjectId::new());

        let achievement_ids: Vec<ObjectId> = achievements.iter().filter_map(|a| a.id).collect();
        let progress = LearnerProgress::from_enrollments(
            &student.information,
            std::slice::from_ref(&course),
            std::slice::from_ref(&enrollment),
        );
        student.information.achievements = fixtures::awarded_achievements(&Milestone::catalog(), &achievement_ids, &progress)
            .unwrap()
            .into_iter()
            .map(|(_, id)| id)
            .collect();
        let mut carlos_enrollment = EnrolledCourse::start(carlos_id, course_id);
        carlos_enrollment.id = Some(ObjectId::new());

        let mut news = fixtures::lesson_news(student_id, teacher_id).unwrap();
        news.id = Some(ObjectId::new());
        let mut thread = fixtures::lesson_forum_thread(course.lessons[0].id, student_id, teacher_id).unwrap();
        thread.id = Some(ObjectId::new());

        let enrollments = vec![enrollment, carlos_enrollment];
        let mut statistics = TeacherStatistics::derive(teacher_id, std::slice::from_ref(&course), &enrollments);
        statistics.id = Some(ObjectId::new());

        DatasetSnapshot {
            users: vec![student, teacher, carlos],
            achievements,
            news: vec![news],
            courses: vec![course],
            enrollments,
            forums: vec![thread],
            teacher_statistics: vec![statistics],
            premade_comments: vec![premade],
            signs,
        }
    }

    #[test]
    fn test_seeded_dataset_is_clean() {
        let snapshot = seeded_snapshot();
        let report = verify(&snapshot, 26);

        assert!(report.is_clean(), "unexpected violations: {:?}", report.violations);
        assert_eq!(report.counts.get("achievements"), Some(&26));
        assert_eq!(report.counts.get("users"), Some(&3));
    }

    #[test]
    fn test_seeded_course_has_two_ordered_lessons() {
        let snapshot = seeded_snapshot();
        let course = &snapshot.courses[0];
        assert_eq!(course.name, "LESCO Básico - Saludos");
        let orders: Vec<i32> = course.lessons.iter().map(|l| l.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn test_seeded_statistics_are_derived() {
        let snapshot = seeded_snapshot();
        let statistics = &snapshot.teacher_statistics[0];
        assert_eq!(statistics.courses_created, 1);
        assert_eq!(statistics.lessons_created, 2);
        assert_eq!(statistics.total_students, 2);
    }

    #[test]
    fn test_awarded_course_milestones_match_completed_enrollments() {
        let snapshot = seeded_snapshot();
        let catalog = Milestone::catalog();
        let student = &snapshot.users[0];
        let awarded: Vec<Milestone> = student
            .information
            .achievements
            .iter()
            .filter_map(|id| snapshot.achievements.iter().position(|a| a.id == Some(*id)))
            .map(|index| catalog[index])
            .collect();
        let completed = snapshot
            .enrollments
            .iter()
            .filter(|e| e.user_id == student.id.unwrap() && e.is_completed())
            .count();

        assert_eq!(awarded.len(), 10);
        let course_milestones: Vec<i32> = awarded
            .iter()
            .filter(|m| m.kind == MilestoneKind::CompletedCourses)
            .map(|m| m.value)
            .collect();
        assert_eq!(completed, 1);
        assert!(course_milestones.iter().all(|&value| value as usize <= completed));
        assert_eq!(course_milestones, vec![1]);
    }

    #[test]
    fn test_duplicate_firebase_uid_is_reported() {
        let mut snapshot = seeded_snapshot();
        let mut clone = snapshot.users[2].clone();
        clone.id = Some(ObjectId::new());
        snapshot.users.push(clone);

        let report = verify(&snapshot, 26);
        assert_eq!(report.count_of(ViolationKind::DuplicateFirebaseUid), 1);
    }

    #[test]
    fn test_dangling_references_are_collected() {
        let mut snapshot = seeded_snapshot();
        snapshot.users[0].following.push(ObjectId::new());
        snapshot.forums[0].lesson_id = ObjectId::new();
        snapshot.signs.clear();

        let report = verify(&snapshot, 26);
        // following 1개 + lessonId 1개 + 두 레슨의 수어 참조 6개
        assert_eq!(report.count_of(ViolationKind::DanglingReference), 8);
        assert!(report
            .violations
            .iter()
            .any(|v| v.collection == "forums" && v.detail.starts_with("lessonId")));
    }

    #[test]
    fn test_foreign_completed_lesson_is_reported() {
        let mut snapshot = seeded_snapshot();
        snapshot.enrollments[0].completed_lessons[0].lesson_id = ObjectId::new();

        let report = verify(&snapshot, 26);
        assert_eq!(report.count_of(ViolationKind::ForeignLesson), 1);
    }

    #[test]
    fn test_lesson_order_gap_and_achievement_count() {
        let mut snapshot = seeded_snapshot();
        snapshot.courses[0].lessons[1].order = 3;
        snapshot.achievements.pop();

        let report = verify(&snapshot, 26);
        assert_eq!(report.count_of(ViolationKind::LessonOrder), 1);
        assert_eq!(report.count_of(ViolationKind::AchievementCount), 1);
    }

    #[test]
    fn test_report_serializes_kinds_in_snake_case() {
        let mut snapshot = seeded_snapshot();
        snapshot.achievements.clear();
        let report = verify(&snapshot, 26);

        let json = serde_json::to_value(&report).unwrap();
        let kinds: Vec<&str> = json["violations"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v["kind"].as_str())
            .collect();
        assert!(kinds.contains(&"achievement_count"));
    }
}
