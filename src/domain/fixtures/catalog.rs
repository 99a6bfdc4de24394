//! 축하 메시지, 수어 목록, 업적 카탈로그 픽스처

use mongodb::bson::oid::ObjectId;

use super::dates;
use crate::domain::entities::achievements::{Achievement, LearnerProgress, Milestone, reached_milestones};
use crate::domain::entities::catalog::{PremadeComment, Sign};
use crate::domain::entities::flags::SignLanguage;
use crate::errors::{AppError, AppResult};
use crate::utils::date_utils::days_after;

pub fn premade_comment() -> PremadeComment {
    PremadeComment {
        id: None,
        content: "¡Felicitaciones por tu increíble progreso!".to_string(),
    }
}

/// 레슨에서 참조하는 LESCO 수어 단어 (삽입 순서)
pub const SIGN_WORDS: [&str; 4] = ["Hola", "Buenos días", "Buenas tardes", "Mucho gusto"];

pub fn signs() -> Vec<Sign> {
    SIGN_WORDS
        .iter()
        .map(|word| Sign {
            id: None,
            word: word.to_string(),
            language: SignLanguage::Lesco,
        })
        .collect()
}

/// 삽입된 수어 ID
#[derive(Debug, Clone, Copy)]
pub struct SignRefs {
    pub hola: ObjectId,
    pub buenos_dias: ObjectId,
    pub buenas_tardes: ObjectId,
    pub mucho_gusto: ObjectId,
}

impl SignRefs {
    /// [`SIGN_WORDS`] 순서로 삽입된 ID 목록에서 생성합니다.
    pub fn from_ids(ids: &[ObjectId]) -> AppResult<Self> {
        match ids {
            [hola, buenos_dias, buenas_tardes, mucho_gusto] => Ok(Self {
                hola: *hola,
                buenos_dias: *buenos_dias,
                buenas_tardes: *buenas_tardes,
                mucho_gusto: *mucho_gusto,
            }),
            _ => Err(AppError::InternalError(format!(
                "expected {} sign ids, got {}",
                SIGN_WORDS.len(),
                ids.len()
            ))),
        }
    }
}

/// 마일스톤 카탈로그 순서대로 업적 문서를 만듭니다.
///
/// 날짜는 [`dates::ACHIEVEMENTS_START`]부터 하루씩 증가합니다.
pub fn achievements(catalog: &[Milestone], premade_id: ObjectId) -> AppResult<Vec<Achievement>> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, milestone)| {
            Ok(Achievement {
                id: None,
                name: milestone.name(),
                language: milestone.language,
                content: milestone.content(),
                date: days_after(dates::ACHIEVEMENTS_START, index as i64)?,
                premade_id: Some(premade_id),
            })
        })
        .collect()
}

/// 진행 상황으로 달성한 마일스톤과 그에 해당하는 삽입된 업적 ID
///
/// `achievement_ids`는 `catalog` 순서로 삽입된 업적의 ID입니다.
pub fn awarded_achievements(
    catalog: &[Milestone],
    achievement_ids: &[ObjectId],
    progress: &LearnerProgress,
) -> AppResult<Vec<(Milestone, ObjectId)>> {
    reached_milestones(catalog, progress)
        .into_iter()
        .map(|index| {
            achievement_ids
                .get(index)
                .map(|&id| (catalog[index], id))
                .ok_or_else(|| AppError::InternalError(format!("no inserted achievement for milestone #{}", index)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_achievement_catalog_references_premade_comment() {
        let premade_id = ObjectId::new();
        let achievements = achievements(&Milestone::catalog(), premade_id).unwrap();

        assert_eq!(achievements.len(), 26);
        assert!(achievements.iter().all(|a| a.premade_id == Some(premade_id)));
        assert!(achievements.iter().all(|a| a.validate().is_ok()));
        assert_eq!(achievements[0].name, "¡Nivel 2!");
        assert_eq!(achievements[0].language, SignLanguage::Lesco);
        assert_eq!(achievements[13].language, SignLanguage::Libras);
    }

    #[test]
    fn test_sign_refs_need_every_word() {
        let ids: Vec<ObjectId> = (0..SIGN_WORDS.len()).map(|_| ObjectId::new()).collect();
        let refs = SignRefs::from_ids(&ids).unwrap();
        assert_eq!(refs.hola, ids[0]);
        assert_eq!(refs.mucho_gusto, ids[3]);

        assert!(SignRefs::from_ids(&ids[..2]).is_err());
    }

    #[test]
    fn test_signs_follow_word_order() {
        let words: Vec<_> = signs().into_iter().map(|s| s.word).collect();
        assert_eq!(words, SIGN_WORDS.to_vec());
    }
}
