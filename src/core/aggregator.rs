use crate::domain::model::{RecommendationResult, SkillOutcome, SkillQuery};
use crate::domain::ports::CourseCatalog;
use std::sync::Arc;

pub const DEFAULT_RESULT_LIMIT: usize = 2;

/// Runs one catalog search per skill, in order, and concatenates the results.
///
/// A skill whose search fails contributes no records; the remaining skills
/// are still processed. Searches are awaited one at a time.
pub struct Aggregator {
    catalog: Arc<dyn CourseCatalog>,
    result_limit: usize,
}

impl Aggregator {
    pub fn new(catalog: Arc<dyn CourseCatalog>, result_limit: usize) -> Self {
        Self {
            catalog,
            result_limit,
        }
    }

    pub fn result_limit(&self) -> usize {
        self.result_limit
    }

    pub async fn search_skill(&self, raw_skill: &str) -> SkillOutcome {
        let skill = SkillQuery::from_raw(raw_skill);
        let result = self
            .catalog
            .search(skill.as_str(), self.result_limit)
            .await
            .map(|mut records| {
                records.truncate(self.result_limit);
                records
            });

        SkillOutcome { skill, result }
    }

    pub async fn recommend_for_skills<S: AsRef<str>>(&self, skills: &[S]) -> RecommendationResult {
        let mut outcomes = Vec::with_capacity(skills.len());
        for raw_skill in skills {
            outcomes.push(self.search_skill(raw_skill.as_ref()).await);
        }

        fold_outcomes(outcomes)
    }
}

/// 成功的技能依序串接，失敗的技能只記錄在日誌中
pub fn fold_outcomes(outcomes: impl IntoIterator<Item = SkillOutcome>) -> RecommendationResult {
    outcomes
        .into_iter()
        .fold(RecommendationResult::default(), |mut acc, outcome| {
            match outcome.result {
                Ok(records) => {
                    tracing::debug!(
                        "Skill '{}' contributed {} courses",
                        outcome.skill.as_str(),
                        records.len()
                    );
                    acc.recommended_courses.extend(records);
                }
                Err(e) => {
                    tracing::debug!(
                        "Skipping skill '{}' ({} failure): {}",
                        outcome.skill.as_str(),
                        e.kind(),
                        e
                    );
                }
            }
            acc
        })
}
