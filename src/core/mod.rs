pub mod aggregator;

pub use crate::domain::model::{CourseRecord, RecommendationResult, SkillOutcome, SkillQuery};
pub use crate::domain::ports::{ConfigProvider, CourseCatalog};
pub use crate::utils::error::Result;
pub use aggregator::{fold_outcomes, Aggregator, DEFAULT_RESULT_LIMIT};
