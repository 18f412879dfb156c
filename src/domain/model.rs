use serde::{Deserialize, Serialize};

use crate::utils::error::SearchError;

/// One skill term after trimming. May be empty when the caller sent only whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillQuery(String);

impl SkillQuery {
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub title: Option<String>,
    pub platform: String,
    pub id: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommended_courses: Vec<CourseRecord>,
}

#[derive(Debug)]
pub struct SkillOutcome {
    pub skill: SkillQuery,
    pub result: std::result::Result<Vec<CourseRecord>, SearchError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_query_trims_whitespace() {
        assert_eq!(SkillQuery::from_raw("  java ").as_str(), "java");
        assert_eq!(SkillQuery::from_raw("\tcss\n").as_str(), "css");
        assert_eq!(SkillQuery::from_raw("   ").as_str(), "");
    }

    #[test]
    fn test_course_record_serializes_missing_fields_as_null() {
        let record = CourseRecord {
            title: None,
            platform: "Coursera".to_string(),
            id: Some("abc".to_string()),
            slug: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": null, "platform": "Coursera", "id": "abc", "slug": null})
        );
    }
}
