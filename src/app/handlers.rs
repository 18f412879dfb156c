//! `GET /recommend?skills=a,b,c`

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::app::state::AppState;
use crate::core::{Aggregator, RecommendationResult};

pub const SKILLS_PARAM: &str = "skills";
pub const NO_SKILLS_MESSAGE: &str = "No skills provided";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug)]
pub enum RecommendResponse {
    Recommendations(RecommendationResult),
    MissingSkills,
}

impl RecommendResponse {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecommendResponse::Recommendations(_) => StatusCode::OK,
            RecommendResponse::MissingSkills => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for RecommendResponse {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            RecommendResponse::Recommendations(result) => (status, Json(result)).into_response(),
            RecommendResponse::MissingSkills => (
                status,
                Json(ErrorBody {
                    error: NO_SKILLS_MESSAGE,
                }),
            )
                .into_response(),
        }
    }
}

/// Resolves the `skills` parameter and runs the aggregator over its
/// comma-separated pieces. The first `skills` pair wins when repeated.
/// Pieces are passed through untrimmed.
pub async fn handle_recommend(
    aggregator: &Aggregator,
    params: &[(String, String)],
) -> RecommendResponse {
    let skills = params
        .iter()
        .find(|(key, _)| key == SKILLS_PARAM)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty());

    let Some(skills) = skills else {
        tracing::debug!("Rejecting request without skills");
        return RecommendResponse::MissingSkills;
    };

    let raw_skills: Vec<&str> = skills.split(',').collect();
    tracing::info!("Recommending courses for {} skills", raw_skills.len());

    let result = aggregator.recommend_for_skills(raw_skills.as_slice()).await;
    tracing::info!(
        "Returning {} recommended courses",
        result.recommended_courses.len()
    );

    RecommendResponse::Recommendations(result)
}

pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> RecommendResponse {
    handle_recommend(&state.aggregator, &params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregator::tests::FakeCatalog;
    use crate::core::DEFAULT_RESULT_LIMIT;
    use std::sync::Arc;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn aggregator_with(catalog: Arc<FakeCatalog>) -> Aggregator {
        Aggregator::new(catalog, DEFAULT_RESULT_LIMIT)
    }

    #[tokio::test]
    async fn test_missing_skills_is_bad_request() {
        let catalog = Arc::new(FakeCatalog::default());
        let aggregator = aggregator_with(catalog.clone());

        let response = handle_recommend(&aggregator, &params(&[("topic", "python")])).await;

        assert!(matches!(response, RecommendResponse::MissingSkills));
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(catalog.queries().is_empty());
    }

    #[tokio::test]
    async fn test_empty_skills_is_bad_request() {
        let catalog = Arc::new(FakeCatalog::default());
        let aggregator = aggregator_with(catalog.clone());

        let response = handle_recommend(&aggregator, &params(&[("skills", "")])).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(catalog.queries().is_empty());
    }

    #[tokio::test]
    async fn test_skills_are_split_without_trimming() {
        let catalog = Arc::new(FakeCatalog::default().with("java", &["Java Programming"]));
        let aggregator = aggregator_with(catalog.clone());

        let response = handle_recommend(&aggregator, &params(&[("skills", " java ,,css")])).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let sent: Vec<String> = catalog.queries().into_iter().map(|(q, _)| q).collect();
        assert_eq!(sent, vec!["java", "", "css"]);

        let RecommendResponse::Recommendations(result) = response else {
            panic!("expected recommendations");
        };
        assert_eq!(result.recommended_courses.len(), 1);
    }

    #[tokio::test]
    async fn test_whitespace_only_skills_are_accepted() {
        let catalog = Arc::new(FakeCatalog::default());
        let aggregator = aggregator_with(catalog.clone());

        let response = handle_recommend(&aggregator, &params(&[("skills", "  ")])).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(catalog.queries().len(), 1);
    }

    #[tokio::test]
    async fn test_first_skills_parameter_wins() {
        let catalog = Arc::new(
            FakeCatalog::default()
                .with("rust", &["Rust Fundamentals"])
                .with("go", &["Go Basics"]),
        );
        let aggregator = aggregator_with(catalog.clone());

        let response = handle_recommend(
            &aggregator,
            &params(&[("skills", "rust"), ("skills", "go")]),
        )
        .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(catalog.queries(), vec![("rust".to_string(), 2)]);
    }
}
