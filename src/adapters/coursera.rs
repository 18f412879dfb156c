use crate::domain::model::CourseRecord;
use crate::domain::ports::CourseCatalog;
use crate::utils::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const COURSERA_ENDPOINT: &str = "https://api.coursera.org/api/courses.v1";
pub const COURSERA_PLATFORM: &str = "Coursera";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    elements: Option<Vec<Value>>,
}

fn string_field(element: &Value, key: &str) -> Option<String> {
    element.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// 單筆課程欄位缺漏或型別不符時只會變成 None，不影響同一技能的其他課程
fn course_from_element(element: &Value) -> CourseRecord {
    CourseRecord {
        title: string_field(element, "name"),
        platform: COURSERA_PLATFORM.to_string(),
        id: string_field(element, "id"),
        slug: string_field(element, "slug"),
    }
}

/// Coursera `courses.v1` search endpoint.
#[derive(Debug, Clone)]
pub struct CourseraCatalog {
    endpoint: String,
    client: Client,
}

impl CourseraCatalog {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            endpoint: endpoint.into(),
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CourseCatalog for CourseraCatalog {
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> std::result::Result<Vec<CourseRecord>, SearchError> {
        tracing::debug!("Searching catalog {} for '{}'", self.endpoint, query);

        let limit = limit.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", "search"), ("query", query), ("limit", limit.as_str())])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        // 先讀完整個 body，再解析，傳輸錯誤與解析錯誤分開回報
        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        Ok(parsed
            .elements
            .unwrap_or_default()
            .iter()
            .map(course_from_element)
            .collect())
    }
}
