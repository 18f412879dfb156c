use crate::domain::model::CourseRecord;
use crate::utils::error::SearchError;
use async_trait::async_trait;
use std::time::Duration;

/// Free-text course search against an external catalog.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> std::result::Result<Vec<CourseRecord>, SearchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn catalog_endpoint(&self) -> &str;
    fn result_limit(&self) -> usize;
    fn request_timeout(&self) -> Option<Duration>;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;
}
