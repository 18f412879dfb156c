pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::CourseraCatalog;
pub use crate::app::{build_router, AppState};
pub use crate::config::{CliConfig, TomlConfig};
pub use crate::core::{Aggregator, ConfigProvider, CourseCatalog, CourseRecord, RecommendationResult};
pub use crate::utils::error::{CourseRecError, Result, SearchError};
