//! Persistence for finished analyses and job matches.
//!
//! `AppState` holds an `Arc<dyn AnalysisStore>`, chosen at startup: Redis when
//! `REDIS_URL` is configured, otherwise the in-process map.

pub mod memory;
pub mod redis_store;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::analysis::models::ResumeAnalysis;
use crate::job_match::models::JobMatch;

pub use memory::InMemoryAnalysisStore;
pub use redis_store::RedisAnalysisStore;

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn save_analysis(&self, analysis: &ResumeAnalysis) -> Result<()>;

    async fn load_analysis(&self, id: Uuid) -> Result<Option<ResumeAnalysis>>;

    async fn save_job_match(&self, job_match: &JobMatch) -> Result<()>;

    async fn load_job_match(&self, id: Uuid) -> Result<Option<JobMatch>>;
}
