//! Redis-backed store. Values are JSON under namespaced keys and expire after
//! the configured TTL:
//! - `resume:v1:analysis:{id}` holds `ResumeAnalysis`
//! - `resume:v1:job_match:{id}` holds `JobMatch`

use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analysis::models::ResumeAnalysis;
use crate::job_match::models::JobMatch;
use crate::store::AnalysisStore;

const KEY_PREFIX: &str = "resume:v1:";

pub struct RedisAnalysisStore {
    client: redis::Client,
    ttl_secs: u64,
}

impl RedisAnalysisStore {
    pub fn new(redis_url: &str, ttl_secs: u64) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .with_context(|| format!("Invalid REDIS_URL '{redis_url}'"))?;
        Ok(Self { client, ttl_secs })
    }

    async fn put<T: Serialize + Sync>(&self, key: String, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).context("serializing store value")?;
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .context("redis connection failed")?;
        conn.set_ex::<_, _, ()>(&key, json, self.ttl_secs)
            .await
            .with_context(|| format!("redis SETEX {key} failed"))?;
        debug!(key = %key, ttl_secs = self.ttl_secs, "stored value");
        Ok(())
    }

    async fn fetch<T: DeserializeOwned>(&self, key: String) -> Result<Option<T>> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .context("redis connection failed")?;
        let json: Option<String> = conn
            .get(&key)
            .await
            .with_context(|| format!("redis GET {key} failed"))?;
        json.map(|j| {
            serde_json::from_str(&j).with_context(|| format!("corrupt value under {key}"))
        })
        .transpose()
    }
}

fn analysis_key(id: Uuid) -> String {
    format!("{KEY_PREFIX}analysis:{id}")
}

fn job_match_key(id: Uuid) -> String {
    format!("{KEY_PREFIX}job_match:{id}")
}

#[async_trait]
impl AnalysisStore for RedisAnalysisStore {
    async fn save_analysis(&self, analysis: &ResumeAnalysis) -> Result<()> {
        self.put(analysis_key(analysis.id), analysis).await
    }

    async fn load_analysis(&self, id: Uuid) -> Result<Option<ResumeAnalysis>> {
        self.fetch(analysis_key(id)).await
    }

    async fn save_job_match(&self, job_match: &JobMatch) -> Result<()> {
        self.put(job_match_key(job_match.id), job_match).await
    }

    async fn load_job_match(&self, id: Uuid) -> Result<Option<JobMatch>> {
        self.fetch(job_match_key(id)).await
    }
}
