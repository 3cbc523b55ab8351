use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::analysis::models::ResumeAnalysis;
use crate::job_match::models::JobMatch;
use crate::store::AnalysisStore;

struct Entry<T> {
    value: T,
    expires_at: Instant,
}

/// Process-local store. Entries expire after the configured TTL, the same as in
/// Redis; expired entries are never returned and are purged on every insert.
pub struct InMemoryAnalysisStore {
    ttl: Duration,
    analyses: RwLock<HashMap<Uuid, Entry<ResumeAnalysis>>>,
    job_matches: RwLock<HashMap<Uuid, Entry<JobMatch>>>,
}

impl InMemoryAnalysisStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            analyses: RwLock::new(HashMap::new()),
            job_matches: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.analyses.read().await.len() + self.job_matches.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn insert_live<T>(map: &mut HashMap<Uuid, Entry<T>>, id: Uuid, value: T, ttl: Duration) {
    let now = Instant::now();
    map.retain(|_, entry| entry.expires_at > now);
    map.insert(
        id,
        Entry {
            value,
            expires_at: now + ttl,
        },
    );
}

fn get_live<T: Clone>(map: &HashMap<Uuid, Entry<T>>, id: Uuid) -> Option<T> {
    map.get(&id)
        .filter(|entry| entry.expires_at > Instant::now())
        .map(|entry| entry.value.clone())
}

#[async_trait]
impl AnalysisStore for InMemoryAnalysisStore {
    async fn save_analysis(&self, analysis: &ResumeAnalysis) -> Result<()> {
        let mut analyses = self.analyses.write().await;
        insert_live(&mut analyses, analysis.id, analysis.clone(), self.ttl);
        Ok(())
    }

    async fn load_analysis(&self, id: Uuid) -> Result<Option<ResumeAnalysis>> {
        Ok(get_live(&*self.analyses.read().await, id))
    }

    async fn save_job_match(&self, job_match: &JobMatch) -> Result<()> {
        let mut job_matches = self.job_matches.write().await;
        insert_live(&mut job_matches, job_match.id, job_match.clone(), self.ttl);
        Ok(())
    }

    async fn load_job_match(&self, id: Uuid) -> Result<Option<JobMatch>> {
        Ok(get_live(&*self.job_matches.read().await, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::FileMeta;
    use crate::analysis::orchestrator::analyze;

    const TTL: Duration = Duration::from_secs(60);

    async fn sample_analysis(text: &str) -> ResumeAnalysis {
        analyze(
            text.to_string(),
            FileMeta {
                file_name: "cv.txt".to_string(),
                file_size: text.len() as u64,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_roundtrip_analysis() {
        let store = InMemoryAnalysisStore::new(TTL);
        let analysis = sample_analysis("Led a team of 4.").await;

        store.save_analysis(&analysis).await.unwrap();
        let loaded = store.load_analysis(analysis.id).await.unwrap().unwrap();
        assert_eq!(loaded.id, analysis.id);
        assert_eq!(loaded.extracted_text, analysis.extracted_text);
    }

    #[tokio::test]
    async fn test_missing_ids_return_none() {
        let store = InMemoryAnalysisStore::new(TTL);
        assert!(store.load_analysis(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store.load_job_match(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let store = InMemoryAnalysisStore::new(TTL);
        let analysis = sample_analysis("Led a team of 4.").await;

        tokio::time::pause();
        store.save_analysis(&analysis).await.unwrap();

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.load_analysis(analysis.id).await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(store.load_analysis(analysis.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_entries_are_purged_on_insert() {
        let store = InMemoryAnalysisStore::new(TTL);
        let first = sample_analysis("Led a team of 4.").await;
        let second = sample_analysis("Built 3 services.").await;

        tokio::time::pause();
        store.save_analysis(&first).await.unwrap();
        assert_eq!(store.len().await, 1);

        tokio::time::advance(TTL + Duration::from_secs(1)).await;
        store.save_analysis(&second).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.load_analysis(first.id).await.unwrap().is_none());
        assert!(store.load_analysis(second.id).await.unwrap().is_some());
    }
}
