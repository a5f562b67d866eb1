//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ecskudos_core::kudos::Kudo;
use ecskudos_core::storage::{KudoRepository, Result, StoreError};

/// In-memory storage backend.
///
/// Each user's kudos are kept in insertion order. Like the DynamoDB
/// backend, writes are unconditional and never deduplicated.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    kudos: Arc<RwLock<HashMap<String, Vec<Kudo>>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KudoRepository for InMemoryRepository {
    async fn create_kudo(&self, kudo: &Kudo) -> Result<()> {
        if kudo.user.is_empty() {
            return Err(StoreError::Serialization(
                "partition key User must not be empty".to_string(),
            ));
        }

        let mut kudos = self.kudos.write().await;
        kudos
            .entry(kudo.user.clone())
            .or_default()
            .push(kudo.clone());
        Ok(())
    }

    async fn list_kudos_by_user(&self, user: &str) -> Result<Vec<Kudo>> {
        let kudos = self.kudos.read().await;
        Ok(kudos.get(user).cloned().unwrap_or_default())
    }
}
