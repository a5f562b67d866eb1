//! Application state shared by every request handler.
//!
//! The store client is built once at startup and shared read-only; handlers
//! never construct their own sessions.

use std::sync::Arc;

use ecskudos_core::storage::KudoRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. Both fields are reference counted, so a
/// clone is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Kudo repository (DynamoDB or in-memory, see [`crate::storage`]).
    pub kudo_repo: Arc<dyn KudoRepository>,
    /// Shared secret for webhook signatures. Empty disables verification.
    webhook_secret: Arc<str>,
}

impl AppState {
    /// Creates a new AppState with the given repository and webhook secret.
    pub fn build(kudo_repo: Arc<dyn KudoRepository>, webhook_secret: impl AsRef<str>) -> Self {
        Self {
            kudo_repo,
            webhook_secret: Arc::from(webhook_secret.as_ref()),
        }
    }

    /// The webhook secret as raw key bytes.
    pub fn webhook_secret(&self) -> &[u8] {
        self.webhook_secret.as_bytes()
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState backed by DynamoDB.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;
            tracing::info!(table = %repo.table_name(), "Using DynamoDB storage");

            Ok(Self::build(Arc::new(repo), &config.webhook_secret))
        }
    }
}

#[cfg(not(feature = "dynamodb"))]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState backed by in-memory storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, kudos will not survive a restart");

            Ok(Self::build(
                Arc::new(InMemoryRepository::new()),
                &config.webhook_secret,
            ))
        }
    }
}
