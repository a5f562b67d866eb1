use async_trait::async_trait;

use crate::kudos::Kudo;

use super::Result;

/// Repository for kudo records, partitioned by user.
///
/// Kudos are append-only: there is no update or delete, and writes are
/// unconditional so a redelivered webhook produces a second record.
#[async_trait]
pub trait KudoRepository: Send + Sync {
    /// Stores a kudo.
    async fn create_kudo(&self, kudo: &Kudo) -> Result<()>;

    /// Gets every kudo recorded for a user, in store order.
    ///
    /// Returns an empty vector when the user has none.
    async fn list_kudos_by_user(&self, user: &str) -> Result<Vec<Kudo>>;
}
