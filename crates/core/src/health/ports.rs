//! Port for store connectivity checks

use async_trait::async_trait;
use a11ylens_domain::Result;

/// Trait for a cheap round trip to the store
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Run a minimal query; `Ok` means the store answered
    async fn ping(&self) -> Result<()>;
}
