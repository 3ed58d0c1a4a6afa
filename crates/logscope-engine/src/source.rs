use async_trait::async_trait;

use logscope_client::{LogApiClient, Result};
use logscope_types::LogRecord;

/// Abstraction over the remote log source.
///
/// The engine and poller talk to this seam instead of a concrete client,
/// so timer and failure semantics can be exercised without a live endpoint.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Retrieve the current full snapshot, in source order
    async fn fetch_all(&self) -> Result<Vec<LogRecord>>;

    /// Discard every record held by the remote source
    async fn clear_remote(&self) -> Result<()>;
}

#[async_trait]
impl LogSource for LogApiClient {
    async fn fetch_all(&self) -> Result<Vec<LogRecord>> {
        LogApiClient::fetch_all(self).await
    }

    async fn clear_remote(&self) -> Result<()> {
        LogApiClient::clear_remote(self).await
    }
}
