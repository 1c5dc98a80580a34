use crate::domain::WalletError;
use async_trait::async_trait;

/// Boundary to the external media host that stores deposit proof images.
/// Accepts the raw bytes, returns a stable URL.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(
        &self,
        folder: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, WalletError>;
}
