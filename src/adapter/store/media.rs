use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::WalletError;
use crate::port::MediaHost;

/// Stand-in for the external image host: keeps uploads in memory and hands
/// back stable fake URLs. Production wires a real client here.
pub struct InMemoryMediaHost {
    uploads: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryMediaHost {
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn stored_count(&self) -> usize {
        self.uploads.read().await.len()
    }
}

impl Default for InMemoryMediaHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaHost for InMemoryMediaHost {
    async fn upload(
        &self,
        folder: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, WalletError> {
        let url = format!("https://media.local/{}/{}-{}", folder, Uuid::new_v4(), file_name);
        let mut uploads = self.uploads.write().await;
        uploads.insert(url.clone(), bytes.to_vec());
        Ok(url)
    }
}
