//! # Token Store
//!
//! Persistence for the access/refresh token pair. Nothing else about the
//! session survives a restart.
//!
//! - [`FileTokenStore`]: JSON file on disk (`{"accessToken": ..., "refreshToken": ...}`)
//! - [`MemoryTokenStore`]: process-local, used by tests and throwaway sessions

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::error::TokenStoreError;
use crate::core::service::TokenStore;

/// Persisted token pair
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl TokenPair {
    fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: parking_lot::Mutex<TokenPair>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an access token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            tokens: parking_lot::Mutex::new(TokenPair {
                access_token: Some(token.into()),
                refresh_token: None,
            }),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get_token(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.tokens.lock().access_token.clone())
    }

    async fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        self.tokens.lock().access_token = Some(token.to_string());
        Ok(())
    }

    async fn remove_token(&self) -> Result<(), TokenStoreError> {
        self.tokens.lock().access_token = None;
        Ok(())
    }

    async fn get_refresh_token(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.tokens.lock().refresh_token.clone())
    }

    async fn set_refresh_token(&self, token: &str) -> Result<(), TokenStoreError> {
        self.tokens.lock().refresh_token = Some(token.to_string());
        Ok(())
    }

    async fn remove_refresh_token(&self) -> Result<(), TokenStoreError> {
        self.tokens.lock().refresh_token = None;
        Ok(())
    }
}

/// File-backed token store.
///
/// Every operation is a full read-modify-write of the file, serialized by an
/// async mutex. The file is deleted once both tokens are removed.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    io_lock: tokio::sync::Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            io_lock: tokio::sync::Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<TokenPair, TokenStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(TokenPair::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TokenPair::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, tokens: &TokenPair) -> Result<(), TokenStoreError> {
        if tokens.is_empty() {
            return match tokio::fs::remove_file(&self.path).await {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(tokens)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    async fn update<F>(&self, apply: F) -> Result<(), TokenStoreError>
    where
        F: FnOnce(&mut TokenPair) + Send,
    {
        let _guard = self.io_lock.lock().await;
        let mut tokens = self.load().await?;
        apply(&mut tokens);
        self.save(&tokens).await
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get_token(&self) -> Result<Option<String>, TokenStoreError> {
        let _guard = self.io_lock.lock().await;
        Ok(self.load().await?.access_token)
    }

    async fn set_token(&self, token: &str) -> Result<(), TokenStoreError> {
        let token = token.to_string();
        self.update(move |tokens| tokens.access_token = Some(token)).await
    }

    async fn remove_token(&self) -> Result<(), TokenStoreError> {
        self.update(|tokens| tokens.access_token = None).await
    }

    async fn get_refresh_token(&self) -> Result<Option<String>, TokenStoreError> {
        let _guard = self.io_lock.lock().await;
        Ok(self.load().await?.refresh_token)
    }

    async fn set_refresh_token(&self, token: &str) -> Result<(), TokenStoreError> {
        let token = token.to_string();
        self.update(move |tokens| tokens.refresh_token = Some(token)).await
    }

    async fn remove_refresh_token(&self) -> Result<(), TokenStoreError> {
        self.update(|tokens| tokens.refresh_token = None).await
    }
}
