//! Object storage seam.
//!
//! Media rows persist storage-relative keys; everything that talks to the
//! store or turns a key into a public URL goes through the `ObjectStorage`
//! trait so tests can substitute an in-memory double.

mod rewrite;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

pub use rewrite::rewrite_media;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage key could not be joined onto the public base URL.
    #[error("Cannot build public URL for key '{key}'")]
    UrlBuild { key: String },

    /// The store answered with a non-success status.
    #[error("Storage request for '{key}' failed with status {status}")]
    RequestFailed { key: String, status: u16 },

    /// Transport-level failure talking to the store.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Minimal object-store surface the application needs: write, delete and
/// public URL construction. Upload parsing (multipart etc.) happens before
/// this seam; only raw bytes cross it.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Builds the public URL for a storage-relative key. Pure; must return
    /// the same URL for the same key on every call.
    fn public_url(&self, key: &str) -> Result<String, StorageError>;
}

/// S3-compatible HTTP store: objects live at `{base_url}/{key}` and are
/// served publicly from `{public_url}/{key}`.
pub struct HttpObjectStorage {
    client: reqwest::Client,
    base_url: Url,
    public_base: Url,
}

impl HttpObjectStorage {
    pub fn new(client: reqwest::Client, base_url: Url, public_base: Url) -> Self {
        Self {
            client,
            base_url,
            public_base,
        }
    }

    fn object_url(&self, key: &str) -> Result<Url, StorageError> {
        self.base_url.join(key).map_err(|_| StorageError::UrlBuild {
            key: key.to_string(),
        })
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let url = self.object_url(key)?;
        let response = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StorageError::RequestFailed {
                key: key.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let url = self.object_url(key)?;
        let response = self.client.delete(url).send().await?;

        // Deleting an already-absent object is treated as success.
        if !response.status().is_success() && response.status().as_u16() != 404 {
            return Err(StorageError::RequestFailed {
                key: key.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    fn public_url(&self, key: &str) -> Result<String, StorageError> {
        self.public_base
            .join(key)
            .map(|url| url.to_string())
            .map_err(|_| StorageError::UrlBuild {
                key: key.to_string(),
            })
    }
}
