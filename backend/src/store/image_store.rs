use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::StoredImage;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unsupported media type: {0}")]
    InvalidFormat(String),
    #[error("File too large: {0} bytes")]
    FileTooLarge(usize),
    #[error("Empty image payload")]
    Empty,
    #[error("Malformed data URL")]
    MalformedDataUrl,
}

/// Content-addressed in-memory image store. Re-uploading identical bytes
/// returns the existing entry; at capacity the least recently used entry is
/// evicted.
#[derive(Clone)]
pub struct ImageStore {
    images: Arc<RwLock<HashMap<String, StoredImage>>>,
    capacity: usize,
    max_bytes: usize,
}

impl ImageStore {
    pub fn new(capacity: usize, max_bytes: usize) -> Self {
        Self {
            images: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
            max_bytes,
        }
    }

    pub fn calculate_image_hash(image_data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(image_data);
        hex::encode(hasher.finalize())
    }

    pub fn validate_image(&self, image_data: &[u8], mime_type: &str) -> Result<(), StoreError> {
        if !mime_type.starts_with("image/") {
            return Err(StoreError::InvalidFormat(mime_type.to_string()));
        }
        if image_data.is_empty() {
            return Err(StoreError::Empty);
        }
        if image_data.len() > self.max_bytes {
            return Err(StoreError::FileTooLarge(image_data.len()));
        }
        Ok(())
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub async fn store_image(
        &self,
        image_data: &[u8],
        file_name: String,
        mime_type: String,
    ) -> Result<StoredImage, StoreError> {
        self.validate_image(image_data, &mime_type)?;
        let image_hash = Self::calculate_image_hash(image_data);

        let mut images = self.images.write().await;
        if let Some(existing) = images.get_mut(&image_hash) {
            existing.touch();
            log::debug!("Image {} already stored, reusing entry", image_hash);
            return Ok(existing.clone());
        }

        if images.len() >= self.capacity {
            let oldest = images
                .values()
                .min_by_key(|entry| entry.last_accessed)
                .map(|entry| entry.hash.clone());
            if let Some(hash) = oldest {
                log::info!("Image store full, evicting {}", hash);
                images.remove(&hash);
            }
        }

        let entry = StoredImage::new(image_hash.clone(), file_name, image_data.len(), mime_type);
        images.insert(image_hash, entry.clone());
        Ok(entry)
    }

    /// Decodes a `data:<mime>;base64,<payload>` URL and stores the bytes.
    pub async fn store_data_url(&self, data_url: &str) -> Result<StoredImage, StoreError> {
        let (mime_type, bytes) = decode_data_url(data_url)?;
        self.store_image(&bytes, "inline-image".to_string(), mime_type)
            .await
    }

    pub async fn get_image(&self, image_hash: &str) -> Option<StoredImage> {
        let mut images = self.images.write().await;
        images.get_mut(image_hash).map(|entry| {
            entry.touch();
            entry.clone()
        })
    }

    pub async fn delete_image(&self, image_hash: &str) -> bool {
        self.images.write().await.remove(image_hash).is_some()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.images.read().await.len()
    }
}

pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), StoreError> {
    let rest = data_url
        .trim()
        .strip_prefix("data:")
        .ok_or(StoreError::MalformedDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(StoreError::MalformedDataUrl)?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or(StoreError::MalformedDataUrl)?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|_| StoreError::MalformedDataUrl)?;
    Ok((mime_type.to_string(), bytes))
}
