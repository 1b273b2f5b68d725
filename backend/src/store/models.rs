use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{ImageRef, ImageSource};

/// An uploaded image kept in memory. The bytes are never decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredImage {
    pub hash: String,
    pub file_name: String,
    pub size: usize,
    pub mime_type: String,
    pub uploaded_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub access_count: u32,
}

impl StoredImage {
    pub fn new(hash: String, file_name: String, size: usize, mime_type: String) -> Self {
        let now = Utc::now();
        Self {
            hash,
            file_name,
            size,
            mime_type,
            uploaded_at: now,
            last_accessed: now,
            access_count: 1,
        }
    }

    pub fn touch(&mut self) {
        self.last_accessed = Utc::now();
        self.access_count += 1;
    }

    pub fn to_image_ref(&self) -> ImageRef {
        ImageRef {
            hash: self.hash.clone(),
            file_name: self.file_name.clone(),
            size: self.size,
            mime_type: self.mime_type.clone(),
        }
    }

    pub fn source(&self) -> ImageSource {
        ImageSource(self.hash.clone())
    }
}
