use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const ALLOWED_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".webp", ".gif"];

/// Url prefix under which stored images are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

static DATA_URL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,").unwrap());
static UNSAFE_NAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_-]").unwrap());
static STORED_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+\.[a-z]+$").unwrap());

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid image format. Must be a valid base64 image.")]
    InvalidFormat,
    #[error("Invalid filename provided")]
    InvalidFilename,
    #[error("Unsupported file type. Please use JPG, PNG, WebP, or GIF.")]
    UnsupportedExtension,
    #[error("File too large. Maximum size is {limit} bytes.")]
    TooLarge { limit: usize },
    #[error("Image data is not valid base64")]
    Decode(#[from] base64::DecodeError),
    #[error("File not found")]
    NotFound,
    #[error("Failed to save image file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoredImage {
    pub file_name: String,
    pub path: String,
    pub size: usize,
}

/// Writes uploaded images into one directory and reads them back.
#[derive(Clone, Debug)]
pub struct ImageStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        ImageStore {
            dir: dir.into(),
            max_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Largest JSON body the upload route accepts: the encoded form of a
    /// ceiling-sized image plus room for the data url prefix and filename.
    /// Saturates instead of wrapping for very large ceilings.
    pub fn request_body_limit(&self) -> usize {
        (self.max_bytes / 3 + 1)
            .saturating_mul(4)
            .saturating_add(16 * 1024)
    }

    /// Checks an upload without touching the disk and returns the lowercase
    /// extension, dot included.
    pub fn check(&self, base64_data: &str, filename: &str) -> Result<String, UploadError> {
        if !base64_data.starts_with("data:image/") {
            return Err(UploadError::InvalidFormat);
        }

        let filename = filename.trim();
        if filename.is_empty() {
            return Err(UploadError::InvalidFilename);
        }

        let extension = match filename.rfind('.') {
            Some(dot) => filename[dot..].to_lowercase(),
            None => return Err(UploadError::UnsupportedExtension),
        };
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::UnsupportedExtension);
        }

        // decoded bytes are three quarters of the encoded length
        if base64_data.len().saturating_mul(3) / 4 > self.max_bytes {
            return Err(UploadError::TooLarge {
                limit: self.max_bytes,
            });
        }

        Ok(extension)
    }

    pub async fn save(&self, base64_data: &str, filename: &str) -> Result<StoredImage, UploadError> {
        let extension = self.check(base64_data, filename)?;

        let content = DATA_URL_PREFIX.replace(base64_data, "");
        let bytes = STANDARD.decode(content.trim().as_bytes())?;

        let stem = stem_of(filename.trim());
        let safe_stem = UNSAFE_NAME_CHARS.replace_all(stem, "_");
        let file_name = format!(
            "{}_{}{}",
            chrono::Utc::now().timestamp_millis(),
            safe_stem,
            extension
        );

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&file_name), &bytes).await?;
        info!(file = %file_name, size = bytes.len(), "Stored uploaded image");

        Ok(StoredImage {
            path: format!("{PUBLIC_PREFIX}/{file_name}"),
            size: bytes.len(),
            file_name,
        })
    }

    /// Opens a previously stored image. Names that could escape the upload
    /// directory are treated as missing.
    pub async fn open(&self, file_name: &str) -> Result<(tokio::fs::File, PathBuf), UploadError> {
        if !STORED_NAME.is_match(file_name) {
            return Err(UploadError::NotFound);
        }

        let path = self.dir.join(file_name);
        match tokio::fs::File::open(&path).await {
            Ok(file) => Ok((file, path)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(UploadError::NotFound),
            Err(err) => Err(UploadError::Io(err)),
        }
    }
}

fn stem_of(filename: &str) -> &str {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match base.rfind('.') {
        Some(dot) => &base[..dot],
        None => base,
    }
}
