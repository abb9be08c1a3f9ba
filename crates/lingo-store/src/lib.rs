use std::io::ErrorKind;
use std::path::Path;

use lingo_config::store::StoreConfig;
use lingo_types::DictionaryData;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid dictionary file: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Load the document once at startup.
///
/// The cache wins when present and readable, then the bundled data file.
/// Anything else degrades to the empty default; startup never fails on a
/// missing or broken file.
pub async fn load(config: &StoreConfig) -> DictionaryData {
    match read_document(&config.cache_path).await {
        Ok(data) => {
            tracing::info!("Loaded dictionary from cache: {}", config.cache_path);
            return data;
        }
        Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!("Ignoring unreadable cache {}: {}", config.cache_path, e);
        }
    }

    match read_document(&config.data_path).await {
        Ok(data) => {
            tracing::info!(
                "Loaded dictionary from {}: {} terms",
                config.data_path,
                data.terms.len()
            );
            data
        }
        Err(e) => {
            tracing::warn!("Failed to load dictionary {}: {}", config.data_path, e);
            DictionaryData::default()
        }
    }
}

/// Rewrite the working copy after a mutation.
pub async fn save_cache(config: &StoreConfig, data: &DictionaryData) -> Result<(), StoreError> {
    if let Some(parent) = Path::new(&config.cache_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    write_pretty(&config.cache_path, data).await
}

/// Serialize the document to a pretty-printed JSON file, byte-for-byte the
/// in-memory state.
pub async fn export(path: impl AsRef<Path>, data: &DictionaryData) -> Result<(), StoreError> {
    write_pretty(path, data).await
}

/// Parse a user-supplied file. Accepted only when it carries both `terms`
/// and `categories`; the caller replaces the document wholesale on success
/// and leaves it untouched on failure.
pub async fn import(path: impl AsRef<Path>) -> Result<DictionaryData, StoreError> {
    read_document(path).await
}

async fn read_document(path: impl AsRef<Path>) -> Result<DictionaryData, StoreError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

async fn write_pretty(path: impl AsRef<Path>, data: &DictionaryData) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(data)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
