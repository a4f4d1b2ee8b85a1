//! Shared JSON-document persistence used by both stores.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

/// Load a JSON document from `path`, or write `default` there and return it
/// when the file does not exist yet. A present-but-malformed document is an
/// error; startup should fail loudly rather than silently discard data.
pub fn load_or_init<T>(path: &Path, default: T) -> anyhow::Result<T>
where
    T: Serialize + DeserializeOwned,
{
    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("malformed JSON in {}", path.display()))
    } else {
        save_atomic(path, &default)?;
        info!(path = %path.display(), "created document with defaults");
        Ok(default)
    }
}

/// Write a pretty-printed JSON document via a sibling temp file and an
/// atomic rename, so readers never observe a partially written file.
pub fn save_atomic<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let payload = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");

    fs::write(&tmp, payload)
        .with_context(|| format!("failed to write {}", Path::new(&tmp).display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_or_init, save_atomic};
    use crate::model::SettingsDoc;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let doc = load_or_init(&path, SettingsDoc::default()).unwrap();
        assert!(doc.user_modes.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut doc = SettingsDoc::default();
        doc.user_modes
            .insert("42".to_owned(), crate::model::Mode::Nsfw);
        save_atomic(&path, &doc).unwrap();

        let reloaded = load_or_init(&path, SettingsDoc::default()).unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(load_or_init(&path, SettingsDoc::default()).is_err());
    }
}
