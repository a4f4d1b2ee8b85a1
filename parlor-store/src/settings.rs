use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::model::{Mode, SettingsDoc};
use crate::persist::{load_or_init, save_atomic};

/// Shared handle to the per-user mode preferences.
///
/// Preferences are global per user (one mode everywhere, servers and DMs
/// alike). Reads never fail; a user without an entry is simply in the
/// default SFW mode.
#[derive(Clone, Debug)]
pub struct ModePreferenceStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    doc: Mutex<SettingsDoc>,
}

impl ModePreferenceStore {
    /// Load the settings document at `path`, creating an empty one when
    /// absent.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let doc = load_or_init(&path, SettingsDoc::default())?;

        let store = Self {
            inner: Arc::new(Inner {
                path,
                doc: Mutex::new(doc),
            }),
        };
        info!(
            path = %store.inner.path.display(),
            entries = store.entry_count(),
            "mode preferences loaded"
        );
        Ok(store)
    }

    /// Effective mode for a user; SFW when never set.
    pub fn mode_for(&self, user_id: u64) -> Mode {
        self.doc()
            .user_modes
            .get(&user_id.to_string())
            .copied()
            .unwrap_or_default()
    }

    /// Overwrite the user's mode and persist.
    pub fn set_mode(&self, user_id: u64, mode: Mode) -> anyhow::Result<()> {
        let mut doc = self.doc();
        doc.user_modes.insert(user_id.to_string(), mode);
        save_atomic(&self.inner.path, &*doc)
    }

    /// Number of users with an explicit preference.
    pub fn entry_count(&self) -> usize {
        self.doc().user_modes.len()
    }

    fn doc(&self) -> MutexGuard<'_, SettingsDoc> {
        self.inner
            .doc
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    fn path(&self) -> &PathBuf {
        &self.inner.path
    }
}

#[cfg(test)]
mod tests {
    use super::ModePreferenceStore;
    use crate::model::Mode;

    #[test]
    fn unset_user_defaults_to_sfw() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModePreferenceStore::open(dir.path().join("settings.json")).unwrap();

        assert_eq!(store.mode_for(123), Mode::Sfw);
        assert_eq!(store.entry_count(), 0);
    }

    #[test]
    fn set_then_get_returns_the_new_mode() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModePreferenceStore::open(dir.path().join("settings.json")).unwrap();

        store.set_mode(123, Mode::Nsfw).unwrap();
        assert_eq!(store.mode_for(123), Mode::Nsfw);

        store.set_mode(123, Mode::Sfw).unwrap();
        assert_eq!(store.mode_for(123), Mode::Sfw);
    }

    #[test]
    fn preferences_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModePreferenceStore::open(dir.path().join("settings.json")).unwrap();
        store.set_mode(7, Mode::Nsfw).unwrap();
        store.set_mode(8, Mode::Sfw).unwrap();

        let reloaded = ModePreferenceStore::open(store.path()).unwrap();
        assert_eq!(reloaded.mode_for(7), Mode::Nsfw);
        assert_eq!(reloaded.mode_for(8), Mode::Sfw);
        assert_eq!(reloaded.entry_count(), 2);
    }
}
