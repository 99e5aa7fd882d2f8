use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::i18n::Language;
use crate::{storage, DataPath, DataPathType, Directory, Result, Theme};

const SETTINGS_FILE: &str = "settings.json";

/// What is actually on disk. Either key may be absent on a first visit, in
/// which case [`SettingsHandler`](super::SettingsHandler) picks the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreferences {
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

/// Side-effecting boundary for the two persisted preference flags.
pub trait PreferenceStore {
    fn load(&self) -> StoredPreferences;
    fn save(&mut self, prefs: StoredPreferences) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn load(&self) -> StoredPreferences {
        (**self).load()
    }

    fn save(&mut self, prefs: StoredPreferences) -> Result<()> {
        (**self).save(prefs)
    }
}

/// Preferences kept as `settings/settings.json` inside the data directory.
pub struct FileStore {
    directory: Directory,
}

impl FileStore {
    pub fn new(path: &DataPath) -> Self {
        Self {
            directory: Directory::new(path.path(DataPathType::Setting)),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> StoredPreferences {
        match self.directory.get_file(SETTINGS_FILE) {
            Ok(contents) => match serde_json::from_str::<StoredPreferences>(&contents) {
                Ok(prefs) => prefs,
                Err(err) => {
                    error!("Invalid settings format ({err}). Using defaults");
                    StoredPreferences::default()
                }
            },
            Err(_) => {
                info!("No {SETTINGS_FILE} yet. Using defaults");
                StoredPreferences::default()
            }
        }
    }

    fn save(&mut self, prefs: StoredPreferences) -> Result<()> {
        let serialized = serde_json::to_string(&prefs)?;
        storage::write_file(&self.directory.file_path, SETTINGS_FILE, &serialized)?;
        info!("wrote preferences {}", serialized);
        Ok(())
    }
}

/// Keeps preferences in memory only. Used by tests and `--no-persist`.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub stored: StoredPreferences,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(stored: StoredPreferences) -> Self {
        Self { stored, writes: 0 }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> StoredPreferences {
        self.stored
    }

    fn save(&mut self, prefs: StoredPreferences) -> Result<()> {
        self.stored = prefs;
        self.writes += 1;
        Ok(())
    }
}
