mod settings_handler;
mod store;

pub use settings_handler::{Preferences, SettingsHandler};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoredPreferences};
