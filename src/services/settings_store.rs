// src/services/settings_store.rs
//
// Persisted settings snapshot. The store guarantees well-formed values:
// whatever arrives over the wire is decoded into the Settings types before
// anything downstream sees it, and a missing or unreadable file falls back
// to defaults.

use std::fs;
use std::path::PathBuf;

use crate::models::Settings;

pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    pub fn load(path: PathBuf) -> Self {
        let settings = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    println!("settings file unreadable ({}), using defaults", e);
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        };

        Self { path, settings }
    }

    /// The current snapshot. Consumers re-query the whole snapshot after a
    /// settings-changed notification; there is no per-field delivery.
    pub fn get(&self) -> Settings {
        self.settings
    }

    /// Mutate the snapshot and persist it.
    pub fn update(&mut self, mutate: impl FnOnce(&mut Settings)) {
        mutate(&mut self.settings);
        self.save();
    }

    fn save(&self) {
        match serde_json::to_string_pretty(&self.settings) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    println!("failed to persist settings: {}", e);
                }
            }
            Err(e) => println!("failed to encode settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherUnit;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("facevis_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_defaults() {
        let path = scratch_path("missing");
        let _ = fs::remove_file(&path);

        let store = SettingsStore::load(path);
        assert_eq!(store.get(), Settings::default());
    }

    #[test]
    fn test_update_round_trips_through_disk() {
        let path = scratch_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut store = SettingsStore::load(path.clone());
        store.update(|s| {
            s.show_second_hand = false;
            s.weather_unit = WeatherUnit::Fahrenheit;
        });

        let reloaded = SettingsStore::load(path.clone());
        assert!(!reloaded.get().show_second_hand);
        assert_eq!(reloaded.get().weather_unit, WeatherUnit::Fahrenheit);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_garbage_file_defaults() {
        let path = scratch_path("garbage");
        fs::write(&path, "not json at all").unwrap();

        let store = SettingsStore::load(path.clone());
        assert_eq!(store.get(), Settings::default());

        let _ = fs::remove_file(&path);
    }
}
