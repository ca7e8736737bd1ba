//! 設定の保存（localStorage）

use defect_inspector_common::ClientSettings;
use gloo::storage::{LocalStorage, Storage};

const SETTINGS_KEY: &str = "defect-inspector.settings";

pub fn load_settings() -> ClientSettings {
    LocalStorage::get(SETTINGS_KEY).unwrap_or_default()
}

pub fn save_settings(settings: &ClientSettings) {
    if let Err(e) = LocalStorage::set(SETTINGS_KEY, settings) {
        log::warn!("設定を保存できません: {}", e);
    }
}
