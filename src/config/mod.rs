//! Settings for job configuration generation and input handling

pub mod loader;
pub mod settings;

pub use loader::{load_settings, load_settings_with, SettingsFormat};
pub use settings::{
    ClusteringSettings, ExtractionSettings, InputSettings, JobSettings, Settings,
    TranslationSettings,
};
