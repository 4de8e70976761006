//! Configuration module for vidrank.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    EmbeddingSettings, GeneralSettings, SearchSettings, Settings, YoutubeSettings,
};
