mod errors;
mod settings;

pub use errors::ConfigError;
pub use settings::{
    Settings, load_settings, load_settings_from, save_settings, save_settings_to,
    settings_file_path,
};
