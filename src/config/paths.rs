use std::path::PathBuf;

const APP_DIR: &str = "fixture_oracle";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";

/// Directory holding the config file and the default log directory.
///
/// Falls back to the current directory when the platform has no config dir.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the platform-specific path for the config file.
///
/// # Returns
/// String containing the path to `config.toml` (e.g. `~/.config/fixture_oracle/config.toml` on Linux)
pub fn get_config_path() -> String {
    app_dir().join(CONFIG_FILE_NAME).to_string_lossy().into_owned()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_dir().join(LOG_DIR_NAME).to_string_lossy().into_owned()
}
