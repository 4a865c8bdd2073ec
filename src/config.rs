use std::path::{Path, PathBuf};

use tracing::info;

use crate::framework::FrameworkError;
use crate::framework::mappings::FileFrameworkMappings;
use crate::framework::providers::MappingNameProvider;

// =============================================================================
// Names
// =============================================================================

/// Directory name under the user's config directory
pub const APP_DIR_NAME: &str = "nuget-frameworks";

/// File name of the optional user mapping tables
pub const MAPPINGS_FILE_NAME: &str = "mappings.json";

/// Environment variable holding the log filter (tracing `EnvFilter` syntax)
pub const LOG_FILTER_ENV: &str = "NUGET_FRAMEWORKS_LOG";

/// Log filter used when [`LOG_FILTER_ENV`] is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the path to the config directory for nuget-frameworks.
/// Uses $XDG_CONFIG_HOME/nuget-frameworks if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/nuget-frameworks,
/// or ./nuget-frameworks if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the user mapping tables file.
pub fn mappings_path() -> PathBuf {
    config_dir().join(MAPPINGS_FILE_NAME)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join(APP_DIR_NAME)
}

/// Build a provider from user mapping tables.
///
/// An explicit path must exist. Without one, the default mappings path is used
/// when present; `None` means the built-in tables apply.
pub fn load_user_provider(
    explicit: Option<&Path>,
) -> Result<Option<MappingNameProvider>, FrameworkError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = mappings_path();
            if !path.is_file() {
                return Ok(None);
            }
            path
        }
    };

    let mappings = FileFrameworkMappings::load(&path)?;
    info!("Loaded framework mappings from {:?}", path);

    Ok(Some(MappingNameProvider::new(&mappings, &mappings)))
}
