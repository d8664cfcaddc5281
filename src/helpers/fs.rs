//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/typed-ui-demo/` or `$XDG_CONFIG_HOME/typed-ui-demo/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.typed-ui-demo/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\typed-ui-demo\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "cyenx", "typed-ui-demo") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}
