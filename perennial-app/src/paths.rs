use directories::ProjectDirs;
use std::path::PathBuf;

pub fn config_root() -> PathBuf {
    if let Some(pd) = ProjectDirs::from("com", "perennial", "Perennial") {
        pd.config_dir().to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Where `simulate` and `api` look for an SRS config when `--config` is not given.
pub fn default_config_file() -> PathBuf {
    config_root().join("srs.json")
}
