//! Config file reading and writing.

use crate::config::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read configuration from `path`, or fall back to defaults when no file
/// exists yet.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read configuration from the platform config location.
///
/// Platforms without a resolvable config directory run on defaults.
pub fn load_default_config() -> Result<Config> {
    super::config_file_path().map_or_else(|_| Ok(Config::default()), |path| load_config_file(&path))
}

/// Write `config` to `path`, creating parent directories as needed.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|source| Error::ConfigSerialize { source })?;
    fs::write(path, contents).map_err(|source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `config` to the platform config location and return where it went.
pub fn save_default_config(config: &Config) -> Result<PathBuf> {
    let path = super::config_file_path()?;
    save_config(config, &path)?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config_file(Path::new("/nonexistent/chordbatch/config.toml")).unwrap();
        assert_eq!(config.paths.python, PathBuf::from("python3"));
        assert_eq!(config.tools.stats, PathBuf::from("stats.py"));
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[paths]
partitions_root = "/srv/choco/partitions"
python = "/usr/bin/python3.11"

[tools]
stats = "tools/stats.py"
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(
            config.paths.partitions_root,
            PathBuf::from("/srv/choco/partitions")
        );
        assert_eq!(config.paths.python, PathBuf::from("/usr/bin/python3.11"));
        assert_eq!(config.tools.stats, PathBuf::from("tools/stats.py"));
        // Untouched keys keep their defaults.
        assert_eq!(config.tools.parser, PathBuf::from("parsers/instances.py"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        assert!(load_config_file(file.path()).is_err());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.paths.partitions_root = PathBuf::from("/data/partitions");
        save_config(&config, &path).unwrap();

        let reloaded = load_config_file(&path).unwrap();
        assert_eq!(
            reloaded.paths.partitions_root,
            PathBuf::from("/data/partitions")
        );
    }
}
