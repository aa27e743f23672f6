//! Config file location.

use std::path::PathBuf;

use anyhow::{Result, bail};

/// Environment variable naming the config directory.
pub const CONFIG_DIR_ENV: &str = "TVDB_CONFIG_DIR";

/// File name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the `config.toml` path.
///
/// The directory is the first of:
///
/// 1. `dir` (the `--dir` flag)
/// 2. `$TVDB_CONFIG_DIR`
/// 3. `$XDG_CONFIG_HOME/tvdb`
/// 4. `$HOME/.config/tvdb`
///
/// `lookup` reads environment variables; empty values count as unset.
///
/// # Errors
///
/// Returns an error when no flag is given and none of the variables is set.
pub fn resolve_config_path(
    dir: Option<&PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let var = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
    let base = if let Some(d) = var(CONFIG_DIR_ENV) {
        d
    } else if let Some(xdg) = var("XDG_CONFIG_HOME") {
        xdg.join("tvdb")
    } else if let Some(home) = var("HOME") {
        home.join(".config").join("tvdb")
    } else {
        bail!("cannot locate config.toml: pass --dir or set {CONFIG_DIR_ENV} or HOME");
    };
    Ok(base.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| String::from(*v))
        }
    }

    #[test]
    fn test_dir_flag_wins() {
        // Arrange
        let dir = PathBuf::from("/tmp/tvdb-work");

        // Act
        let path = resolve_config_path(Some(&dir), env(&[(CONFIG_DIR_ENV, "/etc/tvdb")])).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/tvdb-work/config.toml"));
    }

    #[test]
    fn test_config_dir_env_before_xdg_and_home() {
        // Arrange
        let vars = [
            (CONFIG_DIR_ENV, "/etc/tvdb"),
            ("XDG_CONFIG_HOME", "/home/u/.xdg"),
            ("HOME", "/home/u"),
        ];

        // Act
        let path = resolve_config_path(None, env(&vars)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/etc/tvdb/config.toml"));
    }

    #[test]
    fn test_xdg_config_home() {
        // Arrange
        let vars = [
            (CONFIG_DIR_ENV, ""),
            ("XDG_CONFIG_HOME", "/home/u/.xdg"),
            ("HOME", "/home/u"),
        ];

        // Act
        let path = resolve_config_path(None, env(&vars)).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/u/.xdg/tvdb/config.toml"));
    }

    #[test]
    fn test_home_fallback() {
        // Arrange & Act
        let path = resolve_config_path(None, env(&[("HOME", "/home/u")])).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/u/.config/tvdb/config.toml"));
    }

    #[test]
    fn test_nothing_set_is_an_error() {
        // Arrange & Act
        let err = resolve_config_path(None, env(&[])).unwrap_err();

        // Assert
        assert!(err.to_string().contains(CONFIG_DIR_ENV));
    }
}
