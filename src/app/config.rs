//! Loading of the optional defaults file.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, DefaultsConfig};

/// Default location of the defaults file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".promptgen.toml";

/// Load defaults from `path`. A missing file yields empty defaults.
pub fn load_defaults(path: &Path) -> Result<DefaultsConfig, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => DefaultsConfig::from_toml_str(&content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DefaultsConfig::default()),
        Err(err) => Err(AppError::Io(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_defaults(&dir.path().join(DEFAULT_CONFIG_PATH)).unwrap();

        assert!(config.fields.language_stack.is_empty());
    }

    #[test]
    fn present_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        fs::write(&path, "[fields]\nlanguage_stack = \"Rust\"\n").unwrap();

        let config = load_defaults(&path).unwrap();

        assert_eq!(config.fields.language_stack, "Rust");
    }

    #[test]
    fn malformed_file_surfaces_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        fs::write(&path, "fields = 3\n[fields]\n").unwrap();

        assert!(matches!(load_defaults(&path), Err(AppError::TomlParse(_))));
    }
}
