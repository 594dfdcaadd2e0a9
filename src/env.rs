//! Environment-file loading.
//!
//! Files hold `KEY=value` lines. Variables already present in the process
//! environment always win; the file only fills gaps.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment file not found: {0}")]
    NotFound(String),
    #[error("failed to load environment file {path}: {source}")]
    Load {
        path: String,
        source: dotenvy::Error,
    },
}

/// Load an environment file into the process environment.
///
/// A missing file is an error only when `error_missing_file` is set;
/// parse failures and other I/O failures always are. Tilde in `path`
/// is expanded.
pub fn load_env_file(path: &str, error_missing_file: bool) -> Result<(), EnvError> {
    let expanded = shellexpand::tilde(path);
    match dotenvy::from_path(expanded.as_ref()) {
        Ok(()) => {
            log::debug!("loaded environment file {expanded}");
            Ok(())
        }
        Err(e) if e.not_found() => {
            if error_missing_file {
                Err(EnvError::NotFound(path.to_string()))
            } else {
                log::debug!("no environment file at {expanded}, skipping");
                Ok(())
            }
        }
        Err(source) => Err(EnvError::Load {
            path: path.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_new_variables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "REQFORGE_TEST_FRESH=from-file").unwrap();
        load_env_file(file.path().to_str().unwrap(), true).unwrap();
        assert_eq!(
            std::env::var("REQFORGE_TEST_FRESH").unwrap(),
            "from-file"
        );
    }

    #[test]
    fn existing_variables_win() {
        // Safety: test-only env mutation, variable name is unique to this test.
        unsafe { std::env::set_var("REQFORGE_TEST_EXISTING", "from-process") };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "REQFORGE_TEST_EXISTING=from-file").unwrap();
        load_env_file(file.path().to_str().unwrap(), true).unwrap();
        assert_eq!(
            std::env::var("REQFORGE_TEST_EXISTING").unwrap(),
            "from-process"
        );
    }

    #[test]
    fn missing_file_is_fatal_when_requested() {
        let err = load_env_file("/nonexistent/reqforge.env", true).unwrap_err();
        assert!(matches!(err, EnvError::NotFound(_)));
    }

    #[test]
    fn missing_file_is_tolerated_otherwise() {
        assert!(load_env_file("/nonexistent/reqforge.env", false).is_ok());
    }

    #[test]
    fn malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not a valid line!").unwrap();
        let err = load_env_file(file.path().to_str().unwrap(), false).unwrap_err();
        assert!(matches!(err, EnvError::Load { .. }));
    }
}
