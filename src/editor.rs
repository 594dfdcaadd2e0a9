//! Editor resolution and invocation.
//!
//! The editor command line comes from `$VISUAL`, then `$EDITOR`, then a
//! configured fallback. The value may carry flags and quoting
//! (`VISUAL='code --wait'`), so it is split with the crate's own
//! tokenizer before spawning.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

use crate::parse::{TokenizeError, tokenize_line};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(
        "could not find a suitable editor; set the VISUAL or EDITOR environment variable"
    )]
    NotFound,
    #[error("failed to parse editor command {command:?}: {source}")]
    BadCommand {
        command: String,
        source: TokenizeError,
    },
    #[error("editor command is empty")]
    EmptyCommand,
    #[error("failed to run editor {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("editor {program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Resolve the editor command line to use.
pub fn resolve_editor(fallback: &str) -> Result<String, EditorError> {
    resolve_from(
        std::env::var("VISUAL").ok().as_deref(),
        std::env::var("EDITOR").ok().as_deref(),
        fallback,
    )
}

fn resolve_from(
    visual: Option<&str>,
    editor: Option<&str>,
    fallback: &str,
) -> Result<String, EditorError> {
    for value in [visual, editor].into_iter().flatten() {
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }
    // The fallback only counts when it actually exists on PATH.
    if !fallback.is_empty() && crate::backend::find_in_path(fallback).is_some() {
        return Ok(fallback.to_string());
    }
    Err(EditorError::NotFound)
}

/// Open `path` in the editor described by `command_line` and wait for it
/// to exit. The child inherits the terminal.
pub fn edit_file(command_line: &str, path: &Path) -> Result<(), EditorError> {
    let words = tokenize_line(command_line).map_err(|source| EditorError::BadCommand {
        command: command_line.to_string(),
        source,
    })?;
    let (program, args) = words.split_first().ok_or(EditorError::EmptyCommand)?;

    log::debug!("running editor: {program} {args:?} {}", path.display());
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| EditorError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(EditorError::Failed {
            program: program.clone(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_wins() {
        let cmd = resolve_from(Some("code --wait"), Some("vim"), "nano").unwrap();
        assert_eq!(cmd, "code --wait");
    }

    #[test]
    fn editor_when_visual_unset() {
        let cmd = resolve_from(None, Some("vim"), "nano").unwrap();
        assert_eq!(cmd, "vim");
    }

    #[test]
    fn empty_values_are_skipped() {
        let cmd = resolve_from(Some(""), Some("vim"), "nano").unwrap();
        assert_eq!(cmd, "vim");
    }

    #[test]
    fn no_editor_anywhere() {
        let err = resolve_from(None, None, "").unwrap_err();
        assert!(matches!(err, EditorError::NotFound));
    }

    #[test]
    fn fallback_must_be_on_path() {
        let err = resolve_from(None, None, "no-such-editor-on-path").unwrap_err();
        assert!(matches!(err, EditorError::NotFound));
    }

    #[test]
    fn bad_command_line_is_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = edit_file("code 'unclosed", file.path()).unwrap_err();
        assert!(matches!(err, EditorError::BadCommand { .. }));
    }

    #[test]
    fn empty_command_line_is_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = edit_file("   ", file.path()).unwrap_err();
        assert!(matches!(err, EditorError::EmptyCommand));
    }

    #[cfg(unix)]
    #[test]
    fn successful_editor_run() {
        let file = tempfile::NamedTempFile::new().unwrap();
        edit_file("true", file.path()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = edit_file("false", file.path()).unwrap_err();
        assert!(matches!(err, EditorError::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn editor_args_with_quoting_are_split() {
        // sh -c 'exit 0' ignores the appended path argument.
        let file = tempfile::NamedTempFile::new().unwrap();
        edit_file("sh -c 'exit 0'", file.path()).unwrap();
    }
}
