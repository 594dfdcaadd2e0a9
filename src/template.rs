//! Template file handling: gathering filenames, loading content, and the
//! starter template.
//!
//! Filenames arrive as CLI arguments or piped on stdin (split with the
//! crate tokenizer, so quoted names with spaces work). A filename ending
//! with the edit suffix (`!` by default) is staged in a temp file and
//! opened in the editor before its content is used.

use std::io::{IsTerminal, Read, Write};

use thiserror::Error;

use crate::config::Config;
use crate::editor::{self, EditorError};
use crate::parse::{TokenizeError, tokenize_line};

/// Embedded starter template, rendered by `--init`.
const STARTER_TEMPLATE: &str = include_str!("../template.default.ini");

/// Placeholder in the starter template replaced by detected backends.
const BACKENDS_PLACEHOLDER: &str = "{{ Backends }}";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template filenames supplied both as arguments and on stdin")]
    ConflictingSources,
    #[error("failed to read piped filenames from stdin: {0}")]
    StdinRead(std::io::Error),
    #[error("invalid piped filename list: {0}")]
    StdinTokens(#[from] TokenizeError),
    #[error("cannot read template file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to stage template for editing: {0}")]
    Stage(std::io::Error),
    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Gather template filenames from CLI arguments and, when stdin is piped,
/// from its content. Supplying both at once is an error.
pub fn template_filenames(args: &[String]) -> Result<Vec<String>, TemplateError> {
    let mut piped = None;
    if !std::io::stdin().is_terminal() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(TemplateError::StdinRead)?;
        piped = Some(content);
    }
    merge_filename_sources(args, piped.as_deref())
}

fn merge_filename_sources(
    args: &[String],
    piped: Option<&str>,
) -> Result<Vec<String>, TemplateError> {
    let piped_names = match piped {
        Some(content) => tokenize_line(content)?,
        None => Vec::new(),
    };
    if !piped_names.is_empty() {
        if !args.is_empty() {
            return Err(TemplateError::ConflictingSources);
        }
        return Ok(piped_names);
    }
    Ok(args.to_vec())
}

/// Read a template's content, routing through the editor when the
/// filename carries the edit suffix.
pub fn read_template(name: &str, config: &Config) -> Result<String, TemplateError> {
    if let Some(path) = edit_target(name, &config.template.edit_suffix) {
        return edit_template(path, &config.editor.fallback);
    }
    let path = shellexpand::tilde(name);
    std::fs::read_to_string(path.as_ref()).map_err(|source| TemplateError::Read {
        path: name.to_string(),
        source,
    })
}

/// The path to edit, when `name` ends with the edit suffix.
fn edit_target<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    if suffix.is_empty() {
        return None;
    }
    name.strip_suffix(suffix).filter(|rest| !rest.is_empty())
}

/// Copy the template to a temp file, open it in the editor, and return
/// the edited content. The temp file is removed on return.
fn edit_template(path: &str, editor_fallback: &str) -> Result<String, TemplateError> {
    let expanded = shellexpand::tilde(path);
    let original =
        std::fs::read_to_string(expanded.as_ref()).map_err(|source| TemplateError::Read {
            path: path.to_string(),
            source,
        })?;

    let mut staged = tempfile::Builder::new()
        .prefix("reqforge-")
        .suffix(".ini")
        .tempfile()
        .map_err(TemplateError::Stage)?;
    staged
        .write_all(original.as_bytes())
        .and_then(|()| staged.flush())
        .map_err(TemplateError::Stage)?;

    let command_line = editor::resolve_editor(editor_fallback)?;
    editor::edit_file(&command_line, staged.path())?;

    std::fs::read_to_string(staged.path()).map_err(|source| TemplateError::Read {
        path: staged.path().display().to_string(),
        source,
    })
}

/// Render the starter template, listing the backends found on this system.
pub fn render_starter(backends: &[String]) -> String {
    STARTER_TEMPLATE.replace(BACKENDS_PLACEHOLDER, &backends.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn args_only() {
        let names = merge_filename_sources(&strings(&["a.ini", "b.ini"]), None).unwrap();
        assert_eq!(names, vec!["a.ini", "b.ini"]);
    }

    #[test]
    fn piped_only() {
        let names = merge_filename_sources(&[], Some("a.ini 'has space.ini'\n")).unwrap();
        assert_eq!(names, vec!["a.ini", "has space.ini"]);
    }

    #[test]
    fn empty_pipe_falls_back_to_args() {
        let names = merge_filename_sources(&strings(&["a.ini"]), Some("  \n")).unwrap();
        assert_eq!(names, vec!["a.ini"]);
    }

    #[test]
    fn both_sources_conflict() {
        let err = merge_filename_sources(&strings(&["a.ini"]), Some("b.ini")).unwrap_err();
        assert!(matches!(err, TemplateError::ConflictingSources));
    }

    #[test]
    fn no_sources_is_empty() {
        assert!(merge_filename_sources(&[], None).unwrap().is_empty());
    }

    #[test]
    fn bad_pipe_tokens_error() {
        let err = merge_filename_sources(&[], Some("'unclosed")).unwrap_err();
        assert!(matches!(err, TemplateError::StdinTokens(_)));
    }

    #[test]
    fn edit_target_strips_suffix() {
        assert_eq!(edit_target("req.ini!", "!"), Some("req.ini"));
        assert_eq!(edit_target("req.ini", "!"), None);
    }

    #[test]
    fn edit_target_rejects_bare_suffix() {
        assert_eq!(edit_target("!", "!"), None);
        assert_eq!(edit_target("req.ini!", ""), None);
    }

    #[test]
    fn read_plain_template() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[Host]\nhttp://localhost\n").unwrap();
        let config = Config::default_config();
        let content = read_template(file.path().to_str().unwrap(), &config).unwrap();
        assert_eq!(content, "[Host]\nhttp://localhost\n");
    }

    #[test]
    fn read_missing_template_errors() {
        let config = Config::default_config();
        let err = read_template("/nonexistent/req.ini", &config).unwrap_err();
        assert!(matches!(err, TemplateError::Read { .. }));
    }

    #[test]
    fn starter_lists_backends() {
        let rendered = render_starter(&strings(&["curl", "wget"]));
        assert!(rendered.contains("[Backend]\ncurl\nwget"));
        assert!(!rendered.contains(BACKENDS_PLACEHOLDER));
    }

    #[test]
    fn starter_with_no_backends() {
        let rendered = render_starter(&[]);
        assert!(!rendered.contains(BACKENDS_PLACEHOLDER));
        assert!(rendered.contains("[Host]"));
    }
}
