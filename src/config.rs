use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub env: EnvConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct EditorConfig {
    /// Used when neither VISUAL nor EDITOR is set.
    #[serde(default)]
    pub fallback: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct BackendConfig {
    /// Backend names in order of preference; first PATH hit wins.
    #[serde(default)]
    pub priority: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct TemplateConfig {
    /// Filenames ending with this suffix are edited before use.
    #[serde(default)]
    pub edit_suffix: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct EnvConfig {
    /// Environment file loaded at startup when present.
    pub file: Option<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    editor: EditorOverlay,
    #[serde(default)]
    backend: BackendOverlay,
    #[serde(default)]
    template: TemplateOverlay,
    #[serde(default)]
    env: EnvOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct EditorOverlay {
    fallback: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct BackendOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    priority: Vec<String>,
    #[serde(default)]
    remove_priority: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TemplateOverlay {
    edit_suffix: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct EnvOverlay {
    file: Option<String>,
}

/// Merge an overlay list into a base list.
/// `replace = true` discards the base entirely; otherwise removals are
/// applied first and additions appended without duplicating.
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/reqforge/config.toml (if exists)
    ///
    /// Scalars override; the backend priority list extends unless
    /// `replace = true` is set in its section.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/reqforge/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/reqforge/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                log::warn!("config parse error, using defaults: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.editor.fallback {
            self.editor.fallback = v;
        }

        let b = overlay.backend;
        merge_list(
            &mut self.backend.priority,
            b.priority,
            &b.remove_priority,
            b.replace,
        );

        if let Some(v) = overlay.template.edit_suffix {
            self.template.edit_suffix = v;
        }
        if let Some(v) = overlay.env.file {
            self.env.file = Some(v);
        }
    }
}
