use std::env;
use std::path::PathBuf;

/// Fallback when neither the configuration nor the environment names a
/// locale. Matches the lesson packs the activity ships with.
pub const DEFAULT_LOCALE: &str = "es";

/// Which toolbar layout to build. The host platform is fixed per build,
/// so this is a configuration value rather than a runtime probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolbarStyle {
    /// Toolbox layout with a collapsible customization sub-toolbar.
    #[default]
    Toolbox,
    /// Single-row layout for older hosts. No customization panel.
    Legacy,
}

/// Explicit startup configuration for the activity. Everything the
/// original read from globals or probed at runtime is passed in here.
#[derive(Debug, Clone, Default)]
pub struct ActivityConfig {
    /// Two-letter lesson locale. `None` falls back to the environment.
    pub locale: Option<String>,
    /// Root directory holding `lessons/`, `images/` and `sounds/`.
    /// `None` falls back to an installed content pack or the working dir.
    pub lessons_root: Option<PathBuf>,
    pub toolbar_style: ToolbarStyle,
}

impl ActivityConfig {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Self {
        let toolbar_style = match env::var("LETTERMATCH_TOOLBAR").as_deref() {
            Ok("legacy") => ToolbarStyle::Legacy,
            _ => ToolbarStyle::Toolbox,
        };

        Self {
            locale: env::var("LETTERMATCH_LOCALE").ok().filter(|s| !s.is_empty()),
            lessons_root: env::var("LETTERMATCH_LESSONS").ok().map(PathBuf::from),
            toolbar_style,
        }
    }

    /// Resolve the lesson locale: explicit configuration wins, then the
    /// session language environment, then the fixed default.
    pub fn resolve_locale(&self) -> String {
        if let Some(ref locale) = self.locale {
            return locale.clone();
        }
        locale_from_language_env(
            env::var("LANG").ok().as_deref(),
            env::var("LANGUAGE").ok().as_deref(),
        )
    }
}

/// Two-letter locale from `LANG`/`LANGUAGE` values, e.g. `en_US.UTF-8`
/// becomes `en`.
pub fn locale_from_language_env(lang: Option<&str>, language: Option<&str>) -> String {
    for value in [lang, language].into_iter().flatten() {
        let prefix: String = value.chars().take(2).collect();
        if prefix.len() == 2 && prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return prefix.to_lowercase();
        }
    }
    DEFAULT_LOCALE.to_string()
}
