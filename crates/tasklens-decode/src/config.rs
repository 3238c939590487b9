//! Render configuration loading.

#![allow(missing_docs)]

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::ConfigError;

pub const DEFAULT_CONTINUATION_CAP: usize = 40;
pub const DEFAULT_CONTINUATION_MARKER: &str = "... ";
const PLAIN_INDENT_UNIT: &str = "    ";
const HTML_INDENT_UNIT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

/// Whether rendered lines carry inline styling spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Html,
}

impl OutputMode {
    fn parse(text: &str) -> Result<Self, ConfigError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "html" => Ok(Self::Html),
            _ => Err(ConfigError::Invalid(
                format!("invalid render.mode '{text}'").into(),
            )),
        }
    }

    fn default_indent_unit(self) -> &'static str {
        match self {
            Self::Plain => PLAIN_INDENT_UNIT,
            Self::Html => HTML_INDENT_UNIT,
        }
    }
}

/// Styling roles a rendered line is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeRole {
    ActionName,
    ActionArgs,
    Condition,
    Label,
    Disabled,
    ContinueOnError,
    Deprecated,
    Unmapped,
    Diagnostic,
    Continuation,
    Heading,
}

impl ThemeRole {
    pub const ALL: [ThemeRole; 11] = [
        Self::ActionName,
        Self::ActionArgs,
        Self::Condition,
        Self::Label,
        Self::Disabled,
        Self::ContinueOnError,
        Self::Deprecated,
        Self::Unmapped,
        Self::Diagnostic,
        Self::Continuation,
        Self::Heading,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::ActionName => "action_name",
            Self::ActionArgs => "action_args",
            Self::Condition => "condition",
            Self::Label => "label",
            Self::Disabled => "disabled",
            Self::ContinueOnError => "continue_on_error",
            Self::Deprecated => "deprecated",
            Self::Unmapped => "unmapped",
            Self::Diagnostic => "diagnostic",
            Self::Continuation => "continuation",
            Self::Heading => "heading",
        }
    }

    fn parse(text: &str) -> Result<Self, ConfigError> {
        let normalized = text.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|role| role.key() == normalized)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown theme role '{text}'").into()))
    }

    fn default_color(self) -> &'static str {
        match self {
            Self::ActionName => "DarkOrange",
            Self::ActionArgs => "SlateGray",
            Self::Condition => "DodgerBlue",
            Self::Label => "MediumOrchid",
            Self::Disabled => "Crimson",
            Self::ContinueOnError => "Goldenrod",
            Self::Deprecated => "Gray",
            Self::Unmapped => "Red",
            Self::Diagnostic => "Red",
            Self::Continuation => "DimGray",
            Self::Heading => "Navy",
        }
    }
}

impl fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Role to color map handed to the engine by the report collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    colors: IndexMap<ThemeRole, SmolStr>,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = ThemeRole::ALL
            .into_iter()
            .map(|role| (role, SmolStr::new(role.default_color())))
            .collect();
        Self { colors }
    }
}

impl Theme {
    #[must_use]
    pub fn color(&self, role: ThemeRole) -> &str {
        self.colors
            .get(&role)
            .map_or_else(|| role.default_color(), SmolStr::as_str)
    }

    pub fn set(&mut self, role: ThemeRole, color: impl Into<SmolStr>) {
        self.colors.insert(role, color.into());
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub mode: OutputMode,
    pub indent_unit: SmolStr,
    pub continuation_cap: usize,
    pub continuation_marker: SmolStr,
    pub theme: Theme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::html()
    }
}

impl RenderConfig {
    #[must_use]
    pub fn html() -> Self {
        Self::for_mode(OutputMode::Html)
    }

    #[must_use]
    pub fn plain() -> Self {
        Self::for_mode(OutputMode::Plain)
    }

    fn for_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            indent_unit: SmolStr::new(mode.default_indent_unit()),
            continuation_cap: DEFAULT_CONTINUATION_CAP,
            continuation_marker: SmolStr::new(DEFAULT_CONTINUATION_MARKER),
            theme: Theme::default(),
        }
    }

    /// Switch output mode. An indent unit still at the old mode's default
    /// follows the new mode.
    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        if self.indent_unit.as_str() == self.mode.default_indent_unit() {
            self.indent_unit = SmolStr::new(mode.default_indent_unit());
        }
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_continuation_cap(mut self, cap: usize) -> Self {
        self.continuation_cap = cap;
        self
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string().into(),
            message: err.to_string().into(),
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: ConfigToml =
            toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string().into()))?;
        raw.into_config()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    render: Option<RenderSection>,
    theme: Option<IndexMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    mode: Option<String>,
    indent_unit: Option<String>,
    continuation_cap: Option<usize>,
    continuation_marker: Option<String>,
}

impl ConfigToml {
    fn into_config(self) -> Result<RenderConfig, ConfigError> {
        let render = self.render.unwrap_or_default();
        let mode = match render.mode.as_deref() {
            Some(text) => OutputMode::parse(text)?,
            None => OutputMode::Html,
        };
        let mut config = RenderConfig::for_mode(mode);

        if let Some(unit) = render.indent_unit {
            if unit.is_empty() {
                return Err(ConfigError::Invalid(
                    "render.indent_unit must not be empty".into(),
                ));
            }
            config.indent_unit = unit.into();
        }
        if let Some(cap) = render.continuation_cap {
            if cap == 0 {
                return Err(ConfigError::Invalid(
                    "render.continuation_cap must be at least 1".into(),
                ));
            }
            config.continuation_cap = cap;
        }
        if let Some(marker) = render.continuation_marker {
            config.continuation_marker = marker.into();
        }
        for (key, color) in self.theme.unwrap_or_default() {
            let role = ThemeRole::parse(&key)?;
            if color.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    format!("theme.{key} must not be empty").into(),
                ));
            }
            config.theme.set(role, color.trim());
        }
        Ok(config)
    }
}
