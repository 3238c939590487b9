//! Inline markup stripping for extracted text, and styling for rendered text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{OutputMode, RenderConfig, ThemeRole};

static LINE_BREAK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));
// Element-shaped spans only: a name, then `attr` or `attr=value` pairs.
// Comparisons such as `x<5 && y>3` or `a<b && c>d` are left alone.
static ANY_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"</?[A-Za-z][A-Za-z0-9]*",
        r"(?:\s+[A-Za-z_:][-A-Za-z0-9_:.]*",
        r#"(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'<>=]+))?)*"#,
        r"\s*/?>",
    ))
    .expect("valid tag pattern")
});
static FONT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?font[^<>]*>").expect("valid font pattern"));

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    // Must stay last so `&amp;lt;` decodes to `&lt;`, not `<`.
    ("&amp;", "&"),
];

/// Fragments the source app's rich-text renderer leaves inside plugin blurbs.
const BUNDLE_NOISE: &[&str] = &[
    "<null>",
    "[null]",
    "<StringArray sr=\"\"/>",
    "<b>",
    "</b>",
    "<i>",
    "</i>",
    "<u>",
    "</u>",
    "<big>",
    "</big>",
    "<small>",
    "</small>",
    "<tt>",
    "</tt>",
];

/// Remove rich-text tags and unescape the common HTML entities. `<br>` tags
/// become line breaks so they reach the continuation-line handling.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    if !text.contains('<') && !text.contains('&') {
        return text.to_string();
    }
    let with_breaks = LINE_BREAK_TAG.replace_all(text, "\n");
    let without_tags = ANY_TAG.replace_all(&with_breaks, "");
    unescape_entities(&without_tags)
}

fn unescape_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| {
            acc.replace(entity, plain)
        })
}

/// Strip plugin-renderer noise from a bundle blurb.
#[must_use]
pub fn strip_bundle_noise(text: &str) -> String {
    let without_fonts = FONT_TAG.replace_all(text, "");
    let cleaned = BUNDLE_NOISE
        .iter()
        .fold(without_fonts.into_owned(), |acc, noise| acc.replace(noise, ""));
    strip_markup(cleaned.trim())
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Applies theme colors to rendered fragments.
///
/// In HTML mode every line of a fragment gets its own span, so splitting a
/// styled string on `\n` always yields balanced markup.
#[derive(Debug, Clone, Copy)]
pub struct Styler<'a> {
    config: &'a RenderConfig,
}

impl<'a> Styler<'a> {
    #[must_use]
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn paint(&self, role: ThemeRole, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match self.config.mode {
            OutputMode::Plain => text.to_string(),
            OutputMode::Html => {
                let color = self.config.theme.color(role);
                text.split('\n')
                    .map(|line| {
                        if line.is_empty() {
                            String::new()
                        } else {
                            format!(
                                "<span style=\"color:{}\">{}</span>",
                                color,
                                escape_html(line)
                            )
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }

    /// Emphasized (bold) variant of [`Styler::paint`], used for display names.
    #[must_use]
    pub fn strong(&self, role: ThemeRole, text: &str) -> String {
        let painted = self.paint(role, text);
        match self.config.mode {
            OutputMode::Html if !painted.is_empty() => format!("<b>{painted}</b>"),
            _ => painted,
        }
    }
}
