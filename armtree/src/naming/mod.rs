//! Naming strategy applied to keys and name-bearing arguments at dump time.
//!
//! Field names are stored exactly as the caller wrote them. Conversion to
//! the provider's casing happens only when a template is dumped, driven by
//! the template's [`KeyStyle`]. A [`NoHump`] value opts a single name out
//! of conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capitalisation rule used when joining snake-case segments.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CamelStyle {
    /// `some_name` becomes `someName`.
    #[default]
    NoLeading,
    /// `some_name` becomes `SomeName`.
    Leading,
}

/// Key conversion settings held by a template.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyStyle {
    /// Whether snake-case names are converted at all.
    pub camel_keys: bool,
    /// Capitalisation applied when `camel_keys` is enabled.
    pub camel_style: CamelStyle,
}

impl Default for KeyStyle {
    fn default() -> Self {
        Self::new(true, CamelStyle::NoLeading)
    }
}

impl KeyStyle {
    /// Create a key style.
    #[must_use]
    pub const fn new(camel_keys: bool, camel_style: CamelStyle) -> Self {
        Self {
            camel_keys,
            camel_style,
        }
    }

    /// A style that leaves every name untouched.
    #[must_use]
    pub const fn verbatim() -> Self {
        Self::new(false, CamelStyle::NoLeading)
    }

    /// Render `key` according to this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use armtree::{Key, KeyStyle, NoHumpExt};
    /// let style = KeyStyle::default();
    /// assert_eq!(style.render(&Key::from("output_name")), "outputName");
    /// assert_eq!(style.render(&"stack_name".no_hump().into()), "stack_name");
    /// ```
    #[must_use]
    pub fn render(&self, key: &Key) -> String {
        match key {
            Key::Convert(name) => convert(name, self),
            Key::Verbatim(name) => name.clone(),
        }
    }
}

/// Convert a snake-case `name` according to `style`.
///
/// Only underscores separate segments. Each segment has its first character
/// upper-cased and keeps the rest as written, so punctuation survives
/// (`$schema`, `admin.user`) and `apiVersion` stays `apiVersion`. Leading
/// and trailing underscores are kept.
///
/// # Examples
///
/// ```
/// use armtree::{CamelStyle, KeyStyle, convert};
/// assert_eq!(convert("content_version", &KeyStyle::default()), "contentVersion");
/// assert_eq!(convert("$schema", &KeyStyle::default()), "$schema");
/// let leading = KeyStyle::new(true, CamelStyle::Leading);
/// assert_eq!(convert("some_name", &leading), "SomeName");
/// ```
#[must_use]
pub fn convert(name: &str, style: &KeyStyle) -> String {
    if !style.camel_keys {
        return name.to_owned();
    }
    let body = name.trim_start_matches('_');
    let prefix = &name[..name.len() - body.len()];
    let core = body.trim_end_matches('_');
    let suffix = &body[core.len()..];

    let joined: String = core
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(upper_first)
        .collect();
    let joined = match style.camel_style {
        CamelStyle::NoLeading => lower_first(&joined),
        CamelStyle::Leading => joined,
    };
    format!("{prefix}{joined}{suffix}")
}

fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

fn lower_first(segment: &str) -> String {
    let mut chars = segment.chars();
    chars
        .next()
        .map(|first| first.to_lowercase().chain(chars).collect())
        .unwrap_or_default()
}

/// A name that bypasses conversion.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NoHump(String);

impl NoHump {
    /// Wrap `name` so it is emitted verbatim.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the wrapped name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoHump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Adds `.no_hump()` to string types.
pub trait NoHumpExt {
    /// Mark this value as exempt from key conversion.
    fn no_hump(self) -> NoHump;
}

impl NoHumpExt for &str {
    fn no_hump(self) -> NoHump {
        NoHump::new(self)
    }
}

impl NoHumpExt for String {
    fn no_hump(self) -> NoHump {
        NoHump(self)
    }
}

/// A name as supplied by the caller, pending conversion.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Converted with the active [`KeyStyle`].
    Convert(String),
    /// Emitted exactly as written.
    Verbatim(String),
}

impl Key {
    /// The name as the caller supplied it.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Convert(name) | Self::Verbatim(name) => name,
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Convert(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Convert(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Self::Convert(name.clone())
    }
}

impl From<NoHump> for Key {
    fn from(name: NoHump) -> Self {
        Self::Verbatim(name.0)
    }
}
