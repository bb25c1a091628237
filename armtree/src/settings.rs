//! Loading [`KeyStyle`] settings through Figment.
//!
//! Defaults come from [`KeyStyle::default`]; environment variables prefixed
//! with `ARMTREE_` override them, so `ARMTREE_CAMEL_KEYS=false` disables key
//! conversion and `ARMTREE_CAMEL_STYLE=leading` selects upper camel case.
//! Callers may merge further providers into [`figment`] before extracting.

use figment::{
    Figment,
    providers::{Env, Serialized},
};

use crate::{ArmError, ArmResult, KeyStyle};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ARMTREE_";

/// The default provider stack for key style settings.
#[must_use]
pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(KeyStyle::default())).merge(Env::prefixed(ENV_PREFIX))
}

/// Extract a [`KeyStyle`] from `figment`.
///
/// # Errors
///
/// Returns [`ArmError::Settings`] when a provider holds a value that does
/// not deserialise into a key style.
pub fn load_key_style(figment: &Figment) -> ArmResult<KeyStyle> {
    figment.extract().map_err(ArmError::settings)
}

/// Extract a [`KeyStyle`] from the default provider stack.
///
/// # Errors
///
/// Returns [`ArmError::Settings`] when an environment override is invalid.
pub fn load() -> ArmResult<KeyStyle> {
    load_key_style(&figment())
}
