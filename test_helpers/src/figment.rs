//! Shared helpers for working with `figment::Jail` in tests.
//!
//! Settings tests inject environment overrides inside a jail so they never
//! leak into other tests. These helpers run the jail and hand the closure's
//! output back as an `anyhow::Result`.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when the closure
/// returns an error.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Runs `f` with each `(name, value)` environment variable set inside a jail.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or `f` fails.
pub fn with_env<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce() -> Result<T, String>,
{
    with_jail(|jail| {
        for (name, value) in vars {
            jail.set_env(name, value);
        }
        f().map_err(figment::Error::from)
    })
}
