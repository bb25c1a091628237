//! Integration tests for loading key style settings from the environment.

use anyhow::{Result, ensure};
use armtree::{CamelStyle, KeyStyle, settings};
use rstest::rstest;
use test_helpers::figment::with_env;

#[rstest]
fn defaults_apply_without_overrides() -> Result<()> {
    let style = with_env(&[], || settings::load().map_err(|err| err.to_string()))?;
    ensure!(style == KeyStyle::default(), "unexpected style: {style:?}");
    Ok(())
}

#[rstest]
#[case::disable(&[("ARMTREE_CAMEL_KEYS", "false")], KeyStyle::verbatim())]
#[case::leading(
    &[("ARMTREE_CAMEL_STYLE", "leading")],
    KeyStyle::new(true, CamelStyle::Leading)
)]
fn environment_overrides_defaults(
    #[case] vars: &[(&str, &str)],
    #[case] expected: KeyStyle,
) -> Result<()> {
    let style = with_env(vars, || settings::load().map_err(|err| err.to_string()))?;
    ensure!(style == expected, "unexpected style: {style:?}");
    Ok(())
}

#[rstest]
fn invalid_styles_are_reported() -> Result<()> {
    let outcome = with_env(&[("ARMTREE_CAMEL_STYLE", "sideways")], || {
        Ok::<_, String>(settings::load().is_err())
    })?;
    ensure!(outcome, "an unknown camel style must fail to load");
    Ok(())
}
