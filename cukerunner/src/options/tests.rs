//! Tests for options composition and parsing.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::*;
use crate::CukeError;

fn settings_from(pairs: &[(&str, &str)]) -> CukeResult<RunnerSettings> {
    let props: Properties = pairs.iter().copied().collect();
    RunnerSettings::from_properties(&props)
}

#[test]
fn defaults_fill_optional_positions() -> Result<()> {
    let settings = settings_from(&[
        ("steps.package", "com.example.steps"),
        ("features.directory", "src/test/resources/features"),
    ])?;
    ensure!(
        settings.options_blob().as_str()
            == "--tags @web --glue com.example.steps --plugin pretty --plugin html:report \
                --plugin json:target/report/cucumber/cucumber.json src/test/resources/features",
        "unexpected blob {}",
        settings.options_blob()
    );
    Ok(())
}

#[test]
fn configured_values_are_used_verbatim() -> Result<()> {
    let settings = settings_from(&[
        ("tags", "@smoke"),
        ("steps.package", "steps::checkout"),
        ("cucumber.report.directory", "out/reports/"),
        ("features.directory", "features"),
    ])?;
    ensure!(settings.json_report_path() == "out/reports//cucumber.json");
    ensure!(
        settings.options_blob().to_string()
            == "--tags @smoke --glue steps::checkout --plugin pretty --plugin html:report \
                --plugin json:out/reports//cucumber.json features"
    );
    Ok(())
}

#[rstest]
#[case(&[("features.directory", "f")], "steps.package")]
#[case(&[("steps.package", "s")], "features.directory")]
#[case(&[("steps.package", ""), ("features.directory", "f")], "steps.package")]
#[case(&[("steps.package", "s"), ("features.directory", "")], "features.directory")]
#[case(&[], "steps.package")]
fn missing_mandatory_key_is_named(#[case] pairs: &[(&str, &str)], #[case] key: &str) {
    let err = settings_from(pairs).err();
    assert_eq!(err.as_ref().and_then(CukeError::missing_key), Some(key));
}

#[test]
fn typed_options_agree_with_parsed_blob() -> Result<()> {
    let settings = settings_from(&[
        ("tags", "@web"),
        ("steps.package", "com.example.steps"),
        ("features.directory", "src/test/resources/features"),
    ])?;
    let built = RuntimeOptions::try_from(&settings)?;
    let parsed = RuntimeOptions::parse(settings.options_blob().as_str())?;
    ensure!(built == parsed, "built {built:?} != parsed {parsed:?}");
    ensure!(built.blob() == &settings.options_blob());
    ensure!(
        built.plugins()
            == [
                Plugin::Pretty,
                Plugin::Html("report".into()),
                Plugin::Json("target/report/cucumber/cucumber.json".into()),
            ]
    );
    Ok(())
}

#[rstest]
#[case::bare_words("@web and not @slow", &["@web"], &["and", "not", "@slow", "f"])]
#[case::quoted("'@web and not @slow'", &["@web and not @slow"], &["f"])]
fn whitespace_in_values_splits_like_the_blob(
    #[case] tags: &str,
    #[case] expected_tags: &[&str],
    #[case] expected_features: &[&str],
) -> Result<()> {
    let settings = settings_from(&[
        ("tags", tags),
        ("steps.package", "s"),
        ("features.directory", "f"),
    ])?;
    let built = RuntimeOptions::try_from(&settings)?;
    let parsed = RuntimeOptions::parse(settings.options_blob().as_str())?;
    ensure!(built == parsed, "built {built:?} != parsed {parsed:?}");
    ensure!(
        built.tag_filters() == expected_tags,
        "unexpected tags {:?}",
        built.tag_filters()
    );
    let features = built
        .feature_paths()
        .iter()
        .map(camino::Utf8PathBuf::as_path)
        .map(camino::Utf8Path::as_str)
        .collect::<Vec<_>>();
    ensure!(features == expected_features, "unexpected features {features:?}");
    Ok(())
}

#[test]
fn unbalanced_quote_in_a_value_fails_composition() -> Result<()> {
    let settings = settings_from(&[
        ("tags", "@it's"),
        ("steps.package", "s"),
        ("features.directory", "f"),
    ])?;
    match RuntimeOptions::try_from(&settings) {
        Err(CukeError::OptionsSyntax { blob }) => {
            ensure!(blob == settings.options_blob().as_str());
            Ok(())
        }
        other => Err(anyhow!("expected a syntax error, got {other:?}")),
    }
}

#[test]
fn repeated_flags_accumulate() -> Result<()> {
    let options =
        RuntimeOptions::parse("--glue a --glue b --tags @x --plugin pretty one.feature two")?;
    ensure!(options.glue() == ["a", "b"]);
    ensure!(options.tag_filters() == ["@x"]);
    ensure!(options.feature_paths().len() == 2);
    Ok(())
}

#[rstest]
#[case("--tags '@web")]
#[case("--tags \"@web")]
fn unbalanced_quotes_are_rejected(#[case] blob: &str) -> Result<()> {
    match RuntimeOptions::parse(blob) {
        Err(CukeError::OptionsSyntax { .. }) => Ok(()),
        other => Err(anyhow!("expected a syntax error, got {other:?}")),
    }
}

#[rstest]
#[case("--strict features")]
#[case("--plugin :out features")]
fn invalid_flags_are_rejected(#[case] blob: &str) -> Result<()> {
    match RuntimeOptions::parse(blob) {
        Err(CukeError::OptionsParsing(_)) => Ok(()),
        other => Err(anyhow!("expected a parse error, got {other:?}")),
    }
}

#[test]
fn blob_text_survives_conversion() -> Result<()> {
    let settings = settings_from(&[("steps.package", "s"), ("features.directory", "f")])?;
    let blob = settings.options_blob();
    let rendered = blob.to_string();
    ensure!(blob.as_ref() == rendered.as_str());
    ensure!(blob.into_string() == rendered);
    Ok(())
}
