//! Step definitions for the runner scenarios.

use anyhow::{Context, Result, anyhow, ensure};
use cukerunner::{CukeRunner, ParentRunner, PropertySource};
use rstest_bdd_macros::{given, then, when};
use test_helpers::properties::PropertiesFixture;
use test_helpers::runtime::FakeFactory;

use crate::fixtures::RunnerWorld;

#[given("the properties file contains {line:string}")]
fn properties_line(world: &RunnerWorld, line: &str) {
    let mut text = world.properties_text.take().unwrap_or_default();
    text.push_str(line);
    text.push('\n');
    world.properties_text.set(text);
}

#[given("no properties file exists")]
fn no_properties_file(world: &RunnerWorld) {
    world.properties_missing.set(true);
}

#[given("the runtime discovers {layout:string}")]
fn runtime_discovers(world: &RunnerWorld, layout: &str) -> Result<()> {
    let factory = FakeFactory::new(layout)?;
    world.factory.replace(Some(factory));
    Ok(())
}

#[when("the runner is configured")]
fn configure_runner(world: &RunnerWorld) -> Result<()> {
    let fixture = if world.properties_missing.get().unwrap_or(false) {
        PropertiesFixture::missing()?
    } else {
        PropertiesFixture::new(&world.properties_text.get().unwrap_or_default())?
    };
    let source = PropertySource::builder()
        .without_env_var()
        .override_path(fixture.path().to_owned())
        .build();
    world.properties_file.replace(Some(fixture));

    let mut factory_slot = world.factory.borrow_mut();
    let factory = match factory_slot.take() {
        Some(factory) => factory,
        None => FakeFactory::new("")?,
    };
    match CukeRunner::new(&source, &factory) {
        Ok(runner) => {
            world
                .options_blob
                .set(runner.options().blob().as_str().to_owned());
            world.runner.replace(Some(runner));
        }
        Err(err) => {
            if let Some(key) = err.missing_key() {
                world.missing_key.set(key.to_owned());
            }
            world.error.set(err.to_string());
        }
    }
    *factory_slot = Some(factory);
    Ok(())
}

#[when("the children are run")]
fn run_children(world: &RunnerWorld) -> Result<()> {
    let runner_ref = world.runner.borrow();
    let runner = runner_ref
        .as_ref()
        .context("the runner has not been configured")?;
    let mut notifier = world.notifier.borrow_mut();
    let outcome = runner.run(&mut *notifier);
    world.run_aborted.set(outcome.is_err());
    Ok(())
}

#[then("the options blob is {expected:string}")]
fn options_blob_is(world: &RunnerWorld, expected: &str) -> Result<()> {
    let actual = world
        .options_blob
        .get()
        .ok_or_else(|| anyhow!("no options composed: {:?}", world.error.get()))?;
    ensure!(actual == expected, "expected '{expected}', got '{actual}'");
    Ok(())
}

#[then("the tag filters are {expected:string}")]
fn tag_filters_are(world: &RunnerWorld, expected: &str) -> Result<()> {
    let runner_ref = world.runner.borrow();
    let runner = runner_ref
        .as_ref()
        .context("the runner has not been configured")?;
    let filters = runner.options().tag_filters().join("|");
    ensure!(filters == expected, "expected tag filters '{expected}', got '{filters}'");
    Ok(())
}

#[then("configuration fails naming {key:string}")]
fn configuration_fails(world: &RunnerWorld, key: &str) -> Result<()> {
    let missing = world
        .missing_key
        .get()
        .ok_or_else(|| anyhow!("expected a missing-property error, got {:?}", world.error.get()))?;
    ensure!(missing == key, "expected missing key '{key}', got '{missing}'");
    let message = world.error.get().unwrap_or_default();
    ensure!(
        message.contains(key),
        "error message '{message}' does not name '{key}'"
    );
    Ok(())
}

#[then("the children are {names:string}")]
fn children_are(world: &RunnerWorld, names: &str) -> Result<()> {
    let runner_ref = world.runner.borrow();
    let runner = runner_ref
        .as_ref()
        .context("the runner has not been configured")?;
    let actual = runner
        .children()
        .iter()
        .map(|child| runner.describe_child(child).as_str())
        .collect::<Vec<_>>()
        .join(",");
    ensure!(actual == names, "expected children '{names}', got '{actual}'");
    Ok(())
}

#[then("the run completes")]
fn run_completes(world: &RunnerWorld) -> Result<()> {
    ensure!(
        world.run_aborted.get() == Some(false),
        "expected the run to complete"
    );
    Ok(())
}

#[then("the run aborts")]
fn run_aborts(world: &RunnerWorld) -> Result<()> {
    ensure!(
        world.run_aborted.get() == Some(true),
        "expected the run to abort"
    );
    Ok(())
}

#[then("the run log is {labels:string}")]
fn run_log_is(world: &RunnerWorld, labels: &str) -> Result<()> {
    let factory_ref = world.factory.borrow();
    let factory = factory_ref
        .as_ref()
        .context("no runtime factory for this scenario")?;
    let actual = factory.log_labels().join(",");
    ensure!(actual == labels, "expected run log '{labels}', got '{actual}'");
    Ok(())
}
