use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["paths"]["projects"], "~/Documents");
    assert_eq!(parsed["files"]["projectMarker"], "omegat.project");
    assert_eq!(parsed["files"]["memory"], "omegat/project_save.tmx");
    assert_eq!(parsed["files"]["glossary"], "glossary/glossary.txt");
    assert!(
        parsed["translators"].is_object(),
        "Config should have a 'translators' map"
    );

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .omtrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".omtrc.json").exists());
    let content = test.read_file(".omtrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".omtrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ Error: .omtrc.json already exists
    ");

    assert_eq!(test.read_file(".omtrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("glossaries/a.txt", "cat\tchat\n")?;

    let output = test
        .merge_command()
        .args(["glossaries", "--output", "merged.txt"])
        .output()?;
    assert!(
        output.status.success(),
        "Merge should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".omtrc.json", "{ not json")?;
    test.write_file("glossaries/a.txt", "cat\tchat\n")?;

    let output = test
        .merge_command()
        .args(["glossaries", "--output", "merged.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to parse config file:"));

    Ok(())
}
