use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr};

fn add_project(test: &CliTest, dir: &str, memory: &str, glossary: Option<&str>) -> Result<()> {
    test.write_file(&format!("{dir}/omegat.project"), "<omegat/>")?;
    test.write_file(&format!("{dir}/omegat/project_save.tmx"), memory)?;
    if let Some(glossary) = glossary {
        test.write_file(&format!("{dir}/glossary/glossary.txt"), glossary)?;
    }
    Ok(())
}

#[test]
fn test_collect_copies_memory_and_glossary() -> Result<()> {
    let test = CliTest::new()?;
    add_project(&test, "work/alpha", "alpha-tm", Some("alpha-glossary"))?;
    add_project(&test, "work/clients/beta", "beta-tm", None)?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.collect_command().args(["work", "--dest", "collected"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Copying [ROOT]/work/alpha/omegat/project_save.tmx to collected/alpha/alpha.tmx
    Copying [ROOT]/work/alpha/glossary/glossary.txt to collected/alpha/alpha.txt
    Copying [ROOT]/work/clients/beta/omegat/project_save.tmx to collected/beta/beta.tmx
    ✓ Copied 3 files from 2 projects into collected

    ----- stderr -----
    ");

    assert_eq!(test.read_file("collected/alpha/alpha.tmx")?, "alpha-tm");
    assert_eq!(test.read_file("collected/alpha/alpha.txt")?, "alpha-glossary");
    assert_eq!(test.read_file("collected/beta/beta.tmx")?, "beta-tm");
    assert!(!test.root().join("collected/beta/beta.txt").exists());

    Ok(())
}

#[test]
fn test_collect_skips_team_mirrors() -> Result<()> {
    let test = CliTest::new()?;
    add_project(&test, "work/alpha", "alpha-tm", None)?;
    add_project(&test, "work/.repositories/alpha", "mirror-tm", None)?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(
        test.collect_command().args(["work", "--dest", "collected", "--verbose"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Copying [ROOT]/work/alpha/omegat/project_save.tmx to collected/alpha/alpha.tmx
    ✓ Copied 1 file from 1 project into collected

    ----- stderr -----
    Note: No .omtrc.json found, using default configuration
      skipped team mirror: [ROOT]/work/.repositories/alpha
      missing: [ROOT]/work/alpha/glossary/glossary.txt
    "
    );

    assert_eq!(test.read_file("collected/alpha/alpha.tmx")?, "alpha-tm");

    Ok(())
}

#[test]
fn test_collect_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    add_project(&test, "work/alpha", "alpha-tm", Some("alpha-glossary"))?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(
        test.collect_command().args(["work", "--dest", "collected", "--dry-run"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
      [ROOT]/work/alpha/omegat/project_save.tmx -> collected/alpha/alpha.tmx
      [ROOT]/work/alpha/glossary/glossary.txt -> collected/alpha/alpha.txt
    Would copy 2 files from 1 project into collected.
    Run without --dry-run to copy these files.

    ----- stderr -----
    "
    );

    assert!(!test.root().join("collected").exists());

    Ok(())
}

#[test]
fn test_collect_uses_configured_layout() -> Result<()> {
    let test = CliTest::with_file(
        ".omtrc.json",
        r#"{ "files": { "projectMarker": "project.xml", "memory": "tm/save.tmx" } }"#,
    )?;
    test.write_file("work/gamma/project.xml", "")?;
    test.write_file("work/gamma/tm/save.tmx", "gamma-tm")?;

    let output = test
        .collect_command()
        .args(["work", "--dest", "collected"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("collected/gamma/gamma.tmx")?, "gamma-tm");

    Ok(())
}

#[test]
fn test_collect_without_projects_warns() -> Result<()> {
    let test = CliTest::with_file("work/readme.txt", "no projects")?;

    assert_cmd_snapshot!(test.collect_command().args(["work", "--dest", "collected"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    warning: No OmegaT projects found in work
    ");

    Ok(())
}

#[test]
fn test_collect_missing_search_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.collect_command().args(["missing", "--dest", "collected"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Search folder does not exist: missing
    ");

    Ok(())
}
