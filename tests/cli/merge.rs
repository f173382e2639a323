use std::{io::Write, process::Stdio};

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr};

const HEADER: &str = "# Glossary in tab-separated format -*- coding: utf-8 -*-";

#[test]
fn test_merge_deduplicates_and_prefers_annotated_entries() -> Result<()> {
    let test = CliTest::with_file("glossaries/a.txt", "cat\tchat\ndog\tchien\tanimal\n")?;
    test.write_file("glossaries/b.txt", "cat\tchat\tfeline\ncat\tchat\n")?;

    assert_cmd_snapshot!(test.merge_command().args(["glossaries", "--output", "merged.txt"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Merged 2 glossary files into merged.txt (2 entries)

    ----- stderr -----
    ");

    assert_eq!(
        test.read_file("merged.txt")?,
        format!("{HEADER}\ncat\tchat\tfeline\ndog\tchien\tanimal\n")
    );

    Ok(())
}

#[test]
fn test_merge_drops_entries_without_target_or_note() -> Result<()> {
    let test = CliTest::with_file(
        "glossaries/terms.tab",
        "# comment\n\nempty\t\t\nbare\nfile\t\tnoun\n",
    )?;

    assert_cmd_snapshot!(
        test.merge_command().args(["glossaries", "-o", "merged.txt", "--verbose"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
      read glossaries/terms.tab
      - entries read: 1
      - discarded (no target, no note): 2
      - exact duplicates: 0
      - replaced by annotated entries: 0
    ✓ Merged 1 glossary file into merged.txt (1 entry)

    ----- stderr -----
    Note: No .omtrc.json found, using default configuration
    "
    );

    assert_eq!(
        test.read_file("merged.txt")?,
        format!("{HEADER}\nfile\t\tnoun\n")
    );

    Ok(())
}

#[test]
fn test_merge_ignores_previous_output_in_same_folder() -> Result<()> {
    let test = CliTest::with_file("glossaries/a.txt", "cat\tchat\n")?;
    test.write_file("glossaries/merged.txt", "stale\tentry\n")?;
    test.write_file("glossaries/notes.md", "not\ta glossary\n")?;

    assert_cmd_snapshot!(
        test.merge_command().args(["glossaries", "--output", "glossaries/merged.txt"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Merged 1 glossary file into glossaries/merged.txt (1 entry)

    ----- stderr -----
    "
    );

    assert_eq!(
        test.read_file("glossaries/merged.txt")?,
        format!("{HEADER}\ncat\tchat\t\n")
    );

    Ok(())
}

#[test]
fn test_merge_asks_for_output_name() -> Result<()> {
    let test = CliTest::with_file("glossaries/a.txt", "cat\tchat\n")?;

    let mut child = test
        .merge_command()
        .arg("glossaries")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(b"combined\n")?;
    }
    let output = child.wait_with_output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Enter name of file to save [in glossaries]"));
    assert!(test.root().join("glossaries/combined.txt").is_file());

    Ok(())
}

#[test]
fn test_merge_without_glossaries_is_an_error() -> Result<()> {
    let test = CliTest::with_file("glossaries/readme.md", "nothing here")?;

    assert_cmd_snapshot!(test.merge_command().args(["glossaries", "--output", "merged.txt"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: No glossary files matching *.txt, *.tab, *.utf8 found in glossaries
    ");

    assert!(!test.root().join("merged.txt").exists());

    Ok(())
}

#[test]
fn test_merge_missing_folder_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.merge_command().args(["missing", "--output", "merged.txt"]), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Glossary folder does not exist: missing
    ");

    Ok(())
}
