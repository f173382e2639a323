//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow omt to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CollectSummary, CommandResult, CommandSummary, ExtractSummary, InitSummary, MergeSummary,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Progress and results go to `out`; warnings, errors and verbose notes go
/// to `err`.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Collect(summary) => print_collect(summary, verbose, out, err),
        CommandSummary::Merge(summary) => print_merge(summary, verbose, out),
        CommandSummary::Extract(summary) => print_extract(summary, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn warning<E: Write>(err: &mut E, message: &str) {
    let _ = writeln!(err, "{} {}", "warning:".bold().yellow(), message);
}

fn print_collect<O: Write, E: Write>(
    summary: &CollectSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let plan = &summary.plan;

    if verbose {
        for mirror in &summary.scan.mirrors {
            let _ = writeln!(err, "  skipped team mirror: {}", mirror.display());
        }
        for missing in &plan.missing {
            let _ = writeln!(err, "  missing: {}", missing.display());
        }
    }
    if summary.scan.skipped_count > 0 {
        warning(
            err,
            &format!(
                "{} could not be read during the scan",
                plural(summary.scan.skipped_count, "path", "paths")
            ),
        );
    }
    for name in &plan.duplicate_names {
        warning(
            err,
            &format!(
                "several projects are named \"{}\"; the last one overwrites the others",
                name
            ),
        );
    }

    if summary.scan.projects.is_empty() {
        warning(
            err,
            &format!(
                "No OmegaT projects found in {}",
                summary.search_root.display()
            ),
        );
        return;
    }

    let files = plural(plan.operations.len(), "file", "files");
    let projects = plural(summary.scan.projects.len(), "project", "projects");

    match &summary.stats {
        None => {
            for op in &plan.operations {
                let _ = writeln!(out, "  {} -> {}", op.source.display(), op.target.display());
            }
            let _ = writeln!(
                out,
                "{} {} from {} into {}.",
                "Would copy".yellow().bold(),
                files,
                projects,
                plan.destination.display()
            );
            let _ = writeln!(out, "Run without {} to copy these files.", "--dry-run".cyan());
        }
        Some(stats) => {
            for op in &plan.operations {
                let _ = writeln!(
                    out,
                    "Copying {} to {}",
                    op.source.display(),
                    op.target.display()
                );
            }
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Copied {} from {} into {}",
                    plural(stats.files_copied, "file", "files"),
                    projects,
                    plan.destination.display()
                )
                .green()
            );
        }
    }
}

fn print_merge<O: Write>(summary: &MergeSummary, verbose: bool, out: &mut O) {
    let merge = &summary.merge;

    if verbose {
        for file in &merge.files {
            let _ = writeln!(out, "  read {}", file.display());
        }
        let _ = writeln!(out, "  - entries read: {}", merge.merged.entries_read);
        let _ = writeln!(out, "  - discarded (no target, no note): {}", merge.discarded);
        let _ = writeln!(out, "  - exact duplicates: {}", merge.merged.exact_duplicates);
        let _ = writeln!(
            out,
            "  - replaced by annotated entries: {}",
            merge.merged.redundant
        );
    }

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Merged {} into {} ({})",
            plural(merge.files.len(), "glossary file", "glossary files"),
            summary.output.display(),
            plural(merge.entries().len(), "entry", "entries")
        )
        .green()
    );
}

fn print_extract<O: Write, E: Write>(
    summary: &ExtractSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let extraction = &summary.extraction;

    if extraction.files.is_empty() {
        warning(
            err,
            &format!(
                "None of the configured translators appear in {}",
                extraction.source.display()
            ),
        );
    }

    for file in &extraction.files {
        let _ = writeln!(
            out,
            "  {} ({})",
            file.path.display(),
            plural(file.unit_count, "unit", "units")
        );
    }

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} of {} into {}",
            extraction.extracted_units(),
            plural(extraction.total_units, "unit", "units"),
            plural(extraction.files.len(), "file", "files")
        )
        .green()
    );

    let excluded = &extraction.excluded;
    if excluded.total() > 0 {
        let _ = writeln!(
            out,
            "Excluded {}: {} revised, {} by unknown translators, {} untranslated",
            plural(excluded.total(), "unit", "units"),
            excluded.revised,
            excluded.unknown,
            excluded.untranslated
        );
    }
    if verbose {
        let _ = writeln!(out, "  target language: {}", extraction.target_language);
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    match &summary.error {
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
        Some(error) => {
            let _ = writeln!(err, "{} Error: {}", FAILURE_MARK.red(), error);
        }
    }
}

// ============================================================
// Tests
// ============================================================
