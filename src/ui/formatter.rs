//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text and are testable; `display_*`
//! functions print it.

use console::style;

use crate::domain::BuildKind;
use crate::stamper::StampReport;
use crate::warnings::StampWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning on stderr.
pub fn display_warning(warning: &StampWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Build the per-placeholder summary lines of a report.
///
/// One line per placeholder, in token order, e.g. `  {API_VERSION} x2`.
pub fn format_report_lines(report: &StampReport) -> Vec<String> {
    report
        .counts
        .iter()
        .map(|(placeholder, count)| format!("  {} x{}", placeholder, count))
        .collect()
}

/// Headline describing the outcome of a run
pub fn format_outcome(report: &StampReport) -> String {
    let kind = match report.build_kind {
        BuildKind::Release => "release build",
        BuildKind::Development => "development build",
    };

    if report.dry_run {
        format!(
            "Dry run: would stamp {} as {} ({}), {} replacement(s)",
            report.path.display(),
            report.software_version,
            kind,
            report.total_replacements()
        )
    } else if report.written {
        format!(
            "Stamped {} as {} ({}), {} replacement(s)",
            report.path.display(),
            report.software_version,
            kind,
            report.total_replacements()
        )
    } else {
        format!("{} already up to date", report.path.display())
    }
}

/// Display the outcome of a run followed by its replacement counts.
pub fn display_report(report: &StampReport) {
    println!("\n{}", style("Placeholders replaced:").bold());
    for line in format_report_lines(report) {
        println!("{}", line);
    }
    display_success(&format_outcome(report));
}
