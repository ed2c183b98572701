//! Human and JSON rendering of a [`ScanResult`].

use std::io::{self, Write};

use crate::checker::ScanResult;

/// Output format for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

/// Write `result` in the requested format.
pub fn write_report(
    result: &ScanResult,
    format: ReportFormat,
    out: &mut dyn Write,
) -> io::Result<()> {
    match format {
        ReportFormat::Human => write_human(result, out),
        ReportFormat::Json => write_json(result, out),
    }
}

/// One line per missing variable, with the place it is first referenced,
/// or a single success line. Skipped files are listed last.
pub fn write_human(result: &ScanResult, out: &mut dyn Write) -> io::Result<()> {
    if result.is_complete() {
        writeln!(
            out,
            "All environment variables are properly set ({} referenced).",
            result.found().len()
        )?;
    } else {
        writeln!(out, "Missing environment variables ({}):", result.missing().len())?;
        for name in result.missing() {
            match result.first_seen(name) {
                Some(location) => writeln!(out, "  - {name} (first used at {location})")?,
                None => writeln!(out, "  - {name}")?,
            }
        }
    }

    if !result.skipped().is_empty() {
        writeln!(out, "Skipped {} file(s):", result.skipped().len())?;
        for skipped in result.skipped() {
            writeln!(out, "  - {}: {}", skipped.path.display(), skipped.reason)?;
        }
    }
    Ok(())
}

pub fn write_json(result: &ScanResult, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result).map_err(io::Error::other)?;
    writeln!(out)
}

/// Render the human report to a string.
pub fn render_human(result: &ScanResult) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_human(result, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
