use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::model::{Finding, ImageReport, Severity, SeverityCount};

pub const CSV_HEADER: &str = "Image,Critical,High,Medium,Low";

/// Count occurrences of each recognized severity in one image's findings.
/// Unrecognized or missing labels contribute to no bucket.
pub fn summarize(findings: &[Finding]) -> SeverityCount {
    let mut counts = SeverityCount::new();
    for finding in findings {
        if let Some(label) = &finding.severity
            && let Some(severity) = Severity::from_label(label)
        {
            counts.increment(severity);
        }
    }
    counts
}

/// Render the cumulative totals as a single-row grid table with the fixed
/// column order Critical | High | Medium | Low.
pub fn render_summary_table(total: &SeverityCount) -> String {
    let values: Vec<String> =
        Severity::ALL.iter().map(|severity| total.get(*severity).to_string()).collect();
    let widths: Vec<usize> = Severity::ALL
        .iter()
        .zip(&values)
        .map(|(severity, value)| severity.as_str().len().max(value.len()))
        .collect();

    let border = grid_line(&widths, '-');
    let mut table = String::new();
    table.push_str(&border);
    table.push('\n');
    table.push_str(&grid_row(
        &Severity::ALL.iter().map(|s| s.as_str().to_string()).collect::<Vec<_>>(),
        &widths,
    ));
    table.push('\n');
    table.push_str(&grid_line(&widths, '='));
    table.push('\n');
    table.push_str(&grid_row(&values, &widths));
    table.push('\n');
    table.push_str(&border);
    table
}

fn grid_line(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line
}

fn grid_row(cells: &[String], widths: &[usize]) -> String {
    let mut row = String::from("|");
    for (cell, &width) in cells.iter().zip(widths) {
        row.push_str(&format!(" {cell:<width$} |"));
    }
    row
}

/// Encode one per-image row, quoting the image field when it contains a
/// delimiter, quote, or newline.
pub fn csv_row(report: &ImageReport) -> String {
    let mut fields = vec![csv_field(&report.image)];
    for severity in Severity::ALL {
        fields.push(report.counts.get(severity).to_string());
    }
    fields.join(",")
}

pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write the per-image breakdown, overwriting any existing file. Rows keep
/// scan order.
pub fn write_csv(path: &Path, reports: &[ImageReport]) -> Result<(), AppError> {
    let render = |err| AppError::ReportWrite { path: path.display().to_string(), source: err };
    let mut file = fs::File::create(path).map_err(render)?;
    writeln!(file, "{CSV_HEADER}").map_err(render)?;
    for report in reports {
        writeln!(file, "{}", csv_row(report)).map_err(render)?;
    }
    Ok(())
}
