use std::path::Path;

use crate::collector::{ImageCollector, KubectlCollector};
use crate::error::AppError;
use crate::model::{ImageReport, SeverityCount};
use crate::report::{CSV_HEADER, csv_row, render_summary_table, summarize, write_csv};
use crate::scanner::{GrypeScanner, VulnScanner};

pub const REPORT_FILE: &str = "grype-per-image-report.csv";

/// Full scan run against the live cluster, writing the per-image report
/// into the current working directory.
pub fn execute() -> Result<(), AppError> {
    execute_with(&KubectlCollector, &GrypeScanner, Path::new(REPORT_FILE))
}

/// Collect, scan sequentially, fold totals, then render and persist.
pub fn execute_with(
    collector: &dyn ImageCollector,
    scanner: &dyn VulnScanner,
    report_path: &Path,
) -> Result<(), AppError> {
    let images = collector.collect()?;
    if images.is_empty() {
        return Err(AppError::EmptyInventory);
    }

    let mut total = SeverityCount::new();
    let mut per_image = Vec::with_capacity(images.len());

    for image in &images {
        println!("Scanning: {image}");
        let findings = scanner.scan(image);
        let counts = summarize(&findings);
        total.add(&counts);
        per_image.push(ImageReport::new(image, counts));
    }

    println!("\nTotal vulnerability summary:");
    println!("{}", render_summary_table(&total));

    if let Err(err) = write_csv(report_path, &per_image) {
        // The scan work is already done; surface the rows before bailing
        // so a long run's results are not lost with the file.
        eprintln!("{CSV_HEADER}");
        for report in &per_image {
            eprintln!("{}", csv_row(report));
        }
        return Err(err);
    }

    println!("\nPer-image details written to: {}", report_path.display());
    Ok(())
}
