use std::process::Command;

use serde::Deserialize;

use crate::model::Finding;

/// Per-image vulnerability scanner. Implementations must isolate failures:
/// an unscannable image yields an empty finding list, never an error.
pub trait VulnScanner {
    fn scan(&self, image: &str) -> Vec<Finding>;
}

/// Invokes `grype <image> -o json` and extracts the match list.
pub struct GrypeScanner;

impl VulnScanner for GrypeScanner {
    fn scan(&self, image: &str) -> Vec<Finding> {
        let output = match Command::new("grype").args([image, "-o", "json"]).output() {
            Ok(output) => output,
            Err(err) => {
                eprintln!("Warning: failed to scan {image}: {err}");
                return Vec::new();
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.trim().is_empty() {
                eprintln!("Warning: failed to scan {image}: grype exited with {}", output.status);
            } else {
                eprintln!("Warning: failed to scan {image}: {}", stderr.trim());
            }
            return Vec::new();
        }

        match parse_grype_output(&output.stdout) {
            Ok(findings) => findings,
            Err(err) => {
                eprintln!("Warning: failed to scan {image}: unparseable grype output: {err}");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GrypeReport {
    #[serde(default)]
    matches: Vec<GrypeMatch>,
}

#[derive(Debug, Deserialize)]
struct GrypeMatch {
    #[serde(default)]
    vulnerability: GrypeVulnerability,
}

#[derive(Debug, Default, Deserialize)]
struct GrypeVulnerability {
    severity: Option<String>,
}

/// Map each entry of the top-level `matches` array to a finding carrying
/// the severity at `.vulnerability.severity`, when present.
pub fn parse_grype_output(raw: &[u8]) -> Result<Vec<Finding>, serde_json::Error> {
    let report: GrypeReport = serde_json::from_slice(raw)?;
    Ok(report
        .matches
        .into_iter()
        .map(|m| Finding { severity: m.vulnerability.severity })
        .collect())
}
