use std::process::Command;

use crate::error::AppError;

const KUBECTL_JSONPATH: &str =
    "jsonpath={range .items[*]}{range .spec.containers[*]}{.image}{\"\\n\"}{end}{end}";

/// Source of the cluster's running image references.
pub trait ImageCollector {
    fn collect(&self) -> Result<Vec<String>, AppError>;
}

/// Lists every container image across all namespaces via `kubectl`.
pub struct KubectlCollector;

impl ImageCollector for KubectlCollector {
    fn collect(&self) -> Result<Vec<String>, AppError> {
        let output = Command::new("kubectl")
            .args(["get", "pods", "--all-namespaces", "-o", KUBECTL_JSONPATH])
            .output()
            .map_err(|err| AppError::collection(format!("failed to run kubectl: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                format!("kubectl exited with status {}", output.status)
            } else {
                format!("kubectl failed: {}", stderr.trim())
            };
            return Err(AppError::Collection(message));
        }

        Ok(parse_image_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse one image reference per line, dropping blanks, deduplicating and
/// sorting lexicographically so scan order is stable across runs.
pub fn parse_image_lines(raw: &str) -> Vec<String> {
    let mut images: Vec<String> =
        raw.lines().map(str::trim).filter(|line| !line.is_empty()).map(String::from).collect();
    images.sort();
    images.dedup();
    images
}
