use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Fixed column order for every report surface.
    pub const ALL: [Severity; 4] =
        [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

    /// Match a raw scanner label against the recognized set, ignoring case.
    /// Anything outside the four labels is excluded from all counts.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One vulnerability match reported by the scanner, reduced to the raw
/// severity label it carried (absent when the match had none).
#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Option<String>,
}

impl Finding {
    pub fn new<S: Into<String>>(severity: S) -> Self {
        Finding { severity: Some(severity.into()) }
    }

    pub fn unlabeled() -> Self {
        Finding { severity: None }
    }
}

/// Counts per recognized severity. Increment-only during aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityCount {
    counts: BTreeMap<Severity, u64>,
}

impl SeverityCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, severity: Severity) {
        *self.counts.entry(severity).or_insert(0) += 1;
    }

    pub fn get(&self, severity: Severity) -> u64 {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    /// Element-wise addition; the fold is associative and commutative, so
    /// the final total never depends on accumulation order.
    pub fn add(&mut self, other: &SeverityCount) {
        for severity in Severity::ALL {
            let count = other.get(severity);
            if count > 0 {
                *self.counts.entry(severity).or_insert(0) += count;
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// One row of the per-image output: an image reference and its counts.
#[derive(Debug, Clone)]
pub struct ImageReport {
    pub image: String,
    pub counts: SeverityCount,
}

impl ImageReport {
    pub fn new<S: Into<String>>(image: S, counts: SeverityCount) -> Self {
        ImageReport { image: image.into(), counts }
    }
}
