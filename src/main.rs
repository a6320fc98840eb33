use clap::Parser;
use kube_scan::error::AppError;
use kube_scan::run::execute;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let _cli = Cli::parse();
    execute()
}

/// Scans every container image running in the cluster with grype and
/// reports vulnerability counts by severity. Takes no flags: inventory
/// comes from kubectl, output goes to the terminal and a fixed CSV file.
#[derive(Parser)]
#[command(
    name = "kube-scan",
    version,
    about = "Scan all cluster images with grype and summarize vulnerabilities by severity."
)]
struct Cli {}
