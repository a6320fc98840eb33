//! Library entry point for the kube-scan CLI.

pub mod collector;
pub mod error;
pub mod model;
pub mod report;
pub mod run;
pub mod scanner;
