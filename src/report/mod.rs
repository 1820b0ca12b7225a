pub mod format;
pub mod generator;

pub use format::{format_report, ReportTable};
pub use generator::{generate_report, generate_report_with, ThrownReport};
