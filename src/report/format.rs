use std::fmt;

use crate::models::ReportRow;
use crate::report::generator::ThrownReport;
use crate::utils::config::ReportConfig;

/// Accuracy table over borrowed rows, rendered through Display
pub struct ReportTable<'a> {
    pub rows: &'a [ReportRow],
    pub average_accuracy: f64,
}

/// Render the accuracy table and summary as printed on stdout
pub fn format_report(rows: &[ReportRow], average_accuracy: f64) -> String {
    ReportTable { rows, average_accuracy }.to_string()
}

impl fmt::Display for ReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = ReportConfig::default();
        let name_w = config.name_width;
        let class_w = config.class_width;
        let acc_w = config.accuracy_width;

        writeln!(f, "{:<name_w$} {:<class_w$} {:>acc_w$}", "Name", "Class", "Accuracy")?;
        writeln!(f, "{}", "-".repeat(config.separator_width))?;
        for row in self.rows {
            writeln!(
                f,
                "{:<name_w$} {:<class_w$} {:>acc_w$}",
                row.name,
                row.class.as_str(),
                row.accuracy
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {} thrown items", self.rows.len())?;
        writeln!(f, "Average accuracy: {:.2}", self.average_accuracy)
    }
}

impl fmt::Display for ThrownReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = ReportTable {
            rows: &self.rows,
            average_accuracy: self.average_accuracy,
        };
        fmt::Display::fmt(&table, f)
    }
}
