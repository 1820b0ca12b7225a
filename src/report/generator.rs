use crate::models::{Item, ReportRow};
use crate::utils::config::ReportConfig;

/// Sorted thrown-weapon rows plus their mean accuracy
#[derive(Debug, Clone, PartialEq)]
pub struct ThrownReport {
    pub rows: Vec<ReportRow>,
    pub average_accuracy: f64,
}

impl ThrownReport {
    pub fn total(&self) -> usize {
        self.rows.len()
    }
}

/// Build the report from items using the fixed config
pub fn generate_report(items: &[Item]) -> ThrownReport {
    generate_report_with(items, &ReportConfig::default())
}

/// Filter to thrown crpg items, take the first thrown weapon of each,
/// and order by accuracy descending
pub fn generate_report_with(items: &[Item], config: &ReportConfig) -> ThrownReport {
    let mut rows: Vec<ReportRow> = items
        .iter()
        .filter(|item| config.accepts(item.item_type.as_deref(), &item.id))
        .filter_map(|item| {
            item.first_thrown_weapon()
                .map(|(class, weapon)| ReportRow::from_weapon(item, class, weapon))
        })
        .collect();

    // sort_by is stable: equal accuracies keep item order
    rows.sort_by(|a, b| b.accuracy.cmp(&a.accuracy));

    let average_accuracy = average_accuracy(&rows);
    log::debug!("{} of {} items qualify as thrown", rows.len(), items.len());

    ThrownReport { rows, average_accuracy }
}

fn average_accuracy(rows: &[ReportRow]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let sum: i128 = rows.iter().map(|r| i128::from(r.accuracy)).sum();
    sum as f64 / rows.len() as f64
}
