mod catalog;
pub use catalog::{MetricSpec, Unit, METRIC_CATALOG};

mod view;
pub use view::{ChartContainer, MetricGrid, ReportPanel};

use api::ReportResults;

use crate::core::format;

/// One rendered metric node: label on top, formatted value below.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCell {
    pub key: &'static str,
    pub label_id: &'static str,
    pub value: String,
}

impl MetricCell {
    /// Resolved at render time so a language switch relabels existing cells.
    pub fn label(&self) -> String {
        crate::i18n::tr(self.label_id)
    }

    /// False for metrics the backend did not send.
    pub fn is_reported(&self) -> bool {
        self.value != format::MISSING_VALUE
    }
}

/// Builds a fresh set of cells, one per catalog entry, in catalog order.
pub fn render_metrics(results: &ReportResults) -> Vec<MetricCell> {
    METRIC_CATALOG
        .iter()
        .map(|spec| MetricCell {
            key: spec.key,
            label_id: spec.label_id,
            value: format::format_metric(results.get(spec.key).copied(), spec.unit.suffix()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportResults {
        [
            ("Short_Trades", 4.0),
            ("Initial_Balance", 1000.0),
            ("Final_Balance", 1200.0),
            ("Net_Profit", 20.0),
            ("No_of_Trades", 9.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    #[test]
    fn one_cell_per_catalog_entry_in_order() {
        let cells = render_metrics(&sample());
        assert_eq!(cells.len(), METRIC_CATALOG.len());
        let keys: Vec<_> = cells.iter().map(|c| c.key).collect();
        let expected: Vec<_> = METRIC_CATALOG.iter().map(|m| m.key).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn values_carry_their_suffix() {
        let cells = render_metrics(&sample());
        let value = |key: &str| cells.iter().find(|c| c.key == key).unwrap().value.clone();
        assert_eq!(value("Initial_Balance"), "1000$");
        assert_eq!(value("Final_Balance"), "1200$");
        assert_eq!(value("Net_Profit"), "20%");
        assert_eq!(value("No_of_Trades"), "9");
        assert_eq!(value("Short_Trades"), "4");
    }

    #[test]
    fn absent_keys_render_placeholder() {
        let cells = render_metrics(&sample());
        let win_rate = cells.iter().find(|c| c.key == "Win_Rate").unwrap();
        assert_eq!(win_rate.value, format::MISSING_VALUE);
    }

    #[test]
    fn only_sent_metrics_count_as_reported() {
        let cells = render_metrics(&sample());
        assert_eq!(cells.iter().filter(|c| c.is_reported()).count(), 5);
        assert!(render_metrics(&ReportResults::new())
            .iter()
            .all(|c| !c.is_reported()));
    }

    #[test]
    fn labels_come_from_the_catalog() {
        let cells = render_metrics(&ReportResults::new());
        assert_eq!(cells[0].label(), "Initial Balance");
        assert_eq!(cells[5].label(), "Number of Trades");
    }
}
