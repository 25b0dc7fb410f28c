//! The fixed, ordered list of metrics a report shows.

/// Display unit of a metric, rendered as a suffix glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Currency,
    Percentage,
    Plain,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Currency => "$",
            Unit::Percentage => "%",
            Unit::Plain => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    /// Key in the backend's `results` mapping.
    pub key: &'static str,
    /// Fluent message id of the display label.
    pub label_id: &'static str,
    pub unit: Unit,
}

impl MetricSpec {
    const fn new(key: &'static str, label_id: &'static str, unit: Unit) -> Self {
        Self {
            key,
            label_id,
            unit,
        }
    }
}

/// Rendering order is this order, never the response's key order.
pub const METRIC_CATALOG: &[MetricSpec] = &[
    MetricSpec::new("Initial_Balance", "metric-initial-balance", Unit::Currency),
    MetricSpec::new("Final_Balance", "metric-final-balance", Unit::Currency),
    MetricSpec::new("Benchmark_Portfolio", "metric-benchmark-portfolio", Unit::Currency),
    MetricSpec::new("Net_Profit", "metric-net-profit", Unit::Percentage),
    MetricSpec::new("Benchmark_Return", "metric-benchmark-return", Unit::Percentage),
    MetricSpec::new("No_of_Trades", "metric-no-of-trades", Unit::Plain),
    MetricSpec::new("Average_Return", "metric-average-return", Unit::Currency),
    MetricSpec::new("Winning_Trades", "metric-winning-trades", Unit::Plain),
    MetricSpec::new("Losing_Trades", "metric-losing-trades", Unit::Plain),
    MetricSpec::new("Win_Rate", "metric-win-rate", Unit::Percentage),
    MetricSpec::new("Max_Balance", "metric-max-balance", Unit::Currency),
    MetricSpec::new("Min_Balance", "metric-min-balance", Unit::Currency),
    MetricSpec::new("Max_Win", "metric-max-win", Unit::Currency),
    MetricSpec::new("Max_Loss", "metric-max-loss", Unit::Currency),
    MetricSpec::new("Average_Win", "metric-average-win", Unit::Currency),
    MetricSpec::new("Average_Loss", "metric-average-loss", Unit::Currency),
    MetricSpec::new("Total_Fees", "metric-total-fees", Unit::Currency),
    MetricSpec::new("Long_Trades", "metric-long-trades", Unit::Plain),
    MetricSpec::new("Short_Trades", "metric-short-trades", Unit::Plain),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_nineteen_unique_keys() {
        assert_eq!(METRIC_CATALOG.len(), 19);
        let keys: HashSet<_> = METRIC_CATALOG.iter().map(|m| m.key).collect();
        assert_eq!(keys.len(), METRIC_CATALOG.len());
    }

    #[test]
    fn catalog_order_is_fixed() {
        assert_eq!(METRIC_CATALOG.first().map(|m| m.key), Some("Initial_Balance"));
        assert_eq!(METRIC_CATALOG[3].key, "Net_Profit");
        assert_eq!(METRIC_CATALOG.last().map(|m| m.key), Some("Short_Trades"));
    }

    #[test]
    fn units_match_suffixes() {
        let suffix = |key: &str| {
            METRIC_CATALOG
                .iter()
                .find(|m| m.key == key)
                .map(|m| m.unit.suffix())
        };
        assert_eq!(suffix("Total_Fees"), Some("$"));
        assert_eq!(suffix("Win_Rate"), Some("%"));
        assert_eq!(suffix("No_of_Trades"), Some(""));
    }

    #[test]
    fn labels_resolve_in_fallback_locale() {
        let label = crate::i18n::tr(METRIC_CATALOG[6].label_id);
        assert_eq!(label, "Avg Return per Trade");
    }
}
