use dioxus::prelude::*;

use crate::core::dom::CHART_CONTAINER_ID;
use crate::report::{MetricCell, METRIC_CATALOG};

/// Results section. Always mounted; hidden until a report arrives so the
/// chart container exists when Plotly draws into it.
#[component]
pub fn ReportPanel(visible: bool, cells: Vec<MetricCell>) -> Element {
    let class_name = if visible {
        "results-card report"
    } else {
        "results-card report hidden"
    };
    let shown = cells.iter().filter(|cell| cell.is_reported()).count();

    rsx! {
        section { id: "results", class: "{class_name}",
            div { class: "results-card__header",
                h2 { {crate::t!("results-title")} }
                if visible {
                    span { class: "results-card__meta", "{shown}/{METRIC_CATALOG.len()}" }
                }
            }
            MetricGrid { cells }
            ChartContainer {}
        }
    }
}

#[component]
pub fn MetricGrid(cells: Vec<MetricCell>) -> Element {
    rsx! {
        div { id: "report-data", class: "report-grid",
            for cell in cells.into_iter() {
                div { key: "{cell.key}", class: "metric",
                    h3 { class: "metric__label", {cell.label()} }
                    p { class: "metric__value", "{cell.value}" }
                }
            }
        }
    }
}

/// Plotly draws into this node; it must stay mounted while results are hidden.
#[component]
pub fn ChartContainer() -> Element {
    rsx! {
        div { class: "report-chart",
            h3 { class: "report-chart__title", {crate::t!("chart-title")} }
            div { id: CHART_CONTAINER_ID, class: "report-chart__canvas" }
        }
    }
}
