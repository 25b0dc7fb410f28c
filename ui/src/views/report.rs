use dioxus::prelude::*;

use crate::core::platform::PlatformFile;
use crate::report::ReportPanel;
use crate::upload::{ControllerConfig, UploadController, UploadPanel};

#[cfg(debug_assertions)]
fn log_report_render(lang: &str, loading: bool, results_visible: bool) {
    tracing::trace!(lang, loading, results_visible, "report page render");
}

/// The upload form and the results card it fills.
#[component]
pub fn ReportPage() -> Element {
    let config = try_use_context::<ControllerConfig>().unwrap_or_default();
    let controller = use_signal(|| UploadController::<PlatformFile>::new(config));

    // Subscribe to the global language code so labels refresh on a switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    let state = controller.read();
    let results_visible = state.results_visible();
    let cells = state.metrics().to_vec();

    #[cfg(debug_assertions)]
    log_report_render(&lang_current, state.loading(), results_visible);
    drop(state);

    rsx! {
        section { class: "page page-report", lang: "{lang_current}",
            h1 { {crate::t!("app-title")} }
            p { class: "page-report__tagline", {crate::t!("app-tagline")} }

            UploadPanel { controller }
            ReportPanel { visible: results_visible, cells }

            footer { class: "page-report__footer",
                {crate::t!("footer-version")}
                " "
                span { class: "page-report__version", {env!("CARGO_PKG_VERSION")} }
            }
        }
    }
}
