use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::upload::ControllerConfig;
use ui::views::ReportPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    ReportPage {},
}

/// Unified theme, inlined so the page never renders unstyled.
const THEME_CSS: &str = include_str!("../../ui/assets/theme/main.css");

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.0.min.js";

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; views subscribe to it to refresh localized text.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(ControllerConfig::default);

    use_hook(|| {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            languages = ?ui::i18n::available_languages(),
            "backtest report web starting"
        );
    });

    rsx! {
        document::Style { "{THEME_CSS}" }
        document::Script { src: PLOTLY_JS }

        Router::<Route> {}
    }
}

/// Header around every routed page.
#[component]
fn WebLayout() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}
